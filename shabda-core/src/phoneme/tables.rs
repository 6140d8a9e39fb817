//! Ordered phoneme candidate tables
//!
//! Each table lists the verbatim spellings the tokenizer may consume at a
//! cursor position. Order is significant: the first matching candidate
//! wins, so every multi-character spelling must precede all of its proper
//! prefixes ("ai" before "a", "kh" before "k").

use crate::script::ScriptTag;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Latin (IAST) spellings, longest units first within each family
const LATIN_CANDIDATES: &[&str] = &[
    // Diphthongs
    "ai",
    "au",
    // Decomposed vocalic liquids (r/l + dot below + macron)
    "r\u{0323}\u{0304}",
    "r\u{0323}",
    "l\u{0323}\u{0304}",
    "l\u{0323}",
    // Decomposed long vowels
    "a\u{0304}",
    "i\u{0304}",
    "u\u{0304}",
    // Decomposed retroflex stops, aspirated first
    "t\u{0323}h",
    "t\u{0323}",
    "d\u{0323}h",
    "d\u{0323}",
    "n\u{0323}",
    // Decomposed nasals, sibilants, anusvāra, visarga
    "n\u{0307}",
    "n\u{0303}",
    "s\u{0301}",
    "s\u{0323}",
    "m\u{0323}",
    "m\u{0307}",
    "h\u{0323}",
    // Aspirated stops
    "kh",
    "gh",
    "ch",
    "jh",
    "ṭh",
    "ḍh",
    "th",
    "dh",
    "ph",
    "bh",
    // Vowels
    "a",
    "ā",
    "i",
    "ī",
    "u",
    "ū",
    "ṛ",
    "ṝ",
    "ḷ",
    "ḹ",
    "e",
    "o",
    // Anusvāra, visarga
    "ṃ",
    "ṁ",
    "ḥ",
    // Consonants
    "k",
    "g",
    "ṅ",
    "c",
    "j",
    "ñ",
    "ṭ",
    "ḍ",
    "ṇ",
    "t",
    "d",
    "n",
    "p",
    "b",
    "m",
    "y",
    "r",
    "l",
    "v",
    "ś",
    "ṣ",
    "s",
    "h",
    // Avagraha
    "'",
];

/// Devanagari consonant letters with their Latin values
pub(crate) const DEVANAGARI_CONSONANTS: &[(char, &str)] = &[
    ('क', "k"),
    ('ख', "kh"),
    ('ग', "g"),
    ('घ', "gh"),
    ('ङ', "ṅ"),
    ('च', "c"),
    ('छ', "ch"),
    ('ज', "j"),
    ('झ', "jh"),
    ('ञ', "ñ"),
    ('ट', "ṭ"),
    ('ठ', "ṭh"),
    ('ड', "ḍ"),
    ('ढ', "ḍh"),
    ('ण', "ṇ"),
    ('त', "t"),
    ('थ', "th"),
    ('द', "d"),
    ('ध', "dh"),
    ('न', "n"),
    ('प', "p"),
    ('फ', "ph"),
    ('ब', "b"),
    ('भ', "bh"),
    ('म', "m"),
    ('य', "y"),
    ('र', "r"),
    ('ल', "l"),
    ('ळ', "ḷ"),
    ('व', "v"),
    ('श', "ś"),
    ('ष', "ṣ"),
    ('स', "s"),
    ('ह', "h"),
];

/// Dependent vowel signs with their Latin values
pub(crate) const DEVANAGARI_VOWEL_SIGNS: &[(char, &str)] = &[
    ('\u{093E}', "ā"),
    ('\u{093F}', "i"),
    ('\u{0940}', "ī"),
    ('\u{0941}', "u"),
    ('\u{0942}', "ū"),
    ('\u{0943}', "ṛ"),
    ('\u{0944}', "ṝ"),
    ('\u{0962}', "ḷ"),
    ('\u{0963}', "ḹ"),
    ('\u{0947}', "e"),
    ('\u{0948}', "ai"),
    ('\u{094B}', "o"),
    ('\u{094C}', "au"),
];

/// Independent vowel letters with their Latin values
pub(crate) const DEVANAGARI_VOWELS: &[(char, &str)] = &[
    ('अ', "a"),
    ('आ', "ā"),
    ('इ', "i"),
    ('ई', "ī"),
    ('उ', "u"),
    ('ऊ', "ū"),
    ('ऋ', "ṛ"),
    ('ॠ', "ṝ"),
    ('ऌ', "ḷ"),
    ('ॡ', "ḹ"),
    ('ए', "e"),
    ('ऐ', "ai"),
    ('ओ', "o"),
    ('औ', "au"),
];

/// Signs that stand for a phoneme of their own
pub(crate) const DEVANAGARI_MARKS: &[(char, &str)] = &[
    ('\u{0902}', "ṃ"),
    ('\u{0901}', "ṃ"),
    ('\u{0903}', "ḥ"),
    ('\u{093D}', "'"),
];

pub(crate) const VIRAMA: char = '\u{094D}';
pub(crate) const NUKTA: char = '\u{093C}';

/// An ordered candidate list with a first-character index
///
/// The index only narrows the scan; within one first character the
/// original table order is preserved, so lookup gives the same answer as
/// a linear scan of the whole table.
#[derive(Debug, Clone)]
pub struct CandidateTable {
    candidates: Vec<String>,
    by_first: HashMap<char, Vec<usize>>,
}

impl CandidateTable {
    /// Build a table, dropping duplicate spellings after their first occurrence
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for candidate in candidates {
            let candidate = candidate.into();
            if candidate.is_empty() || !seen.insert(candidate.clone()) {
                continue;
            }
            ordered.push(candidate);
        }

        let mut by_first: HashMap<char, Vec<usize>> = HashMap::new();
        for (index, candidate) in ordered.iter().enumerate() {
            if let Some(first) = candidate.chars().next() {
                by_first.entry(first).or_default().push(index);
            }
        }

        Self {
            candidates: ordered,
            by_first,
        }
    }

    /// First candidate that `rest` starts with, in table order
    #[inline]
    pub fn match_prefix(&self, rest: &str) -> Option<&str> {
        let first = rest.chars().next()?;
        self.by_first.get(&first)?.iter().find_map(|&index| {
            let candidate = self.candidates[index].as_str();
            rest.starts_with(candidate).then_some(candidate)
        })
    }

    /// Candidates in table order
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the table holds no candidates
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// A longer candidate listed after one of its proper prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderViolation {
    pub prefix: String,
    pub prefix_index: usize,
    pub longer: String,
    pub longer_index: usize,
}

impl std::fmt::Display for OrderViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "candidate {:?} (#{}) is shadowed by its prefix {:?} (#{})",
            self.longer, self.longer_index, self.prefix, self.prefix_index
        )
    }
}

/// Check that no candidate is preceded by one of its proper prefixes
pub fn validate_candidate_order<S: AsRef<str>>(candidates: &[S]) -> Result<(), OrderViolation> {
    for (i, earlier) in candidates.iter().enumerate() {
        let earlier = earlier.as_ref();
        for (j, later) in candidates.iter().enumerate().skip(i + 1) {
            let later = later.as_ref();
            if later.len() > earlier.len() && later.starts_with(earlier) {
                return Err(OrderViolation {
                    prefix: earlier.to_string(),
                    prefix_index: i,
                    longer: later.to_string(),
                    longer_index: j,
                });
            }
        }
    }
    Ok(())
}

fn devanagari_candidates() -> Vec<String> {
    let mut out = Vec::new();
    for &(consonant, _) in DEVANAGARI_CONSONANTS {
        for base in [format!("{consonant}{NUKTA}"), consonant.to_string()] {
            out.push(format!("{base}{VIRAMA}"));
            for &(sign, _) in DEVANAGARI_VOWEL_SIGNS {
                out.push(format!("{base}{sign}"));
            }
            out.push(base);
        }
    }
    out.extend(DEVANAGARI_VOWELS.iter().map(|(ch, _)| ch.to_string()));
    out.extend(DEVANAGARI_MARKS.iter().map(|(ch, _)| ch.to_string()));
    out
}

/// Latin (IAST) candidate table
pub fn latin_table() -> &'static CandidateTable {
    static TABLE: OnceLock<CandidateTable> = OnceLock::new();
    TABLE.get_or_init(|| CandidateTable::new(LATIN_CANDIDATES.iter().copied()))
}

/// Devanagari candidate table
pub fn devanagari_table() -> &'static CandidateTable {
    static TABLE: OnceLock<CandidateTable> = OnceLock::new();
    TABLE.get_or_init(|| CandidateTable::new(devanagari_candidates()))
}

/// Latin candidates followed by Devanagari candidates, deduplicated
pub fn combined_table() -> &'static CandidateTable {
    static TABLE: OnceLock<CandidateTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        CandidateTable::new(
            latin_table()
                .candidates()
                .iter()
                .chain(devanagari_table().candidates())
                .cloned(),
        )
    })
}

/// Table used to tokenize text of the given script
pub fn table_for(script: ScriptTag) -> &'static CandidateTable {
    match script {
        ScriptTag::Latin => latin_table(),
        ScriptTag::Devanagari => devanagari_table(),
        ScriptTag::Mixed | ScriptTag::Unknown => combined_table(),
    }
}
