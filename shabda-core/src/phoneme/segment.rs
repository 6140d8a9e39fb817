//! Script-independent phoneme view
//!
//! Tokens are script spellings; rules want phonemes. This module maps a
//! [`PhonemeStream`] of either script onto canonical Latin phonemes with a
//! segment class attached. Devanagari consonant letters carry an inherent
//! `a` unless a virama or a vowel sign follows inside the same token.

use super::tables::{
    DEVANAGARI_CONSONANTS, DEVANAGARI_MARKS, DEVANAGARI_VOWELS, DEVANAGARI_VOWEL_SIGNS, NUKTA,
    VIRAMA,
};
use super::tokenizer::{tokenize, PhonemeStream};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Phonological class of one segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentClass {
    ShortVowel,
    LongVowel,
    /// e, o, ai, au
    Diphthong,
    Stop,
    Aspirate,
    Nasal,
    Semivowel,
    Sibilant,
    /// h
    Breath,
    Anusvara,
    Visarga,
    Other,
}

impl SegmentClass {
    pub fn is_vowel(self) -> bool {
        matches!(
            self,
            SegmentClass::ShortVowel | SegmentClass::LongVowel | SegmentClass::Diphthong
        )
    }

    pub fn is_consonant(self) -> bool {
        matches!(
            self,
            SegmentClass::Stop
                | SegmentClass::Aspirate
                | SegmentClass::Nasal
                | SegmentClass::Semivowel
                | SegmentClass::Sibilant
                | SegmentClass::Breath
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SegmentClass::ShortVowel => "short_vowel",
            SegmentClass::LongVowel => "long_vowel",
            SegmentClass::Diphthong => "diphthong",
            SegmentClass::Stop => "stop",
            SegmentClass::Aspirate => "aspirate",
            SegmentClass::Nasal => "nasal",
            SegmentClass::Semivowel => "semivowel",
            SegmentClass::Sibilant => "sibilant",
            SegmentClass::Breath => "breath",
            SegmentClass::Anusvara => "anusvara",
            SegmentClass::Visarga => "visarga",
            SegmentClass::Other => "other",
        }
    }
}

/// One phoneme in canonical Latin spelling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phoneme {
    pub text: String,
    pub class: SegmentClass,
}

impl Phoneme {
    fn latin(text: &str) -> Self {
        Self {
            text: text.to_string(),
            class: latin_class(text),
        }
    }
}

/// Phonemes of a short form; roots and affixes rarely exceed eight
pub type Phonemes = SmallVec<[Phoneme; 8]>;

const DECOMPOSED: &[(&str, &str)] = &[
    ("r\u{0323}\u{0304}", "ṝ"),
    ("r\u{0323}", "ṛ"),
    ("l\u{0323}\u{0304}", "ḹ"),
    ("l\u{0323}", "ḷ"),
    ("a\u{0304}", "ā"),
    ("i\u{0304}", "ī"),
    ("u\u{0304}", "ū"),
    ("t\u{0323}h", "ṭh"),
    ("t\u{0323}", "ṭ"),
    ("d\u{0323}h", "ḍh"),
    ("d\u{0323}", "ḍ"),
    ("n\u{0323}", "ṇ"),
    ("n\u{0307}", "ṅ"),
    ("n\u{0303}", "ñ"),
    ("s\u{0301}", "ś"),
    ("s\u{0323}", "ṣ"),
    ("m\u{0323}", "ṃ"),
    ("m\u{0307}", "ṃ"),
    ("ṁ", "ṃ"),
    ("h\u{0323}", "ḥ"),
];

/// Canonical precomposed spelling of a Latin token
pub fn canonical_latin(token: &str) -> &str {
    DECOMPOSED
        .iter()
        .find(|(variant, _)| *variant == token)
        .map_or(token, |(_, canonical)| canonical)
}

/// Segment class of a canonical Latin phoneme
pub fn latin_class(phoneme: &str) -> SegmentClass {
    match phoneme {
        "a" | "i" | "u" | "ṛ" | "ḷ" => SegmentClass::ShortVowel,
        "ā" | "ī" | "ū" | "ṝ" | "ḹ" => SegmentClass::LongVowel,
        "e" | "o" | "ai" | "au" => SegmentClass::Diphthong,
        "k" | "g" | "c" | "j" | "ṭ" | "ḍ" | "t" | "d" | "p" | "b" => SegmentClass::Stop,
        "kh" | "gh" | "ch" | "jh" | "ṭh" | "ḍh" | "th" | "dh" | "ph" | "bh" => {
            SegmentClass::Aspirate
        }
        "ṅ" | "ñ" | "ṇ" | "n" | "m" => SegmentClass::Nasal,
        "y" | "r" | "l" | "v" => SegmentClass::Semivowel,
        "ś" | "ṣ" | "s" => SegmentClass::Sibilant,
        "h" => SegmentClass::Breath,
        "ṃ" => SegmentClass::Anusvara,
        "ḥ" => SegmentClass::Visarga,
        _ => SegmentClass::Other,
    }
}

fn lookup(table: &[(char, &'static str)], ch: char) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == ch).map(|(_, latin)| *latin)
}

fn push_devanagari(token: &str, out: &mut Phonemes) {
    let mut chars = token.chars().peekable();
    let Some(first) = chars.next() else {
        return;
    };

    if let Some(consonant) = lookup(DEVANAGARI_CONSONANTS, first) {
        out.push(Phoneme::latin(consonant));
        if chars.peek() == Some(&NUKTA) {
            chars.next();
        }
        match chars.next() {
            Some(VIRAMA) => {}
            Some(sign) => match lookup(DEVANAGARI_VOWEL_SIGNS, sign) {
                Some(vowel) => out.push(Phoneme::latin(vowel)),
                None => out.push(Phoneme {
                    text: sign.to_string(),
                    class: SegmentClass::Other,
                }),
            },
            None => out.push(Phoneme::latin("a")),
        }
        return;
    }

    let latin = lookup(DEVANAGARI_VOWELS, first)
        .or_else(|| lookup(DEVANAGARI_VOWEL_SIGNS, first))
        .or_else(|| lookup(DEVANAGARI_MARKS, first));
    match latin {
        Some(latin) => out.push(Phoneme::latin(latin)),
        None => out.push(Phoneme {
            text: token.to_string(),
            class: SegmentClass::Other,
        }),
    }
}

/// Latin phoneme view of a token stream
pub fn phonemes(stream: &PhonemeStream) -> Phonemes {
    let mut out = Phonemes::new();
    for token in stream.iter() {
        let starts_native = token
            .chars()
            .next()
            .is_some_and(|ch| ('\u{0900}'..='\u{097F}').contains(&ch));
        if starts_native {
            push_devanagari(token, &mut out);
        } else {
            out.push(Phoneme::latin(canonical_latin(token)));
        }
    }
    out
}

/// Tokenize and convert a form in one step
pub fn phonemes_of(text: &str) -> Phonemes {
    phonemes(&tokenize(text))
}

/// Concatenated Latin spelling of the letter phonemes, skipping everything else
pub fn latin_spelling(phonemes: &[Phoneme]) -> String {
    phonemes
        .iter()
        .filter(|p| p.class != SegmentClass::Other || p.text == "'")
        .map(|p| p.text.as_str())
        .collect()
}
