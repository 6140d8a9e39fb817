//! Phonological features of roots and morphological features of affixes

use crate::phoneme::{latin_spelling, phonemes_of, Phoneme, Phonemes, SegmentClass};
use serde::{Deserialize, Serialize};

/// Morphological class of an affix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffixClass {
    /// Carries a k or ṅ marker (kit/ṅit)
    KitNgit,
    Ardhadhatuka,
    Sarvadhatuka,
    Unknown,
}

impl AffixClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AffixClass::KitNgit => "kit_ngit",
            AffixClass::Ardhadhatuka => "ardhadhatuka",
            AffixClass::Sarvadhatuka => "sarvadhatuka",
            AffixClass::Unknown => "unknown",
        }
    }
}

/// A catalogued affix: label, form after marker removal, markers, class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffixEntry {
    pub label: &'static str,
    pub surface: &'static str,
    pub markers: &'static [&'static str],
    pub class: AffixClass,
}

const fn entry(
    label: &'static str,
    surface: &'static str,
    markers: &'static [&'static str],
    class: AffixClass,
) -> AffixEntry {
    AffixEntry {
        label,
        surface,
        markers,
        class,
    }
}

/// Affix catalogue keyed by Latin label
pub const AFFIXES: &[AffixEntry] = &[
    entry("kta", "ta", &["k"], AffixClass::KitNgit),
    entry("ktavatu", "tavat", &["k", "u"], AffixClass::KitNgit),
    entry("ktvā", "tvā", &["k"], AffixClass::KitNgit),
    entry("ktin", "ti", &["k", "n"], AffixClass::KitNgit),
    entry("kyap", "ya", &["k", "p"], AffixClass::KitNgit),
    entry("yak", "ya", &["k"], AffixClass::KitNgit),
    // bare passive marker, read as yak
    entry("ya", "ya", &[], AffixClass::KitNgit),
    entry("kvip", "", &["k", "v", "i", "p"], AffixClass::KitNgit),
    entry("lyap", "ya", &["l", "p"], AffixClass::Ardhadhatuka),
    entry("lyuṭ", "ana", &["l", "ṭ"], AffixClass::Ardhadhatuka),
    entry("ṇvul", "aka", &["ṇ", "l"], AffixClass::Ardhadhatuka),
    entry("tṛc", "tṛ", &["c"], AffixClass::Ardhadhatuka),
    entry("tumun", "tum", &["u", "n"], AffixClass::Ardhadhatuka),
    entry("tavya", "tavya", &[], AffixClass::Ardhadhatuka),
    entry("anīyar", "anīya", &["r"], AffixClass::Ardhadhatuka),
    entry("ghañ", "a", &["gh", "ñ"], AffixClass::Ardhadhatuka),
    entry("ṇyat", "ya", &["ṇ", "t"], AffixClass::Ardhadhatuka),
    entry("yat", "ya", &["t"], AffixClass::Ardhadhatuka),
    entry("sya", "sya", &[], AffixClass::Ardhadhatuka),
    entry("śap", "a", &["ś", "p"], AffixClass::Sarvadhatuka),
    entry("tip", "ti", &["p"], AffixClass::Sarvadhatuka),
    entry("śatṛ", "at", &["ś", "ṛ"], AffixClass::Sarvadhatuka),
];

/// Catalogue entry for a Latin label
pub fn affix_entry(label: &str) -> Option<&'static AffixEntry> {
    AFFIXES.iter().find(|entry| entry.label == label)
}

fn letters(text: &str) -> Phonemes {
    phonemes_of(text)
        .into_iter()
        .filter(|p| p.class != SegmentClass::Other)
        .collect()
}

fn shape_of(phonemes: &[Phoneme]) -> String {
    phonemes
        .iter()
        .map(|p| {
            if p.class.is_vowel() {
                'V'
            } else if p.class.is_consonant() {
                'C'
            } else {
                'X'
            }
        })
        .collect()
}

/// Features of a verbal root
#[derive(Debug, Clone, PartialEq)]
pub struct RootFeatures {
    pub phonemes: Phonemes,
    /// Latin spelling, the key for curated tables
    pub spelling: String,
    pub syllables: usize,
    /// One letter per phoneme: C consonant, V vowel, X other
    pub shape: String,
    pub final_class: Option<SegmentClass>,
    /// Class of the last vowel
    pub nucleus: Option<SegmentClass>,
}

impl RootFeatures {
    /// Derive features from a root in either script
    pub fn from_form(root: &str) -> Self {
        let phonemes = letters(root);
        let spelling = latin_spelling(&phonemes);
        let syllables = phonemes.iter().filter(|p| p.class.is_vowel()).count();
        let shape = shape_of(&phonemes);
        let final_class = phonemes.last().map(|p| p.class);
        let nucleus = phonemes
            .iter()
            .rev()
            .find(|p| p.class.is_vowel())
            .map(|p| p.class);

        Self {
            phonemes,
            spelling,
            syllables,
            shape,
            final_class,
            nucleus,
        }
    }

    /// No letters at all
    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    pub fn is_canonical_cvc(&self) -> bool {
        self.shape == "CVC"
    }
}

/// Features of an affix
#[derive(Debug, Clone, PartialEq)]
pub struct AffixFeatures {
    /// Latin label as given, the key for curated tables
    pub label: String,
    /// Form after marker removal
    pub surface: String,
    pub markers: Vec<String>,
    pub class: AffixClass,
    pub initial_class: Option<SegmentClass>,
}

impl AffixFeatures {
    /// Derive features from an affix label in either script
    ///
    /// Labels missing from the catalogue are their own surface form with
    /// class [`AffixClass::Unknown`].
    pub fn from_label(affix: &str) -> Self {
        let label = latin_spelling(&letters(affix));
        let (surface, markers, class) = match affix_entry(&label) {
            Some(entry) => (
                entry.surface.to_string(),
                entry.markers.iter().map(|m| m.to_string()).collect(),
                entry.class,
            ),
            None => (label.clone(), Vec::new(), AffixClass::Unknown),
        };
        let initial_class = letters(&surface).first().map(|p| p.class);

        Self {
            label,
            surface,
            markers,
            class,
            initial_class,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_features() {
        let gam = RootFeatures::from_form("gam");
        assert_eq!(gam.spelling, "gam");
        assert_eq!(gam.syllables, 1);
        assert!(gam.is_canonical_cvc());
        assert_eq!(gam.final_class, Some(SegmentClass::Nasal));
        assert_eq!(gam.nucleus, Some(SegmentClass::ShortVowel));

        let bhu = RootFeatures::from_form("bhū");
        assert_eq!(bhu.shape, "CV");
        assert_eq!(bhu.nucleus, Some(SegmentClass::LongVowel));
    }

    #[test]
    fn test_devanagari_root_matches_latin() {
        let latin = RootFeatures::from_form("gam");
        let native = RootFeatures::from_form("गम्");
        assert_eq!(latin, native);
    }

    #[test]
    fn test_empty_root() {
        assert!(RootFeatures::from_form("").is_empty());
        assert!(RootFeatures::from_form(" - ").is_empty());
    }

    #[test]
    fn test_catalogued_affix() {
        let kta = AffixFeatures::from_label("kta");
        assert_eq!(kta.surface, "ta");
        assert_eq!(kta.markers, vec!["k"]);
        assert_eq!(kta.class, AffixClass::KitNgit);
        assert_eq!(kta.initial_class, Some(SegmentClass::Stop));

        let native = AffixFeatures::from_label("क्त");
        assert_eq!(native, kta);
    }

    #[test]
    fn test_unknown_affix() {
        let affix = AffixFeatures::from_label("ana");
        assert_eq!(affix.class, AffixClass::Unknown);
        assert_eq!(affix.surface, "ana");
        assert_eq!(affix.initial_class, Some(SegmentClass::ShortVowel));
    }

    #[test]
    fn test_marker_only_affix() {
        let kvip = AffixFeatures::from_label("kvip");
        assert!(!kvip.is_empty());
        assert_eq!(kvip.surface, "");
        assert_eq!(kvip.initial_class, None);
    }
}
