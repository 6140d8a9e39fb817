//! Evidence signals for the blocking classifier
//!
//! Each signal is computed from the root or the affix features alone and
//! never looks at another signal's value.

use super::features::{AffixClass, AffixFeatures, RootFeatures};
use crate::phoneme::SegmentClass;
use serde::{Deserialize, Serialize};

/// One independently computed feature feeding the weighted score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSignal {
    /// Root has exactly one vowel
    RootMonosyllabic,
    /// Root is consonant, vowel, consonant
    RootCvcShape,
    /// Root ends in a nasal
    RootFinalNasal,
    /// Root's vowel is short
    RootShortVowel,
    /// Affix carries a k or ṅ marker
    AffixKitClass,
    /// Affix surface begins with a consonant
    AffixConsonantInitial,
}

impl EvidenceSignal {
    /// Every signal, in scoring order
    pub const ALL: [EvidenceSignal; 6] = [
        Self::RootMonosyllabic,
        Self::RootCvcShape,
        Self::RootFinalNasal,
        Self::RootShortVowel,
        Self::AffixKitClass,
        Self::AffixConsonantInitial,
    ];

    /// Name used as configuration key
    pub fn name(&self) -> &'static str {
        match self {
            Self::RootMonosyllabic => "root_monosyllabic",
            Self::RootCvcShape => "root_cvc_shape",
            Self::RootFinalNasal => "root_final_nasal",
            Self::RootShortVowel => "root_short_vowel",
            Self::AffixKitClass => "affix_kit_class",
            Self::AffixConsonantInitial => "affix_consonant_initial",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|signal| signal.name() == name)
    }

    /// Weight in the default configuration
    pub fn default_weight(&self) -> f64 {
        match self {
            Self::RootMonosyllabic => 0.5,
            Self::RootCvcShape => 0.5,
            Self::RootFinalNasal => 2.0,
            Self::RootShortVowel => 0.25,
            Self::AffixKitClass => 1.5,
            Self::AffixConsonantInitial => 0.5,
        }
    }

    /// Evaluate this signal for a root/affix pair
    pub fn evaluate(&self, root: &RootFeatures, affix: &AffixFeatures) -> bool {
        match self {
            Self::RootMonosyllabic => root.syllables == 1,
            Self::RootCvcShape => root.is_canonical_cvc(),
            Self::RootFinalNasal => root.final_class == Some(SegmentClass::Nasal),
            Self::RootShortVowel => root.nucleus == Some(SegmentClass::ShortVowel),
            Self::AffixKitClass => affix.class == AffixClass::KitNgit,
            Self::AffixConsonantInitial => affix.initial_class.is_some_and(SegmentClass::is_consonant),
        }
    }
}

impl std::fmt::Display for EvidenceSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Signals that hold for a pair, in [`EvidenceSignal::ALL`] order
pub fn active_signals(root: &RootFeatures, affix: &AffixFeatures) -> Vec<EvidenceSignal> {
    EvidenceSignal::ALL
        .into_iter()
        .filter(|signal| signal.evaluate(root, affix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(root: &str, affix: &str) -> Vec<EvidenceSignal> {
        active_signals(&RootFeatures::from_form(root), &AffixFeatures::from_label(affix))
    }

    #[test]
    fn test_gam_ya_activates_everything() {
        assert_eq!(active("gam", "ya"), EvidenceSignal::ALL.to_vec());
    }

    #[test]
    fn test_sad_kta_lacks_nasal() {
        let signals = active("sad", "kta");
        assert!(!signals.contains(&EvidenceSignal::RootFinalNasal));
        assert!(signals.contains(&EvidenceSignal::AffixKitClass));
        assert_eq!(signals.len(), 5);
    }

    #[test]
    fn test_vowel_initial_sarvadhatuka() {
        let signals = active("bhū", "śap");
        assert_eq!(signals, vec![EvidenceSignal::RootMonosyllabic]);
    }

    #[test]
    fn test_empty_pair_has_no_signals() {
        assert!(active("", "").is_empty());
    }

    #[test]
    fn test_names_round_trip() {
        for signal in EvidenceSignal::ALL {
            assert_eq!(EvidenceSignal::from_name(signal.name()), Some(signal));
        }
        assert_eq!(EvidenceSignal::from_name("unknown"), None);
    }
}
