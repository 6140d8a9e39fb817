//! Built-in rule collaborators
//!
//! Each rule reads an [`AnalysisState`](crate::state::AnalysisState) and
//! reports what it derived under the keys in [`keys`]. Rules never see
//! each other; ordering is the pipeline's concern.

pub mod morphology;
pub mod phonology;

pub use morphology::{AffixClassRule, BlockingRule, Operation, OperationRule};
pub use phonology::{InventoryRule, ScriptRule, VowelGradeRule, GUNA, VRDDHI};

/// Fact and definition keys written by the built-in rules
pub mod keys {
    pub const SCRIPT: &str = "phonology.script";
    pub const IS_NATIVE: &str = "phonology.is_devanagari";
    pub const PHONEME_COUNT: &str = "phonology.phoneme_count";
    pub const VOWEL_COUNT: &str = "phonology.vowel_count";
    pub const CONSONANT_COUNT: &str = "phonology.consonant_count";
    pub const HAS_ASPIRATE: &str = "phonology.has_aspirate";
    pub const FINAL_CLASS: &str = "phonology.final_class";

    pub const HAS_GUNA_VOWEL: &str = "sanjna.has_guna_vowel";
    pub const HAS_VRDDHI_VOWEL: &str = "sanjna.has_vrddhi_vowel";

    // Definitions
    pub const GUNA: &str = "guṇa";
    pub const VRDDHI: &str = "vṛddhi";
    pub const IT: &str = "it";

    pub const AFFIX_LABEL: &str = "affix.label";
    pub const AFFIX_SURFACE: &str = "affix.surface";
    pub const AFFIX_CLASS: &str = "affix.class";
    pub const AFFIX_KIT: &str = "affix.kit";

    pub const BLOCKING_OUTCOME: &str = "blocking.outcome";
    pub const BLOCKING_CONFIDENCE: &str = "blocking.confidence";
    pub const BLOCKING_PATH: &str = "blocking.path";

    pub const OPERATION_NAME: &str = "operation.name";
    pub const OPERATION_BLOCKED: &str = "operation.blocked";
    pub const OPERATION_APPLIED: &str = "operation.applied";
    pub const OPERATION_STEM: &str = "operation.stem";
    pub const OPERATION_RESULT: &str = "operation.result";
}
