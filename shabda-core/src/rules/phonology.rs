//! Phonological rule collaborators

use super::keys;
use crate::error::RuleError;
use crate::phoneme::{phonemes, SegmentClass};
use crate::script::ScriptTag;
use crate::state::{AnalysisState, Diagnostic, Rule, RuleOutput};
use std::collections::BTreeMap;

/// Guṇa vowels (a, e, o)
pub const GUNA: &[&str] = &["a", "e", "o"];
/// Vṛddhi vowels (ā, ai, au)
pub const VRDDHI: &[&str] = &["ā", "ai", "au"];

/// Records the detected script and the token stream
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRule;

impl Rule for ScriptRule {
    fn id(&self) -> &str {
        "phonology.script"
    }

    fn apply(&self, state: &AnalysisState) -> Result<RuleOutput, RuleError> {
        Ok(RuleOutput::new()
            .fact(keys::SCRIPT, state.meta.script.as_str())
            .fact(keys::IS_NATIVE, state.meta.script == ScriptTag::Devanagari)
            .diagnostic(Diagnostic::Tokens {
                script: state.meta.script,
                tokens: state.meta.tokens.clone(),
            }))
    }
}

/// Counts phonemes by class
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryRule;

impl Rule for InventoryRule {
    fn id(&self) -> &str {
        "phonology.inventory"
    }

    fn apply(&self, state: &AnalysisState) -> Result<RuleOutput, RuleError> {
        let view = phonemes(&state.stream());
        let letters: Vec<_> = view.iter().filter(|p| p.class != SegmentClass::Other).collect();

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for phoneme in &letters {
            *counts.entry(phoneme.class.as_str().to_string()).or_default() += 1;
        }

        let vowels = letters.iter().filter(|p| p.class.is_vowel()).count();
        let consonants = letters.iter().filter(|p| p.class.is_consonant()).count();
        let has_aspirate = letters.iter().any(|p| p.class == SegmentClass::Aspirate);
        let final_class = letters
            .last()
            .map_or("none", |p| p.class.as_str());

        Ok(RuleOutput::new()
            .fact(keys::PHONEME_COUNT, letters.len())
            .fact(keys::VOWEL_COUNT, vowels)
            .fact(keys::CONSONANT_COUNT, consonants)
            .fact(keys::HAS_ASPIRATE, has_aspirate)
            .fact(keys::FINAL_CLASS, final_class)
            .diagnostic(Diagnostic::Counts { counts }))
    }
}

/// Establishes the guṇa and vṛddhi categories and tests the surface for them
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelGradeRule;

impl Rule for VowelGradeRule {
    fn id(&self) -> &str {
        "sanjna.vowel-grade"
    }

    fn apply(&self, state: &AnalysisState) -> Result<RuleOutput, RuleError> {
        let view = phonemes(&state.stream());
        let has = |grade: &[&str]| view.iter().any(|p| grade.contains(&p.text.as_str()));

        Ok(RuleOutput::new()
            .definition(keys::GUNA, GUNA.iter().copied())
            .definition(keys::VRDDHI, VRDDHI.iter().copied())
            .fact(keys::HAS_GUNA_VOWEL, has(GUNA))
            .fact(keys::HAS_VRDDHI_VOWEL, has(VRDDHI)))
    }
}
