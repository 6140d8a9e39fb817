//! Named rule pipelines
//!
//! Each preset is a fixed, ordered list of built-in rules. The order is the
//! only thing a preset promises; rules read what earlier ones wrote.

use super::analysis::AnalysisState;
use super::pipeline::Pipeline;
use crate::error::RuleError;
use crate::evidence::{ClassifierConfig, Mode};
use crate::rules::{
    AffixClassRule, BlockingRule, InventoryRule, Operation, OperationRule, ScriptRule,
    VowelGradeRule,
};
use serde::{Deserialize, Serialize};

pub const PHONOLOGICAL: &str = "phonological";
pub const MORPHOLOGICAL: &str = "morphological";
pub const COMPLETE: &str = "complete";

/// Arguments of the morphological and complete presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphologyRequest {
    pub root: String,
    pub affix: String,
    #[serde(default)]
    pub operation: Operation,
    /// Classifier mode; the configured mode when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
}

impl MorphologyRequest {
    pub fn new(root: impl Into<String>, affix: impl Into<String>, operation: Operation) -> Self {
        Self {
            root: root.into(),
            affix: affix.into(),
            operation,
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Script, inventory, vowel grades
pub fn phonological_pipeline() -> Pipeline<'static> {
    Pipeline::new(PHONOLOGICAL)
        .then(ScriptRule)
        .then(InventoryRule)
        .then(VowelGradeRule)
}

/// Affix class, blocking decision, operation
pub fn morphological_pipeline<'c>(
    request: &MorphologyRequest,
    config: &'c ClassifierConfig,
) -> Pipeline<'c> {
    let mode = request.mode.unwrap_or(config.mode);
    Pipeline::new(MORPHOLOGICAL)
        .then(AffixClassRule::new(request.affix.as_str()))
        .then(BlockingRule::new(
            request.root.as_str(),
            request.affix.as_str(),
            mode,
            config,
        ))
        .then(OperationRule::new(
            request.root.as_str(),
            request.affix.as_str(),
            request.operation,
        ))
}

/// Phonological rules followed by morphological ones
pub fn complete_pipeline<'c>(
    request: &MorphologyRequest,
    config: &'c ClassifierConfig,
) -> Pipeline<'c> {
    Pipeline::new(COMPLETE)
        .extend(phonological_pipeline())
        .extend(morphological_pipeline(request, config))
}

pub fn phonological(state: &AnalysisState) -> Result<AnalysisState, RuleError> {
    phonological_pipeline().run(state)
}

pub fn morphological(
    state: &AnalysisState,
    request: &MorphologyRequest,
    config: &ClassifierConfig,
) -> Result<AnalysisState, RuleError> {
    morphological_pipeline(request, config).run(state)
}

pub fn complete(
    state: &AnalysisState,
    request: &MorphologyRequest,
    config: &ClassifierConfig,
) -> Result<AnalysisState, RuleError> {
    complete_pipeline(request, config).run(state)
}
