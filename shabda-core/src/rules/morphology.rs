//! Morphological rule collaborators: affix classification, blocking,
//! vowel-grade operations

use super::keys;
use crate::error::{RuleError, UnknownOperation};
use crate::evidence::{evaluate, AffixFeatures, ClassifierConfig, Mode, RootFeatures};
use crate::phoneme::SegmentClass;
use crate::state::{AnalysisState, Diagnostic, Rule, RuleOutput};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Vowel-grade operation requested on a root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Guna,
    Vrddhi,
    #[default]
    None,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Guna => "guna",
            Operation::Vrddhi => "vrddhi",
            Operation::None => "none",
        }
    }

    /// Replacement for a vowel under this operation
    pub fn grade(&self, vowel: &str) -> Option<&'static str> {
        match (self, vowel) {
            (Operation::Guna, "i" | "ī") => Some("e"),
            (Operation::Guna, "u" | "ū") => Some("o"),
            (Operation::Guna, "ṛ" | "ṝ") => Some("ar"),
            (Operation::Guna, "ḷ") => Some("al"),
            (Operation::Vrddhi, "a") => Some("ā"),
            (Operation::Vrddhi, "i" | "ī" | "e") => Some("ai"),
            (Operation::Vrddhi, "u" | "ū" | "o") => Some("au"),
            (Operation::Vrddhi, "ṛ" | "ṝ") => Some("ār"),
            (Operation::Vrddhi, "ḷ") => Some("āl"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "guna" | "guṇa" => Ok(Operation::Guna),
            "vrddhi" | "vṛddhi" | "vriddhi" => Ok(Operation::Vrddhi),
            "none" | "" => Ok(Operation::None),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}

/// Classifies an affix and establishes its markers (it) as a definition
#[derive(Debug, Clone)]
pub struct AffixClassRule {
    affix: String,
}

impl AffixClassRule {
    pub fn new(affix: impl Into<String>) -> Self {
        Self {
            affix: affix.into(),
        }
    }
}

impl Rule for AffixClassRule {
    fn id(&self) -> &str {
        "morphology.affix-class"
    }

    fn apply(&self, _state: &AnalysisState) -> Result<RuleOutput, RuleError> {
        let affix = AffixFeatures::from_label(&self.affix);
        let kit = affix.class == crate::evidence::AffixClass::KitNgit;
        Ok(RuleOutput::new()
            .fact(keys::AFFIX_LABEL, affix.label.as_str())
            .fact(keys::AFFIX_SURFACE, affix.surface.as_str())
            .fact(keys::AFFIX_CLASS, affix.class.as_str())
            .fact(keys::AFFIX_KIT, kit)
            .definition(keys::IT, affix.markers))
    }
}

/// Runs the blocking classifier for a root/affix pair
#[derive(Debug, Clone)]
pub struct BlockingRule<'c> {
    root: String,
    affix: String,
    mode: Mode,
    config: &'c ClassifierConfig,
}

impl<'c> BlockingRule<'c> {
    /// Rule id, also the key of the recorded decision
    pub const ID: &'static str = "morphology.blocking";

    pub fn new(
        root: impl Into<String>,
        affix: impl Into<String>,
        mode: Mode,
        config: &'c ClassifierConfig,
    ) -> Self {
        Self {
            root: root.into(),
            affix: affix.into(),
            mode,
            config,
        }
    }
}

impl Rule for BlockingRule<'_> {
    fn id(&self) -> &str {
        Self::ID
    }

    fn apply(&self, _state: &AnalysisState) -> Result<RuleOutput, RuleError> {
        let decision = evaluate(&self.root, &self.affix, self.mode, self.config);
        Ok(RuleOutput::new()
            .fact(keys::BLOCKING_OUTCOME, decision.outcome)
            .fact(keys::BLOCKING_CONFIDENCE, decision.confidence)
            .fact(keys::BLOCKING_PATH, decision.path.as_str())
            .note(decision.rationale.clone())
            .diagnostic(Diagnostic::Blocking(decision)))
    }
}

/// Applies a vowel-grade operation, or truncates the root when blocking holds
///
/// Reads the blocking outcome an earlier rule put into the state.
#[derive(Debug, Clone)]
pub struct OperationRule {
    root: String,
    affix: String,
    operation: Operation,
}

impl OperationRule {
    pub fn new(root: impl Into<String>, affix: impl Into<String>, operation: Operation) -> Self {
        Self {
            root: root.into(),
            affix: affix.into(),
            operation,
        }
    }
}

/// Root with its last grade-able vowel replaced
fn graded_stem(root: &RootFeatures, operation: Operation) -> String {
    let target = root
        .phonemes
        .iter()
        .rposition(|p| p.class.is_vowel() && operation.grade(&p.text).is_some());

    root.phonemes
        .iter()
        .enumerate()
        .map(|(i, p)| match target {
            Some(t) if t == i => operation.grade(&p.text).unwrap_or(p.text.as_str()),
            _ => p.text.as_str(),
        })
        .collect()
}

/// Root without a final nasal
fn truncated_stem(root: &RootFeatures) -> String {
    let keep = match root.final_class {
        Some(SegmentClass::Nasal) => root.phonemes.len() - 1,
        _ => root.phonemes.len(),
    };
    root.phonemes[..keep].iter().map(|p| p.text.as_str()).collect()
}

impl Rule for OperationRule {
    fn id(&self) -> &str {
        "morphology.operation"
    }

    fn apply(&self, state: &AnalysisState) -> Result<RuleOutput, RuleError> {
        let blocked = state
            .fact(keys::BLOCKING_OUTCOME)
            .and_then(|value| value.as_bool())
            .ok_or_else(|| RuleError::MissingFact {
                rule_id: self.id().to_string(),
                key: keys::BLOCKING_OUTCOME.to_string(),
            })?;

        let root = RootFeatures::from_form(&self.root);
        if root.is_empty() {
            // Nothing to operate on; the surface stays as it is
            return Ok(RuleOutput::new()
                .fact(keys::OPERATION_NAME, self.operation.as_str())
                .fact(keys::OPERATION_BLOCKED, blocked)
                .fact(keys::OPERATION_APPLIED, false)
                .fact(keys::OPERATION_STEM, "")
                .fact(keys::OPERATION_RESULT, "")
                .note("root has no letters"));
        }
        let affix = AffixFeatures::from_label(&self.affix);

        let stem = if blocked {
            truncated_stem(&root)
        } else {
            graded_stem(&root, self.operation)
        };
        let applied = !blocked && stem != root.spelling;
        let result = format!("{stem}{}", affix.surface);

        Ok(RuleOutput::new()
            .fact(keys::OPERATION_NAME, self.operation.as_str())
            .fact(keys::OPERATION_BLOCKED, blocked)
            .fact(keys::OPERATION_APPLIED, applied)
            .fact(keys::OPERATION_STEM, stem.as_str())
            .fact(keys::OPERATION_RESULT, result.as_str())
            .diagnostic(Diagnostic::Operation {
                name: self.operation.as_str().to_string(),
                input: root.spelling.clone(),
                output: result.clone(),
                blocked,
            })
            .surface(result))
    }
}
