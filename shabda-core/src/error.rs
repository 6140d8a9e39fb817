//! Core error types
//!
//! Invalid input is never an error here: empty or odd text produces a
//! degenerate result instead. Only unreadable configuration and failing
//! rule collaborators surface as `Err`.

use thiserror::Error;

/// Configuration loading or parsing error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML could not be parsed into a classifier configuration
    #[error("failed to parse classifier config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("failed to render classifier config: {0}")]
    Render(#[from] toml::ser::Error),

    /// Configuration file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Unrecognised classifier mode name
    #[error("unknown classifier mode: {0}")]
    UnknownMode(String),
}

/// Failure reported by a rule collaborator
///
/// The pipeline forwards these unchanged; it never retries or recovers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    /// The rule could not derive its output
    #[error("rule {rule_id} failed: {reason}")]
    Failed { rule_id: String, reason: String },

    /// The rule needs a fact an earlier rule should have established
    #[error("rule {rule_id} requires fact {key}")]
    MissingFact { rule_id: String, key: String },
}

impl RuleError {
    pub fn failed(rule_id: impl Into<String>, reason: impl Into<String>) -> Self {
        RuleError::Failed {
            rule_id: rule_id.into(),
            reason: reason.into(),
        }
    }

    /// Id of the rule that failed
    pub fn rule_id(&self) -> &str {
        match self {
            RuleError::Failed { rule_id, .. } | RuleError::MissingFact { rule_id, .. } => rule_id,
        }
    }
}

/// Unrecognised vowel-grade operation name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0} (expected guna, vrddhi or none)")]
pub struct UnknownOperation(pub String);
