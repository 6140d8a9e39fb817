//! Threaded analysis state
//!
//! An [`AnalysisState`] is a plain value: rules read it, the pipeline
//! derives a new one from it, and nothing ever mutates a state that has
//! been handed out.

use crate::evidence::Decision;
use crate::phoneme::{tokenize, PhonemeStream};
use crate::script::ScriptTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Value of a fact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FactValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FactValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FactValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FactValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for FactValue {
    fn from(value: bool) -> Self {
        FactValue::Bool(value)
    }
}

impl From<f64> for FactValue {
    fn from(value: f64) -> Self {
        FactValue::Number(value)
    }
}

impl From<usize> for FactValue {
    fn from(value: usize) -> Self {
        FactValue::Number(value as f64)
    }
}

impl From<&str> for FactValue {
    fn from(value: &str) -> Self {
        FactValue::Text(value.to_string())
    }
}

impl From<String> for FactValue {
    fn from(value: String) -> Self {
        FactValue::Text(value)
    }
}

impl std::fmt::Display for FactValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactValue::Bool(value) => write!(f, "{value}"),
            FactValue::Number(value) => write!(f, "{value}"),
            FactValue::Text(value) => f.write_str(value),
        }
    }
}

/// Per-rule diagnostic payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Token stream a rule worked from
    Tokens {
        script: ScriptTag,
        tokens: Vec<String>,
    },
    /// Segment-class histogram
    Counts { counts: BTreeMap<String, u64> },
    /// Full blocking decision
    Blocking(Decision),
    /// Result of a morphological operation
    Operation {
        name: String,
        input: String,
        output: String,
        blocked: bool,
    },
    /// Free-form message
    Note { message: String },
}

/// One rule application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Position in the history, starting at 0
    pub sequence: usize,
    pub rule_id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: u64,
    /// Surface before the rule
    pub input: String,
    /// Surface after the rule
    pub output: String,
    /// Changed keys, then the rule's own notes
    pub notes: Vec<String>,
}

/// Script and tokens of the current surface, and the creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateMeta {
    pub script: ScriptTag,
    pub tokens: Vec<String>,
    pub created_ms: u64,
}

/// Accumulated result of an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisState {
    pub surface: String,
    pub history: Vec<HistoryEntry>,
    pub facts: BTreeMap<String, FactValue>,
    /// Named categories (saṃjñā) and their members
    pub definitions: BTreeMap<String, Vec<String>>,
    /// Latest diagnostic per rule id
    pub diagnostics: BTreeMap<String, Diagnostic>,
    pub meta: StateMeta,
}

pub(crate) fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

impl AnalysisState {
    /// Fresh state for a surface form, tokenized once up front
    pub fn new(surface: impl Into<String>) -> Self {
        let surface = surface.into();
        let stream = tokenize(&surface);
        Self {
            surface,
            history: Vec::new(),
            facts: BTreeMap::new(),
            definitions: BTreeMap::new(),
            diagnostics: BTreeMap::new(),
            meta: StateMeta {
                script: stream.script,
                tokens: stream.tokens,
                created_ms: now_ms(),
            },
        }
    }

    /// Token stream of the current surface
    pub fn stream(&self) -> PhonemeStream {
        PhonemeStream {
            tokens: self.meta.tokens.clone(),
            script: self.meta.script,
        }
    }

    pub fn fact(&self, key: &str) -> Option<&FactValue> {
        self.facts.get(key)
    }

    pub fn definition(&self, name: &str) -> Option<&[String]> {
        self.definitions.get(name).map(Vec::as_slice)
    }

    pub fn diagnostic(&self, rule_id: &str) -> Option<&Diagnostic> {
        self.diagnostics.get(rule_id)
    }

    /// Rule ids in application order
    pub fn applied_rules(&self) -> Vec<&str> {
        self.history.iter().map(|entry| entry.rule_id.as_str()).collect()
    }
}

/// Create the initial state for a surface form
pub fn create_state(surface: impl Into<String>) -> AnalysisState {
    AnalysisState::new(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_state_tokenizes() {
        let state = create_state("gam");
        assert_eq!(state.surface, "gam");
        assert_eq!(state.meta.script, ScriptTag::Latin);
        assert_eq!(state.meta.tokens, vec!["g", "a", "m"]);
        assert!(state.history.is_empty());
        assert!(state.facts.is_empty());
        assert_eq!(state.stream().join(), "gam");
    }

    #[test]
    fn test_empty_surface() {
        let state = create_state("");
        assert_eq!(state.meta.script, ScriptTag::Unknown);
        assert!(state.meta.tokens.is_empty());
    }

    #[test]
    fn test_fact_value_conversions() {
        assert_eq!(FactValue::from(true).as_bool(), Some(true));
        assert_eq!(FactValue::from(3usize).as_number(), Some(3.0));
        assert_eq!(FactValue::from("nasal").as_text(), Some("nasal"));
        assert_eq!(FactValue::from("x").as_bool(), None);
        assert_eq!(FactValue::from(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_diagnostic_is_tagged() {
        let json = serde_json::to_string(&Diagnostic::Note {
            message: "ok".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"note","message":"ok"}"#);
    }
}
