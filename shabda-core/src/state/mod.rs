//! Immutable analysis state and the rule pipeline that threads it
//!
//! [`apply_rule`] is the only way a state changes: it runs a rule against
//! a state and derives a new one, leaving the input intact. Pipelines are
//! left folds of [`apply_rule`]; [`presets`] names the fixed ones.

pub mod analysis;
pub mod pipeline;
pub mod presets;

pub use analysis::{create_state, AnalysisState, Diagnostic, FactValue, HistoryEntry, StateMeta};
pub use pipeline::{apply_all, apply_rule, rule_fn, FnRule, Pipeline, Rule, RuleOutput};
pub use presets::{complete, morphological, phonological, MorphologyRequest};
