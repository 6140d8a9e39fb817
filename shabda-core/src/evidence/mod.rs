//! Evidence-weighted blocking classifier
//!
//! Decides whether root truncation (lopa) before an affix is blocked or
//! licensed. A curated lookup stage and a generalized scoring stage are
//! kept apart and composed by [`Mode`]: lookup mode consults the tables
//! first and falls back to scoring, rules mode scores only. Scoring sums
//! configured weights over independent [`EvidenceSignal`]s, compares the
//! raw sum with the threshold, and reports a bounded confidence.

pub mod classifier;
pub mod config;
pub mod decision;
pub mod diagnostics;
pub mod features;
pub mod lookup;
pub mod scoring;
pub mod signals;

pub use classifier::{evaluate, BlockingQuery, Classifier};
pub use config::{ClassifierConfig, Mode, PartialConfig, PartialSquashing, Squashing};
pub use decision::{Decision, DecisionPath, SignalContribution};
pub use diagnostics::{
    DiagnosticsLog, DiagnosticsSnapshot, LoggedDecision, MetricsSnapshot, PathCounts, ReadOptions,
};
pub use features::{AffixClass, AffixFeatures, RootFeatures};
pub use signals::EvidenceSignal;
