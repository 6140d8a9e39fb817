//! Blocking classifier: lookup stage composed with scoring stage
//!
//! [`evaluate`] is the pure decision function. [`Classifier`] owns one
//! configuration context and a diagnostics log; configure it once, then
//! classify many times. Separate `Classifier` values never share state.

use super::config::{ClassifierConfig, Mode, PartialConfig};
use super::decision::Decision;
use super::diagnostics::{DiagnosticsLog, DiagnosticsSnapshot, MetricsSnapshot, ReadOptions};
use super::features::{AffixFeatures, RootFeatures};
use super::{lookup, scoring};
use serde::{Deserialize, Serialize};

/// Decide whether the blocking condition holds for `root` + `affix`
///
/// Deterministic: identical arguments give bit-identical decisions.
pub fn evaluate(root: &str, affix: &str, mode: Mode, config: &ClassifierConfig) -> Decision {
    let root = RootFeatures::from_form(root);
    let affix = AffixFeatures::from_label(affix);

    if root.is_empty() || affix.is_empty() {
        return scoring::invalid_input(config);
    }

    if mode == Mode::Lookup {
        if let Some(decision) = lookup::lookup(&root.spelling, &affix.label, config) {
            return decision;
        }
    }

    scoring::score(&root, &affix, config)
}

/// One root/affix query, optionally overriding the configured mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockingQuery {
    pub root: String,
    pub affix: String,
    #[serde(default)]
    pub mode: Option<Mode>,
}

impl BlockingQuery {
    pub fn new(root: impl Into<String>, affix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            affix: affix.into(),
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Configuration context plus diagnostics log
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
    log: DiagnosticsLog,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        let log = DiagnosticsLog::new(config.history_capacity);
        Self { config, log }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Merge a partial configuration into the current one
    pub fn set_config(&mut self, partial: &PartialConfig) {
        self.config.merge(partial);
        self.log.set_capacity(self.config.history_capacity);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
    }

    /// Restore the default configuration; the log is kept
    pub fn reset_config(&mut self) {
        self.config = ClassifierConfig::default();
        self.log.set_capacity(self.config.history_capacity);
    }

    /// Classify with the configured mode
    pub fn classify(&mut self, root: &str, affix: &str) -> Decision {
        self.classify_with(root, affix, None, None)
    }

    /// Classify with an optional mode and a one-off configuration override
    ///
    /// The override applies to this call only.
    pub fn classify_with(
        &mut self,
        root: &str,
        affix: &str,
        mode: Option<Mode>,
        overrides: Option<&PartialConfig>,
    ) -> Decision {
        let scoped;
        let config = match overrides {
            Some(partial) => {
                scoped = self.config.merged(partial);
                &scoped
            }
            None => &self.config,
        };
        let mode = mode.unwrap_or(config.mode);
        let decision = evaluate(root, affix, mode, config);
        self.record(root, affix, mode, &decision);
        decision
    }

    /// Log a decision made outside this classifier, e.g. by a blocking rule
    pub fn record(&mut self, root: &str, affix: &str, mode: Mode, decision: &Decision) {
        tracing::debug!(
            root,
            affix,
            mode = %mode,
            outcome = decision.outcome,
            confidence = decision.confidence,
            path = decision.path.as_str(),
            "blocking decision"
        );
        self.log.record(root, affix, mode, decision);
    }

    /// Classify a batch in order
    ///
    /// With the `parallel` feature the pure evaluation runs on rayon; the
    /// log still records decisions in input order.
    pub fn classify_batch(&mut self, queries: &[BlockingQuery]) -> Vec<Decision> {
        let config = &self.config;
        let run = |query: &BlockingQuery| {
            let mode = query.mode.unwrap_or(config.mode);
            (mode, evaluate(&query.root, &query.affix, mode, config))
        };

        #[cfg(feature = "parallel")]
        let results: Vec<(Mode, Decision)> = {
            use rayon::prelude::*;
            queries.par_iter().map(run).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let results: Vec<(Mode, Decision)> = queries.iter().map(run).collect();

        queries
            .iter()
            .zip(results)
            .map(|(query, (mode, decision))| {
                self.log.record(&query.root, &query.affix, mode, &decision);
                decision
            })
            .collect()
    }

    pub fn diagnostics(&mut self, options: ReadOptions) -> DiagnosticsSnapshot {
        self.log.diagnostics(options)
    }

    pub fn metrics(&mut self, options: ReadOptions) -> MetricsSnapshot {
        self.log.metrics(options)
    }
}
