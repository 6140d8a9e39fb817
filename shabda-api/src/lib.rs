//! Public API for shabda analysis
//!
//! This crate provides a stable interface over the core engine. One
//! [`Analyzer`] owns one classifier configuration and its diagnostics log;
//! everything else (script classification, tokenization, the rule
//! pipeline) is stateless.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use shabda_core::evidence::{
    BlockingQuery, Classifier, DiagnosticsSnapshot, MetricsSnapshot, PartialConfig, ReadOptions,
};
use shabda_core::rules::BlockingRule;
use shabda_core::state::{self, Diagnostic, MorphologyRequest};
use shabda_core::{AnalysisState, ClassifierConfig, Decision, Mode, Operation, Rule, ScriptTag};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Request, Response, TokenizeOutput};
pub use error::ApiError;

/// Main entry point for analysis
///
/// Separate analyzers never share configuration or diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    classifier: Classifier,
}

impl Analyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            classifier: Classifier::new(config.classifier),
        }
    }

    /// Current classifier configuration
    pub fn config(&self) -> &ClassifierConfig {
        self.classifier.config()
    }

    /// Script of a surface form
    pub fn classify_script(&self, text: &str) -> ScriptTag {
        shabda_core::classify_script(text)
    }

    /// Phoneme tokens of a surface form
    pub fn tokenize(&self, text: &str) -> TokenizeOutput {
        shabda_core::tokenize(text).into()
    }

    /// Read an input and tokenize it
    pub fn tokenize_input(&self, input: Input) -> Result<TokenizeOutput> {
        let text = input.read_text()?;
        Ok(self.tokenize(&text))
    }

    /// Decide whether truncation of `root` before `affix` is blocked
    ///
    /// `mode` and `overrides` apply to this call only.
    pub fn classify_blocking(
        &mut self,
        root: &str,
        affix: &str,
        mode: Option<Mode>,
        overrides: Option<&PartialConfig>,
    ) -> Decision {
        self.classifier.classify_with(root, affix, mode, overrides)
    }

    /// Answer a single or batch request
    pub fn handle(&mut self, request: &Request) -> Response {
        match request {
            Request::Single(query) => Response::Single(self.classifier.classify_with(
                &query.root,
                &query.affix,
                query.mode,
                None,
            )),
            Request::Batch { queries } => Response::Batch {
                decisions: self.classifier.classify_batch(queries),
            },
        }
    }

    /// Answer a JSON-encoded request with a JSON-encoded response
    #[cfg(feature = "serde")]
    pub fn handle_json(&mut self, request: &str) -> Result<String> {
        let request: Request = serde_json::from_str(request)?;
        tracing::debug!(queries = request.len(), "handling json request");
        Ok(serde_json::to_string(&self.handle(&request))?)
    }

    /// Merge a partial configuration into the current one
    pub fn set_config(&mut self, partial: &PartialConfig) {
        self.classifier.set_config(partial);
    }

    /// Change the default classifier mode
    pub fn set_mode(&mut self, mode: Mode) {
        self.classifier.set_mode(mode);
    }

    /// Restore the default configuration
    pub fn reset_config(&mut self) {
        self.classifier.reset_config();
    }

    /// Recent decisions
    pub fn diagnostics(&mut self, options: ReadOptions) -> DiagnosticsSnapshot {
        self.classifier.diagnostics(options)
    }

    /// Aggregate counters
    pub fn metrics(&mut self, options: ReadOptions) -> MetricsSnapshot {
        self.classifier.metrics(options)
    }

    /// Initial analysis state for a surface form
    pub fn create_state(&self, surface: &str) -> AnalysisState {
        shabda_core::create_state(surface)
    }

    /// Apply one rule to a state
    pub fn apply_rule(&self, state: &AnalysisState, rule: &dyn Rule) -> Result<AnalysisState> {
        Ok(shabda_core::apply_rule(state, rule)?)
    }

    /// Script, inventory and vowel-grade rules
    pub fn run_phonological_preset(&self, state: &AnalysisState) -> Result<AnalysisState> {
        Ok(state::phonological(state)?)
    }

    /// Affix class, blocking and operation rules
    ///
    /// The blocking decision is logged like a direct classification.
    pub fn run_morphological_preset(
        &mut self,
        state: &AnalysisState,
        root: &str,
        affix: &str,
        operation: Operation,
    ) -> Result<AnalysisState> {
        let request = MorphologyRequest::new(root, affix, operation);
        let next = state::morphological(state, &request, self.config())?;
        self.record_blocking(state, &next, &request);
        Ok(next)
    }

    /// Phonological then morphological rules
    ///
    /// `mode` overrides the configured classifier mode for the blocking rule.
    pub fn run_complete_preset(
        &mut self,
        state: &AnalysisState,
        root: &str,
        affix: &str,
        operation: Operation,
        mode: Option<Mode>,
    ) -> Result<AnalysisState> {
        let mut request = MorphologyRequest::new(root, affix, operation);
        request.mode = mode;
        let next = state::complete(state, &request, self.config())?;
        self.record_blocking(state, &next, &request);
        Ok(next)
    }

    fn record_blocking(
        &mut self,
        before: &AnalysisState,
        after: &AnalysisState,
        request: &MorphologyRequest,
    ) {
        let ran = after.history[before.history.len()..]
            .iter()
            .any(|entry| entry.rule_id == BlockingRule::ID);
        if let (true, Some(Diagnostic::Blocking(decision))) =
            (ran, after.diagnostic(BlockingRule::ID))
        {
            let mode = request.mode.unwrap_or(self.config().mode);
            self.classifier
                .record(&request.root, &request.affix, mode, decision);
        }
    }
}

// Convenience functions

/// Script of a surface form
pub fn classify_script(text: &str) -> ScriptTag {
    shabda_core::classify_script(text)
}

/// Phoneme tokens of a surface form
pub fn tokenize(text: &str) -> TokenizeOutput {
    shabda_core::tokenize(text).into()
}

/// Classify one pair with the default configuration
pub fn classify_blocking(root: &str, affix: &str, mode: Mode) -> Decision {
    Analyzer::new().classify_blocking(root, affix, Some(mode), None)
}

/// Parse an operation name ("guna", "vrddhi", "none")
pub fn parse_operation(name: &str) -> Result<Operation> {
    Ok(name.parse::<Operation>()?)
}

/// Build a query, parsing an optional mode name
pub fn query(root: &str, affix: &str, mode: Option<&str>) -> Result<BlockingQuery> {
    let query = BlockingQuery::new(root, affix);
    Ok(match mode {
        Some(name) => query.with_mode(name.parse()?),
        None => query,
    })
}
