//! Output formatting module

use anyhow::Result;
use shabda_api::TokenizeOutput;
use shabda_core::evidence::{BlockingQuery, DiagnosticsSnapshot, MetricsSnapshot};
use shabda_core::{AnalysisState, Decision, ScriptTag};
use std::io::{self, Write};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the script of one form
    fn format_script(&mut self, form: &str, script: ScriptTag) -> Result<()>;

    /// Format the tokens of one form
    fn format_tokens(&mut self, form: &str, output: &TokenizeOutput) -> Result<()>;

    /// Format one blocking decision
    fn format_decision(&mut self, query: &BlockingQuery, decision: &Decision) -> Result<()>;

    /// Format the final state of a pipeline run
    fn format_state(&mut self, state: &AnalysisState) -> Result<()>;

    /// Format classifier counters and recent decisions
    fn format_metrics(
        &mut self,
        metrics: &MetricsSnapshot,
        diagnostics: &DiagnosticsSnapshot,
    ) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Formatter for `format` writing to stdout
pub fn stdout_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    formatter(format, io::stdout())
}

/// Formatter for `format` writing to `writer`
pub fn formatter<W: Write + Send + Sync + 'static>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
