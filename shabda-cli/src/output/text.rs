//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use shabda_api::TokenizeOutput;
use shabda_core::evidence::{BlockingQuery, DiagnosticsSnapshot, MetricsSnapshot};
use shabda_core::{AnalysisState, Decision, ScriptTag};
use std::io::{self, Write};

/// Plain text formatter - one line per item, indented details
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_script(&mut self, form: &str, script: ScriptTag) -> Result<()> {
        writeln!(self.writer, "{form}\t{script}")?;
        Ok(())
    }

    fn format_tokens(&mut self, form: &str, output: &TokenizeOutput) -> Result<()> {
        writeln!(
            self.writer,
            "{form}\t{}\t{}",
            output.script,
            output.tokens.join(" ")
        )?;
        Ok(())
    }

    fn format_decision(&mut self, query: &BlockingQuery, decision: &Decision) -> Result<()> {
        writeln!(
            self.writer,
            "{} + {}\t{}\t{:.3}\t{}",
            query.root,
            query.affix,
            if decision.outcome { "blocked" } else { "licensed" },
            decision.confidence,
            decision.path.as_str()
        )?;
        writeln!(self.writer, "  {}", decision.rationale)?;
        Ok(())
    }

    fn format_state(&mut self, state: &AnalysisState) -> Result<()> {
        writeln!(self.writer, "surface: {}", state.surface)?;
        writeln!(self.writer, "script: {}", state.meta.script)?;
        writeln!(self.writer, "history:")?;
        for entry in &state.history {
            writeln!(
                self.writer,
                "  {:>2}. {} ({} -> {})",
                entry.sequence, entry.rule_id, entry.input, entry.output
            )?;
        }
        writeln!(self.writer, "facts:")?;
        for (key, value) in &state.facts {
            writeln!(self.writer, "  {key} = {value}")?;
        }
        if !state.definitions.is_empty() {
            writeln!(self.writer, "definitions:")?;
            for (name, members) in &state.definitions {
                writeln!(self.writer, "  {name} = [{}]", members.join(", "))?;
            }
        }
        Ok(())
    }

    fn format_metrics(
        &mut self,
        metrics: &MetricsSnapshot,
        diagnostics: &DiagnosticsSnapshot,
    ) -> Result<()> {
        writeln!(
            self.writer,
            "calls: {} (blocked {}, licensed {}), mean confidence {:.3}",
            metrics.calls, metrics.outcomes_true, metrics.outcomes_false, metrics.mean_confidence
        )?;
        let paths = &metrics.by_path;
        writeln!(
            self.writer,
            "paths: inclusion {}, exclusion {}, scored {}, invalid {}",
            paths.inclusion, paths.exclusion, paths.scored, paths.invalid_input
        )?;
        for logged in &diagnostics.decisions {
            writeln!(
                self.writer,
                "  #{} {} + {} [{}] -> {}",
                logged.call, logged.root, logged.affix, logged.mode, logged.decision.outcome
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
