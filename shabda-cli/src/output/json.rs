//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};
use shabda_api::TokenizeOutput;
use shabda_core::evidence::{BlockingQuery, DiagnosticsSnapshot, MetricsSnapshot};
use shabda_core::{AnalysisState, Decision, ScriptTag};
use std::io::Write;

/// JSON formatter - collects items and writes them on finish
///
/// A single item is written as an object, several as an array.
pub struct JsonFormatter<W: Write> {
    writer: W,
    items: Vec<Value>,
}

/// One classified pair
#[derive(Debug, Serialize)]
struct DecisionRecord<'a> {
    root: &'a str,
    affix: &'a str,
    #[serde(flatten)]
    decision: &'a Decision,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            items: Vec::new(),
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn push(&mut self, item: impl Serialize) -> Result<()> {
        self.items.push(serde_json::to_value(item)?);
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_script(&mut self, form: &str, script: ScriptTag) -> Result<()> {
        self.push(json!({ "form": form, "script": script }))
    }

    fn format_tokens(&mut self, form: &str, output: &TokenizeOutput) -> Result<()> {
        self.push(json!({ "form": form, "script": output.script, "tokens": output.tokens }))
    }

    fn format_decision(&mut self, query: &BlockingQuery, decision: &Decision) -> Result<()> {
        self.push(DecisionRecord {
            root: &query.root,
            affix: &query.affix,
            decision,
        })
    }

    fn format_state(&mut self, state: &AnalysisState) -> Result<()> {
        self.push(state)
    }

    fn format_metrics(
        &mut self,
        metrics: &MetricsSnapshot,
        diagnostics: &DiagnosticsSnapshot,
    ) -> Result<()> {
        self.push(json!({ "metrics": metrics, "diagnostics": diagnostics }))
    }

    fn finish(&mut self) -> Result<()> {
        let items = std::mem::take(&mut self.items);
        let document = match items.len() {
            1 => items.into_iter().next().unwrap_or(Value::Null),
            _ => Value::Array(items),
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shabda_core::evidence::{evaluate, ClassifierConfig};
    use shabda_core::Mode;

    fn finish(formatter: JsonFormatter<Vec<u8>>) -> Value {
        let mut formatter = formatter;
        formatter.finish().unwrap();
        serde_json::from_slice(&formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_single_item_is_an_object() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .format_tokens("tha", &shabda_api::tokenize("tha"))
            .unwrap();
        let value = finish(formatter);
        assert_eq!(value["tokens"], json!(["th", "a"]));
        assert_eq!(value["script"], "latin");
    }

    #[test]
    fn test_decisions_are_flattened() {
        let config = ClassifierConfig::default();
        let mut formatter = JsonFormatter::new(Vec::new());
        for (root, affix) in [("gam", "ya"), ("sad", "kta")] {
            let decision = evaluate(root, affix, Mode::RulesOnly, &config);
            formatter
                .format_decision(&BlockingQuery::new(root, affix), &decision)
                .unwrap();
        }
        let value = finish(formatter);
        assert_eq!(value[0]["root"], "gam");
        assert_eq!(value[0]["outcome"], true);
        assert_eq!(value[1]["outcome"], false);
        assert_eq!(value[1]["path"], "scored");
    }
}
