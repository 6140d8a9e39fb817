//! Classify command implementation

use super::ClassifierArgs;
use crate::error::{CliError, CliResult};
use crate::input::read_lines_source;
use crate::output::{stdout_formatter, OutputFormat};
use anyhow::Result;
use clap::Args;
use shabda_api::{Analyzer, Request};
use shabda_core::evidence::{BlockingQuery, ReadOptions};
use shabda_core::Mode;
use std::path::PathBuf;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Root, in Latin transliteration or Devanagari
    #[arg(value_name = "ROOT", required_unless_present = "batch")]
    pub root: Option<String>,

    /// Affix label, e.g. kta, ya, ktvā
    #[arg(value_name = "AFFIX", required_unless_present = "batch")]
    pub affix: Option<String>,

    /// Classify pairs from a file with lines `ROOT AFFIX [MODE]` (`-` for stdin)
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["root", "affix"])]
    pub batch: Option<PathBuf>,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    /// Also print counters and recent decisions
    #[arg(long)]
    pub metrics: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        let mut analyzer = Analyzer::with_config(self.classifier.build_config()?);
        let request = self.request()?;
        log::info!("Classifying {} pair(s)", request.len());

        let queries = match &request {
            Request::Single(query) => std::slice::from_ref(query),
            Request::Batch { queries } => queries.as_slice(),
        };
        let response = analyzer.handle(&request);

        let mut formatter = stdout_formatter(self.format);
        for (query, decision) in queries.iter().zip(response.decisions()) {
            formatter.format_decision(query, decision)?;
        }
        if self.metrics {
            let metrics = analyzer.metrics(ReadOptions::default());
            let diagnostics = analyzer.diagnostics(ReadOptions::default());
            formatter.format_metrics(&metrics, &diagnostics)?;
        }
        formatter.finish()
    }

    fn request(&self) -> Result<Request> {
        if let Some(path) = &self.batch {
            let text = read_lines_source(path)?;
            return Ok(Request::Batch {
                queries: parse_batch(&text)?,
            });
        }
        match (&self.root, &self.affix) {
            (Some(root), Some(affix)) => Ok(Request::Single(BlockingQuery::new(
                root.as_str(),
                affix.as_str(),
            ))),
            _ => Err(CliError::NoInput.into()),
        }
    }
}

/// Parse `ROOT AFFIX [MODE]` lines; blank lines and `#` comments are skipped
pub fn parse_batch(text: &str) -> CliResult<Vec<BlockingQuery>> {
    let mut queries = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let invalid = |reason: &str| CliError::InvalidBatchLine {
            line: index + 1,
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let query = match fields.as_slice() {
            [root, affix] => BlockingQuery::new(*root, *affix),
            [root, affix, mode] => {
                let mode: Mode = mode.parse().map_err(|_| invalid("unknown mode"))?;
                BlockingQuery::new(*root, *affix).with_mode(mode)
            }
            [_] => return Err(invalid("missing affix").into()),
            _ => return Err(invalid("too many fields").into()),
        };
        queries.push(query);
    }
    Ok(queries)
}
