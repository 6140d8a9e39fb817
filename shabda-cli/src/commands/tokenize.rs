//! Tokenize command implementation

use crate::input::read_forms;
use crate::output::{stdout_formatter, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Surface forms
    #[arg(value_name = "FORM")]
    pub forms: Vec<String>,

    /// Read forms from a file, one per line (`-` for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        let forms = read_forms(&self.forms, self.input.as_deref())?;
        log::info!("Tokenizing {} form(s)", forms.len());

        let mut formatter = stdout_formatter(self.format);
        for form in &forms {
            formatter.format_tokens(form, &shabda_api::tokenize(form))?;
        }
        formatter.finish()
    }
}
