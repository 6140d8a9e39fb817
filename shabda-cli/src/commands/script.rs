//! Script command implementation

use crate::input::read_forms;
use crate::output::{stdout_formatter, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the script command
#[derive(Debug, Args)]
pub struct ScriptArgs {
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

impl ScriptArgs {
    /// Execute the script command
    pub fn execute(&self) -> Result<()> {
        let forms = read_forms(&self.forms, self.input.as_deref())?;
        let mut formatter = stdout_formatter(self.format);
        for form in &forms {
            formatter.format_script(form, shabda_api::classify_script(form))?;
        }
        formatter.finish()
    }
}
