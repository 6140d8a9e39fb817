//! Analyze command implementation

use super::{ClassifierArgs, ModeArg, OperationArg};
use crate::output::{stdout_formatter, OutputFormat};
use anyhow::Result;
use clap::{Args, ValueEnum};
use shabda_api::Analyzer;

/// Named rule pipelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Script, inventory and vowel-grade rules
    Phonological,
    /// Affix class, blocking and operation rules
    Morphological,
    /// Phonological then morphological rules
    Complete,
}

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Surface form the state is created from
    #[arg(value_name = "SURFACE")]
    pub surface: String,

    /// Root for the morphological rules (defaults to the surface form)
    #[arg(short, long, value_name = "ROOT")]
    pub root: Option<String>,

    /// Affix label; required by the morphological and complete presets
    #[arg(short, long, value_name = "AFFIX")]
    pub affix: Option<String>,

    /// Vowel-grade operation
    #[arg(short, long, value_enum, default_value = "none")]
    pub operation: OperationArg,

    /// Pipeline to run (complete when an affix is given, else phonological)
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        let mut analyzer = Analyzer::with_config(self.classifier.build_config()?);
        let state = analyzer.create_state(&self.surface);
        let root = self.root.as_deref().unwrap_or(&self.surface);
        let operation = self.operation.into();

        let preset = self.preset.unwrap_or(if self.affix.is_some() {
            Preset::Complete
        } else {
            Preset::Phonological
        });
        log::info!("Running {preset:?} preset on {}", self.surface);

        let result = match (preset, self.affix.as_deref()) {
            (Preset::Phonological, _) => analyzer.run_phonological_preset(&state)?,
            (Preset::Morphological, Some(affix)) => {
                analyzer.run_morphological_preset(&state, root, affix, operation)?
            }
            (Preset::Complete, Some(affix)) => analyzer.run_complete_preset(
                &state,
                root,
                affix,
                operation,
                self.classifier.mode.map(ModeArg::into),
            )?,
            (_, None) => anyhow::bail!("--affix is required by the {preset:?} preset"),
        };

        let mut formatter = stdout_formatter(self.format);
        formatter.format_state(&result)?;
        formatter.finish()
    }
}
