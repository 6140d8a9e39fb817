//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use shabda_api::Config;
use shabda_core::{Mode, Operation};
use std::path::PathBuf;

pub mod analyze;
pub mod classify;
pub mod config;
pub mod script;
pub mod tokenize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the script of surface forms
    Script(script::ScriptArgs),

    /// Split surface forms into phoneme tokens
    Tokenize(tokenize::TokenizeArgs),

    /// Decide whether root truncation before an affix is blocked
    Classify(classify::ClassifyArgs),

    /// Run a rule pipeline over a surface form
    Analyze(analyze::AnalyzeArgs),

    /// Inspect or generate classifier configuration
    Config {
        #[command(subcommand)]
        subcommand: config::ConfigCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Script(args) => args.execute(),
            Commands::Tokenize(args) => args.execute(),
            Commands::Classify(args) => args.execute(),
            Commands::Analyze(args) => args.execute(),
            Commands::Config { subcommand } => subcommand.execute(),
        }
    }
}

/// Classifier mode as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Curated tables first, scoring as fallback
    Lookup,
    /// Scoring only
    #[value(alias = "rules-only")]
    Rules,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Lookup => Mode::Lookup,
            ModeArg::Rules => Mode::RulesOnly,
        }
    }
}

/// Vowel-grade operation as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OperationArg {
    /// a, e, o grade
    Guna,
    /// ā, ai, au grade
    Vrddhi,
    /// Leave the root vowel unchanged
    #[default]
    None,
}

impl From<OperationArg> for Operation {
    fn from(operation: OperationArg) -> Self {
        match operation {
            OperationArg::Guna => Operation::Guna,
            OperationArg::Vrddhi => Operation::Vrddhi,
            OperationArg::None => Operation::None,
        }
    }
}

/// Classifier settings shared by commands that classify
#[derive(Debug, Clone, Default, Args)]
pub struct ClassifierArgs {
    /// Classifier configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "SHABDA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Classifier mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Blocking threshold on the raw weighted sum
    #[arg(short, long, value_name = "SUM")]
    pub threshold: Option<f64>,

    /// Signal weight override, e.g. root_final_nasal=1.5 (repeatable)
    #[arg(short, long = "weight", value_name = "SIGNAL=WEIGHT")]
    pub weights: Vec<String>,
}

impl ClassifierArgs {
    /// Build the API configuration: file, then command-line overrides
    pub fn build_config(&self) -> Result<Config> {
        let mut builder = Config::builder();
        if let Some(path) = &self.config {
            log::info!("Loading classifier configuration from {}", path.display());
            builder = builder.file(path)?;
        }
        if let Some(mode) = self.mode {
            builder = builder.mode(mode.into());
        }
        if let Some(threshold) = self.threshold {
            builder = builder.threshold(threshold);
        }
        for pair in &self.weights {
            let (signal, weight) = parse_weight(pair)?;
            builder = builder.weight(signal, weight)?;
        }
        Ok(builder.build()?)
    }
}

fn parse_weight(pair: &str) -> Result<(&str, f64)> {
    let (signal, weight) = pair
        .split_once('=')
        .ok_or_else(|| crate::CliError::ConfigError(format!("expected SIGNAL=WEIGHT, got {pair}")))?;
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|e| crate::CliError::ConfigError(format!("weight for {signal}: {e}")))?;
    Ok((signal.trim(), weight))
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // A second init (as in tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("root_final_nasal=1.5").unwrap(), ("root_final_nasal", 1.5));
        assert_eq!(parse_weight(" affix_kit_class = 0 ").unwrap(), ("affix_kit_class", 0.0));
        assert!(parse_weight("root_final_nasal").is_err());
        assert!(parse_weight("root_final_nasal=high").is_err());
    }

    #[test]
    fn test_classifier_args_build_config() {
        let args = ClassifierArgs {
            mode: Some(ModeArg::Rules),
            threshold: Some(1.0),
            weights: vec!["root_short_vowel=0.75".to_string()],
            ..Default::default()
        };
        let config = args.build_config().unwrap();
        assert_eq!(config.classifier().mode, Mode::RulesOnly);
        assert_eq!(config.classifier().threshold, 1.0);
        assert_eq!(config.classifier().evidence_weights["root_short_vowel"], 0.75);

        let bad = ClassifierArgs {
            weights: vec!["unknown_signal=1".to_string()],
            ..Default::default()
        };
        assert!(bad.build_config().is_err());
    }

    #[test]
    fn test_arg_conversions() {
        assert_eq!(Mode::from(ModeArg::Lookup), Mode::Lookup);
        assert_eq!(Operation::from(OperationArg::Vrddhi), Operation::Vrddhi);
        assert_eq!(Operation::from(OperationArg::default()), Operation::None);
    }
}
