//! Config command implementation

use anyhow::{Context, Result};
use clap::Subcommand;
use shabda_core::evidence::config::DEFAULT_CONFIG_TOML;
use shabda_core::ClassifierConfig;
use std::path::PathBuf;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show {
        /// Configuration file to load (defaults when absent)
        #[arg(short, long, value_name = "FILE", env = "SHABDA_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Write the default configuration to a file
    Generate {
        /// Output file path
        #[arg(short, long, value_name = "FILE", required = true)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Check that a configuration file parses
    Validate {
        /// Configuration file to check
        #[arg(value_name = "FILE")]
        config: PathBuf,
    },
}

impl ConfigCommands {
    /// Execute the config subcommand
    pub fn execute(&self) -> Result<()> {
        match self {
            ConfigCommands::Show { config } => {
                let config = match config {
                    Some(path) => ClassifierConfig::from_file(path)?,
                    None => ClassifierConfig::default(),
                };
                print!("{}", config.to_toml_string()?);
                Ok(())
            }
            ConfigCommands::Generate { output, force } => {
                if output.exists() && !force {
                    anyhow::bail!(
                        "{} already exists (use --force to overwrite)",
                        output.display()
                    );
                }
                std::fs::write(output, DEFAULT_CONFIG_TOML)
                    .with_context(|| format!("Failed to write to {}", output.display()))?;
                println!("Configuration written to {}", output.display());
                Ok(())
            }
            ConfigCommands::Validate { config } => {
                let loaded = ClassifierConfig::from_file(config)
                    .with_context(|| format!("Validation failed for {}", config.display()))?;
                for name in loaded.evidence_weights.keys() {
                    if shabda_core::evidence::EvidenceSignal::from_name(name).is_none() {
                        log::warn!("Unknown evidence signal {name} is ignored");
                    }
                }
                println!("✓ Configuration is valid!");
                println!("  Mode: {}", loaded.mode);
                println!("  Threshold: {}", loaded.threshold);
                println!("  Largest weighted sum: {}", loaded.max_weighted_sum());
                Ok(())
            }
        }
    }
}
