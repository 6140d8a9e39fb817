//! Command-line interface for shabda

use anyhow::Result;
use clap::Parser;
use shabda_cli::commands::{init_logging, Commands};

/// Sanskrit script detection, phoneme tokenization and morphological analysis
#[derive(Debug, Parser)]
#[command(name = "shabda", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    log::debug!("Arguments: {:?}", cli);
    cli.command.execute()
}
