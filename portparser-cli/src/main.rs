//! Portparser command-line entry point

use clap::Parser;
use portparser_cli::commands::Commands;

/// Portuguese sentence segmentation, CoNLL-U tokenization and post-correction
#[derive(Debug, Parser)]
#[command(name = "portparser", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
