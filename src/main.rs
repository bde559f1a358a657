//! cardport: JSON Card Import CLI
//!
//! Imports cards described in a JSON file into a flashcard collection,
//! one note batch per destination deck.

use anyhow::Result;
use clap::Parser;

use cardport::cli::{run_import, run_init, Cli, Commands};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Import(args) => run_import(args),
        Commands::Init(args) => run_init(args),
    }
}
