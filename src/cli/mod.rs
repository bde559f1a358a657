//! CLI module - argument parsing, prompts and subcommand runners

mod args;
pub mod import;
pub mod init;
mod prompts;

pub use args::{default_collection_path, Cli, Commands, ImportArgs, InitArgs};
pub use import::run_import;
pub use init::run_init;
pub use prompts::*;
