//! Command-line argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::collection::ImportMode;
use crate::pipeline::{ImportConfig, ImportError, DEFAULT_MODEL_NAME};

/// cardport - Import cards from JSON into a flashcard collection
#[derive(Parser, Debug)]
#[command(name = "cardport")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import cards from a JSON file, one note per entry
    Import(ImportArgs),

    /// Create an empty collection with a single note model
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file to import (array of objects with a "deck" key).
    /// If not provided, will be asked for interactively.
    pub input: Option<PathBuf>,

    /// Collection directory.
    /// Defaults to 'cardport' under the user data directory.
    #[arg(short, long)]
    pub collection: Option<PathBuf>,

    /// Note model used for every imported entry (overrides the config file)
    #[arg(short, long)]
    pub model: Option<String>,

    /// JSON config file with modelName, audioExtensions, imageExtensions,
    /// importMode and strict keys
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How to treat notes whose first field matches an existing note
    #[arg(long, value_enum)]
    pub mode: Option<ImportMode>,

    /// Abort on the first invalid entry instead of skipping it
    #[arg(long, default_value = "false")]
    pub strict: bool,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Run the import without saving the collection
    #[arg(long, default_value = "false")]
    pub dry_run: bool,
}

impl ImportArgs {
    /// Get the collection path, falling back to the default location.
    pub fn collection_path(&self) -> PathBuf {
        self.collection
            .clone()
            .unwrap_or_else(default_collection_path)
    }

    /// Load the config file (or defaults) and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<ImportConfig, ImportError> {
        let mut config = match &self.config {
            Some(path) => ImportConfig::load(path)?,
            None => ImportConfig::default(),
        };
        if let Some(model) = &self.model {
            config.model_name = model.clone();
        }
        if let Some(mode) = self.mode {
            config.import_mode = mode;
        }
        if self.strict {
            config.strict = true;
        }
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Collection directory to create.
    /// Defaults to 'cardport' under the user data directory.
    #[arg(short, long)]
    pub collection: Option<PathBuf>,

    /// Name of the note model to create
    #[arg(short, long, default_value = DEFAULT_MODEL_NAME)]
    pub model: String,

    /// Field names of the model (comma-separated, first field is the sort key)
    #[arg(long, value_delimiter = ',', default_value = "Front,Back")]
    pub fields: Vec<String>,
}

impl InitArgs {
    pub fn collection_path(&self) -> PathBuf {
        self.collection
            .clone()
            .unwrap_or_else(default_collection_path)
    }
}

/// `cardport` under the platform data directory, or the current directory
pub fn default_collection_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardport")
}
