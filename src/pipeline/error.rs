//! Error types for the import pipeline

use std::path::PathBuf;

use thiserror::Error;

use crate::collection::CollectionError;

/// Fatal errors that abort an import run
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a JSON array of card objects, found {0}")]
    NotAnArray(&'static str),

    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error(transparent)]
    Entry(#[from] EntryIssue),

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Problems with a single entry of the input document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryIssue {
    #[error("Entry {index}: missing required key 'deck'")]
    MissingDeck { index: usize },

    #[error("Entry {index}: expected an object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    #[error("Entry {index}: field '{field}' must be a string, number, boolean or null")]
    InvalidValue { index: usize, field: String },
}

impl EntryIssue {
    /// Position of the offending entry in the input array
    pub fn index(&self) -> usize {
        match self {
            EntryIssue::MissingDeck { index }
            | EntryIssue::NotAnObject { index, .. }
            | EntryIssue::InvalidValue { index, .. } => *index,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
