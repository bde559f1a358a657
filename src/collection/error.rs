//! Errors raised by the collection services

use std::path::PathBuf;

use thiserror::Error;

use super::models::{DeckId, ModelId};

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No collection found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("A collection already exists at {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Model not found: {0}")]
    ModelNotFound(ModelId),

    #[error("Deck not found: {0}")]
    DeckNotFound(DeckId),

    #[error("A model named '{0}' already exists")]
    DuplicateModel(String),

    #[error("Model '{0}' must have at least one field")]
    NoFields(String),

    #[error("Invalid media filename: {}", .0.display())]
    InvalidMediaName(PathBuf),
}

pub type Result<T> = std::result::Result<T, CollectionError>;
