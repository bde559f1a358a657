//! Collection data types shared by the registries and the importer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ModelId = u64;
pub type DeckId = u64;
pub type NoteId = u64;

/// Name of the deck every collection starts with
pub const DEFAULT_DECK: &str = "Default";

/// A note type: an ordered list of field names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: ModelId,
    pub name: String,
    pub fields: Vec<String>,
    /// Deck the model was last used with
    #[serde(default)]
    pub deck_id: Option<DeckId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    /// Default model for notes added to this deck
    #[serde(default)]
    pub model_id: Option<ModelId>,
}

/// A note that has not been inserted into the collection yet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForeignNote {
    pub fields: Vec<String>,
}

impl ForeignNote {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// First field, used for duplicate detection
    pub fn first_field(&self) -> &str {
        self.fields.first().map(|f| f.trim()).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredNote {
    pub id: NoteId,
    pub model_id: ModelId,
    pub deck_id: DeckId,
    pub fields: Vec<String>,
    pub modified: DateTime<Utc>,
}

impl StoredNote {
    pub fn first_field(&self) -> &str {
        self.fields.first().map(|f| f.trim()).unwrap_or("")
    }
}

/// How notes whose first field matches an existing note are treated
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Overwrite the fields of the existing note
    #[default]
    Update,
    /// Keep the existing note and drop the incoming one
    Ignore,
    /// Always add the incoming note
    Duplicate,
}

/// Outcome of one bulk insert
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InsertReport {
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Human-readable lines, ending with the count summary
    pub log: Vec<String>,
}
