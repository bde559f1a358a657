//! Shared test utilities and fixture generators
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use cardport::collection::{Collection, MediaStore, Result as CollectionResult};
use tempfile::TempDir;

pub const MODEL_NAME: &str = "Basic-Import";

pub fn basic_fields() -> Vec<String> {
    vec!["Front".to_string(), "Back".to_string()]
}

/// Create a temporary collection with the Basic-Import model (Front, Back)
pub fn create_temp_collection() -> (TempDir, Collection) {
    let temp_dir = TempDir::new().unwrap();
    let collection =
        Collection::create(&temp_dir.path().join("collection"), MODEL_NAME, &basic_fields())
            .unwrap();
    (temp_dir, collection)
}

/// Write `json` to `cards.json` inside `dir` and return its path
pub fn write_json(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("cards.json");
    std::fs::write(&path, json).unwrap();
    path
}

/// Write a media fixture next to the JSON file
pub fn write_media(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, data).unwrap();
    path
}

/// Media store that records every registered path and stores nothing
#[derive(Debug, Default)]
pub struct RecordingMedia {
    pub added: Vec<PathBuf>,
}

impl MediaStore for RecordingMedia {
    fn add_file(&mut self, path: &Path) -> CollectionResult<String> {
        self.added.push(path.to_path_buf());
        Ok(path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string())
    }
}

/// Field values of every note in the collection's deck called `deck`
pub fn deck_rows(collection: &Collection, deck: &str) -> Vec<Vec<String>> {
    let deck_id = collection
        .decks()
        .by_name(deck)
        .unwrap_or_else(|| panic!("Deck '{}' should exist", deck))
        .id;
    collection
        .notes()
        .in_deck(deck_id)
        .map(|n| n.fields.clone())
        .collect()
}
