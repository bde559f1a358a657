//! Directory-backed collection
//!
//! Directory structure:
//! ```text
//! <collection>/
//! ├── collection.json      # Models, decks and notes
//! └── collection.media/    # Stored media files
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::error::{CollectionError, Result};
use super::media::MediaFolder;
use super::models::{ModelId, DEFAULT_DECK};
use super::notes::NoteStore;
use super::registry::{DeckStore, ModelStore};
use super::{DeckRegistry, Services};

pub const COLLECTION_FILE: &str = "collection.json";
pub const MEDIA_DIR: &str = "collection.media";

#[derive(Serialize)]
struct CollectionFileRef<'a> {
    models: &'a ModelStore,
    decks: &'a DeckStore,
    notes: &'a NoteStore,
}

#[derive(Deserialize)]
struct CollectionFile {
    models: ModelStore,
    decks: DeckStore,
    notes: NoteStore,
}

/// An open collection. Changes, media included, are kept in memory until
/// [`Collection::save`]. Dropping it without saving discards them.
#[derive(Debug)]
pub struct Collection {
    root: PathBuf,
    models: ModelStore,
    decks: DeckStore,
    notes: NoteStore,
    media: MediaFolder,
}

impl Collection {
    /// Initialise a new collection with one model and the default deck
    pub fn create(root: &Path, model_name: &str, fields: &[String]) -> Result<Self> {
        if root.join(COLLECTION_FILE).exists() {
            return Err(CollectionError::AlreadyExists(root.to_path_buf()));
        }
        fs::create_dir_all(root.join(MEDIA_DIR))?;

        let mut collection = Self {
            root: root.to_path_buf(),
            models: ModelStore::default(),
            decks: DeckStore::default(),
            notes: NoteStore::default(),
            media: MediaFolder::new(root.join(MEDIA_DIR)),
        };
        collection.models.add(model_name, fields)?;
        let default_deck = collection.decks.id_for_name(DEFAULT_DECK);
        collection.decks.select(default_deck);
        collection.save()?;

        info!("Created collection at {}", root.display());
        Ok(collection)
    }

    pub fn open(root: &Path) -> Result<Self> {
        let file = root.join(COLLECTION_FILE);
        if !file.exists() {
            return Err(CollectionError::NotFound(root.to_path_buf()));
        }
        let content = fs::read_to_string(&file)?;
        let data: CollectionFile = serde_json::from_str(&content)?;
        debug!("Opened collection at {}", root.display());

        Ok(Self {
            root: root.to_path_buf(),
            models: data.models,
            decks: data.decks,
            notes: data.notes,
            media: MediaFolder::new(root.join(MEDIA_DIR)),
        })
    }

    /// Write staged media, then replace `collection.json` atomically
    pub fn save(&mut self) -> Result<()> {
        let written = self.media.commit()?;
        if written > 0 {
            debug!("Committed {} media files", written);
        }

        let data = CollectionFileRef {
            models: &self.models,
            decks: &self.decks,
            notes: &self.notes,
        };
        let json = serde_json::to_string_pretty(&data)?;

        let target = self.root.join(COLLECTION_FILE);
        let temp = self.root.join(format!("{}.tmp", COLLECTION_FILE));
        fs::write(&temp, json)?;
        fs::rename(&temp, &target)?;
        Ok(())
    }

    /// Save and release the collection
    pub fn close(mut self) -> Result<()> {
        self.save()?;
        debug!("Closed collection at {}", self.root.display());
        Ok(())
    }

    /// Borrow the four services for one import run
    pub fn services(&mut self) -> Services<'_> {
        Services {
            models: &mut self.models,
            decks: &mut self.decks,
            media: &mut self.media,
            notes: &mut self.notes,
        }
    }

    pub fn add_model(&mut self, name: &str, fields: &[String]) -> Result<ModelId> {
        self.models.add(name, fields)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn models(&self) -> &ModelStore {
        &self.models
    }

    pub fn decks(&self) -> &DeckStore {
        &self.decks
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn media(&self) -> &MediaFolder {
        &self.media
    }
}
