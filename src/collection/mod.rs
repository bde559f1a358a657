//! Collection module - the services the importer consumes
//!
//! The importer never touches storage directly. It is handed one
//! implementation of each trait below through [`Services`]. The
//! directory-backed [`Collection`] provides all four.

mod error;
mod media;
mod models;
mod notes;
mod registry;
mod store;

use std::path::Path;

pub use error::{CollectionError, Result};
pub use media::MediaFolder;
pub use models::*;
pub use notes::NoteStore;
pub use registry::{normalize_deck_name, DeckStore, ModelStore};
pub use store::{Collection, COLLECTION_FILE, MEDIA_DIR};

/// Lookup of note models by name
pub trait ModelRegistry {
    fn by_name(&self, name: &str) -> Option<Model>;

    /// Remember `deck_id` as the deck the model was last used with
    fn bind_deck(&mut self, model_id: ModelId, deck_id: DeckId) -> Result<()>;
}

/// Decks addressed by name, created on first use
pub trait DeckRegistry {
    /// Return the id of the deck called `name`, creating it if needed
    fn id_for_name(&mut self, name: &str) -> DeckId;

    fn get(&self, id: DeckId) -> Option<Deck>;

    /// Make `id` the current deck
    fn select(&mut self, id: DeckId);

    fn save(&mut self, deck: Deck) -> Result<()>;
}

/// Content-addressed storage for audio and image files
pub trait MediaStore {
    /// Copy `path` into the store and return the name it is stored under.
    ///
    /// The name differs from the source file name when a file with the
    /// same name but different content is already stored.
    fn add_file(&mut self, path: &Path) -> Result<String>;
}

/// Bulk creation of notes bound to one deck and model
pub trait NoteInserter {
    fn insert_notes(
        &mut self,
        model: &Model,
        deck_id: DeckId,
        notes: Vec<ForeignNote>,
        mode: ImportMode,
    ) -> Result<InsertReport>;
}

/// Mutable handles to the services one import run works against
pub struct Services<'a> {
    pub models: &'a mut dyn ModelRegistry,
    pub decks: &'a mut dyn DeckRegistry,
    pub media: &'a mut dyn MediaStore,
    pub notes: &'a mut dyn NoteInserter,
}
