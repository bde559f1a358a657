//! In-memory model and deck registries persisted with the collection

use serde::{Deserialize, Serialize};

use super::error::{CollectionError, Result};
use super::models::{Deck, DeckId, Model, ModelId, DEFAULT_DECK};
use super::{DeckRegistry, ModelRegistry};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelStore {
    next_id: ModelId,
    models: Vec<Model>,
}

impl ModelStore {
    /// Register a new model and return its id
    pub fn add(&mut self, name: &str, fields: &[String]) -> Result<ModelId> {
        let name = name.trim();
        if self.models.iter().any(|m| m.name == name) {
            return Err(CollectionError::DuplicateModel(name.to_string()));
        }

        let fields: Vec<String> = fields
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        if fields.is_empty() {
            return Err(CollectionError::NoFields(name.to_string()));
        }

        self.next_id += 1;
        let id = self.next_id;
        self.models.push(Model {
            id,
            name: name.to_string(),
            fields,
            deck_id: None,
        });
        Ok(id)
    }

    pub fn get(&self, id: ModelId) -> Option<&Model> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn all(&self) -> &[Model] {
        &self.models
    }
}

impl ModelRegistry for ModelStore {
    fn by_name(&self, name: &str) -> Option<Model> {
        self.models.iter().find(|m| m.name == name).cloned()
    }

    fn bind_deck(&mut self, model_id: ModelId, deck_id: DeckId) -> Result<()> {
        let model = self
            .models
            .iter_mut()
            .find(|m| m.id == model_id)
            .ok_or(CollectionError::ModelNotFound(model_id))?;
        model.deck_id = Some(deck_id);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckStore {
    next_id: DeckId,
    #[serde(default)]
    current: Option<DeckId>,
    decks: Vec<Deck>,
}

impl DeckStore {
    pub fn current(&self) -> Option<DeckId> {
        self.current
    }

    pub fn by_name(&self, name: &str) -> Option<&Deck> {
        let name = normalize_deck_name(name);
        self.decks.iter().find(|d| d.name == name)
    }

    pub fn all(&self) -> &[Deck] {
        &self.decks
    }

    fn find_or_create(&mut self, name: &str) -> DeckId {
        if let Some(deck) = self.decks.iter().find(|d| d.name == name) {
            return deck.id;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.decks.push(Deck {
            id,
            name: name.to_string(),
            model_id: None,
        });
        id
    }
}

impl DeckRegistry for DeckStore {
    fn id_for_name(&mut self, name: &str) -> DeckId {
        let name = normalize_deck_name(name);

        // Parents of "A::B::C" are created first so the hierarchy is complete
        let mut prefix = String::new();
        let mut id = 0;
        for part in name.split("::") {
            if !prefix.is_empty() {
                prefix.push_str("::");
            }
            prefix.push_str(part);
            id = self.find_or_create(&prefix);
        }
        id
    }

    fn get(&self, id: DeckId) -> Option<Deck> {
        self.decks.iter().find(|d| d.id == id).cloned()
    }

    fn select(&mut self, id: DeckId) {
        self.current = Some(id);
    }

    fn save(&mut self, deck: Deck) -> Result<()> {
        let slot = self
            .decks
            .iter_mut()
            .find(|d| d.id == deck.id)
            .ok_or(CollectionError::DeckNotFound(deck.id))?;
        *slot = deck;
        Ok(())
    }
}

/// Trim every `::` component and drop empty ones; an empty name is the default deck
pub fn normalize_deck_name(name: &str) -> String {
    let parts: Vec<&str> = name
        .split("::")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        DEFAULT_DECK.to_string()
    } else {
        parts.join("::")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_deck_creates_parents() {
        let mut decks = DeckStore::default();
        let id = decks.id_for_name("Japanese::Vocab::N5");

        let names: Vec<&str> = decks.all().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Japanese", "Japanese::Vocab", "Japanese::Vocab::N5"]);
        assert_eq!(decks.get(id).unwrap().name, "Japanese::Vocab::N5");
    }

    #[test]
    fn test_deck_lookup_is_idempotent() {
        let mut decks = DeckStore::default();
        let first = decks.id_for_name("Spanish");
        let second = decks.id_for_name(" Spanish ");
        assert_eq!(first, second);
        assert_eq!(decks.all().len(), 1);
    }

    #[test]
    fn test_blank_deck_name_maps_to_default() {
        assert_eq!(normalize_deck_name(""), DEFAULT_DECK);
        assert_eq!(normalize_deck_name(" :: "), DEFAULT_DECK);
        assert_eq!(normalize_deck_name("A :: B"), "A::B");
    }

    #[test]
    fn test_duplicate_model_rejected() {
        let mut models = ModelStore::default();
        let fields = vec!["Front".to_string(), "Back".to_string()];
        models.add("Basic-Import", &fields).unwrap();
        assert!(matches!(
            models.add("Basic-Import", &fields),
            Err(CollectionError::DuplicateModel(_))
        ));
    }

    #[test]
    fn test_model_without_fields_rejected() {
        let mut models = ModelStore::default();
        assert!(matches!(
            models.add("Empty", &[" ".to_string()]),
            Err(CollectionError::NoFields(_))
        ));
    }

    #[test]
    fn test_bind_deck_unknown_model() {
        let mut models = ModelStore::default();
        assert!(matches!(
            models.bind_deck(42, 1),
            Err(CollectionError::ModelNotFound(42))
        ));
    }
}
