//! Note storage and bulk insertion with first-field duplicate detection

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::models::{DeckId, ForeignNote, ImportMode, InsertReport, Model, NoteId, StoredNote};
use super::NoteInserter;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteStore {
    next_id: NoteId,
    notes: Vec<StoredNote>,
}

impl NoteStore {
    pub fn all(&self) -> &[StoredNote] {
        &self.notes
    }

    pub fn in_deck(&self, deck_id: DeckId) -> impl Iterator<Item = &StoredNote> {
        self.notes.iter().filter(move |n| n.deck_id == deck_id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Index of existing notes of `model` keyed by first field
    fn first_field_index(&self, model: &Model) -> HashMap<String, Vec<usize>> {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, note) in self.notes.iter().enumerate() {
            if note.model_id == model.id {
                index
                    .entry(note.first_field().to_string())
                    .or_default()
                    .push(i);
            }
        }
        index
    }
}

impl NoteInserter for NoteStore {
    fn insert_notes(
        &mut self,
        model: &Model,
        deck_id: DeckId,
        notes: Vec<ForeignNote>,
        mode: ImportMode,
    ) -> Result<InsertReport> {
        let mut report = InsertReport::default();
        let mut index = self.first_field_index(model);
        let mut seen: HashSet<String> = HashSet::new();
        let mut duplicates = 0;

        for note in notes {
            let mut fields = note.fields;
            fields.resize(model.fields.len(), String::new());
            let note = ForeignNote::new(fields);
            let first = note.first_field().to_string();

            if first.is_empty() {
                report
                    .log
                    .push(format!("Empty first field: {}", note.fields.join(" ")));
                continue;
            }

            if mode != ImportMode::Duplicate {
                if !seen.insert(first.clone()) {
                    report.log.push(format!("Appeared twice in file: {}", first));
                    continue;
                }

                if let Some(existing) = index.get(&first) {
                    duplicates += 1;
                    match mode {
                        ImportMode::Update => {
                            let mut changed = false;
                            for &i in existing {
                                let stored = &mut self.notes[i];
                                if stored.fields != note.fields {
                                    stored.fields = note.fields.clone();
                                    stored.modified = Utc::now();
                                    changed = true;
                                }
                            }
                            if changed {
                                report.updated += 1;
                            }
                        }
                        ImportMode::Ignore => {
                            report.log.push(format!("First field matched: {}", first));
                        }
                        ImportMode::Duplicate => {}
                    }
                    continue;
                }
            }

            self.next_id += 1;
            self.notes.push(StoredNote {
                id: self.next_id,
                model_id: model.id,
                deck_id,
                fields: note.fields,
                modified: Utc::now(),
            });
            index.entry(first).or_default().push(self.notes.len() - 1);
            report.added += 1;
        }

        report.unchanged = duplicates - report.updated;
        report.log.push(format!(
            "{}, {}, {}.",
            plural(report.added, "note added", "notes added"),
            plural(report.updated, "note updated", "notes updated"),
            plural(report.unchanged, "note unchanged", "notes unchanged"),
        ));
        Ok(report)
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model {
            id: 1,
            name: "Basic-Import".to_string(),
            fields: vec!["Front".to_string(), "Back".to_string()],
            deck_id: None,
        }
    }

    fn note(front: &str, back: &str) -> ForeignNote {
        ForeignNote::new(vec![front.to_string(), back.to_string()])
    }

    #[test]
    fn test_plural_forms() {
        assert_eq!(plural(1, "note added", "notes added"), "1 note added");
        assert_eq!(plural(0, "note added", "notes added"), "0 notes added");
        assert_eq!(plural(3, "note added", "notes added"), "3 notes added");
    }

    #[test]
    fn test_short_rows_are_padded_to_model_fields() {
        let mut store = NoteStore::default();
        let notes = vec![ForeignNote::new(vec!["only".to_string()])];
        store
            .insert_notes(&model(), 1, notes, ImportMode::Update)
            .unwrap();
        assert_eq!(store.all()[0].fields, vec!["only", ""]);
    }

    #[test]
    fn test_empty_first_field_is_logged() {
        let mut store = NoteStore::default();
        let report = store
            .insert_notes(&model(), 1, vec![note("", "back")], ImportMode::Update)
            .unwrap();
        assert_eq!(report.added, 0);
        assert_eq!(report.log[0], "Empty first field:  back");
        assert!(store.is_empty());
    }
}
