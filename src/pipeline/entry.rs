//! Parsing of the input document into entries

use std::collections::BTreeMap;

use serde_json::Value;

use super::error::{EntryIssue, ImportError, Result};

/// Key naming the destination deck of an entry
pub const DECK_KEY: &str = "deck";

/// One JSON object of the input document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    index: usize,
    fields: BTreeMap<String, String>,
}

/// Entries that parsed cleanly plus the issues of those that did not
#[derive(Debug, Default)]
pub struct ParsedDocument {
    pub entries: Vec<Entry>,
    pub issues: Vec<EntryIssue>,
}

impl Entry {
    pub fn new(index: usize, fields: BTreeMap<String, String>) -> Self {
        Self { index, fields }
    }

    /// Build an entry from string pairs
    pub fn from_pairs<K, V>(index: usize, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            index,
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Position of the entry in the input array
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn deck(&self) -> std::result::Result<&str, EntryIssue> {
        self.get(DECK_KEY)
            .ok_or(EntryIssue::MissingDeck { index: self.index })
    }

    /// Mapped fields the entry has no key for
    pub fn missing_fields(&self, mapping: &[String]) -> Vec<String> {
        mapping
            .iter()
            .filter(|f| !self.fields.contains_key(f.as_str()))
            .cloned()
            .collect()
    }

    fn from_value(index: usize, value: Value) -> std::result::Result<Self, EntryIssue> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(EntryIssue::NotAnObject {
                    index,
                    found: json_type(&other),
                })
            }
        };

        let mut fields = BTreeMap::new();
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(EntryIssue::InvalidValue { index, field: key })
                }
            };
            fields.insert(key, text);
        }
        Ok(Self { index, fields })
    }
}

/// Parse the document text. Only malformed JSON or a non-array document is fatal.
pub fn parse_entries(json_text: &str) -> Result<ParsedDocument> {
    let document: Value = serde_json::from_str(json_text)?;
    let items = match document {
        Value::Array(items) => items,
        other => return Err(ImportError::NotAnArray(json_type(&other))),
    };

    let mut parsed = ParsedDocument::default();
    for (index, item) in items.into_iter().enumerate() {
        match Entry::from_value(index, item) {
            Ok(entry) => parsed.entries.push(entry),
            Err(issue) => parsed.issues.push(issue),
        }
    }
    Ok(parsed)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
