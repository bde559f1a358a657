//! Entry to row transformation with media rewriting

use std::path::{Path, PathBuf};

use log::warn;

use super::config::ImportConfig;
use super::entry::Entry;
use super::media::{candidate_extension, contains_markup};
use crate::collection::{MediaStore, Result};

/// Field values in model-field order. Empty means "skip this entry".
pub type Row = Vec<String>;

/// Turns entries into rows for one field mapping and media directory
pub struct EntryTransformer<'a> {
    mapping: &'a [String],
    media_dir: &'a Path,
    config: &'a ImportConfig,
    missing_media: Vec<PathBuf>,
}

impl<'a> EntryTransformer<'a> {
    pub fn new(mapping: &'a [String], media_dir: &'a Path, config: &'a ImportConfig) -> Self {
        Self {
            mapping,
            media_dir,
            config,
            missing_media: Vec::new(),
        }
    }

    /// Build the row for `entry`, registering referenced media with `media`.
    ///
    /// Absent fields default to the empty string. A value naming a media
    /// file that is not a regular file under the media directory is kept as-is.
    pub fn transform(&mut self, entry: &Entry, media: &mut dyn MediaStore) -> Result<Row> {
        let mut row = Vec::with_capacity(self.mapping.len());
        let mut empty = true;

        for field in self.mapping {
            let mut value = entry.get(field).unwrap_or("").to_string();
            if !value.is_empty() {
                empty = false;
            }

            if !contains_markup(&value) {
                if let Some(kind) =
                    candidate_extension(&value).and_then(|ext| self.config.media_kind(&ext))
                {
                    let path = self.media_dir.join(&value);
                    if path.is_file() {
                        let stored = media.add_file(&path)?;
                        value = kind.markup(&stored);
                    } else {
                        warn!(
                            "Entry {}: media file not found: {}",
                            entry.index(),
                            path.display()
                        );
                        self.missing_media.push(path);
                    }
                }
            }

            row.push(value);
        }

        if empty {
            Ok(Vec::new())
        } else {
            Ok(row)
        }
    }

    /// Media paths referenced so far that could not be found
    pub fn missing_media(&self) -> &[PathBuf] {
        &self.missing_media
    }
}

/// Transform a single entry
pub fn transform(
    entry: &Entry,
    mapping: &[String],
    media_dir: &Path,
    media: &mut dyn MediaStore,
    config: &ImportConfig,
) -> Result<Row> {
    EntryTransformer::new(mapping, media_dir, config).transform(entry, media)
}
