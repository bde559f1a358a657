//! Import configuration: model name, media extensions and duplicate policy

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ImportError, Result};
use super::media::MediaKind;
use crate::collection::ImportMode;

pub const DEFAULT_MODEL_NAME: &str = "Basic-Import";

pub const DEFAULT_AUDIO_EXTENSIONS: &[&str] = &[
    "wav", "mp3", "ogg", "flac", "mp4", "swf", "mov", "mpeg", "mkv", "m4a", "3gp", "spx", "oga",
];

pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "tif", "tiff", "gif", "svg", "webp"];

/// Settings for one import run. Every key is optional in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportConfig {
    /// Note model every imported entry is created with
    pub model_name: String,
    pub audio_extensions: BTreeSet<String>,
    pub image_extensions: BTreeSet<String>,
    pub import_mode: ImportMode,
    /// Abort on the first invalid entry instead of skipping it
    pub strict: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            audio_extensions: DEFAULT_AUDIO_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            image_extensions: DEFAULT_IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            import_mode: ImportMode::default(),
            strict: false,
        }
    }
}

impl ImportConfig {
    /// Load a JSON config file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ImportConfig =
            serde_json::from_str(&content).map_err(|source| ImportError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config.normalized())
    }

    /// Lowercase extensions and drop leading dots so `".MP3"` matches `mp3`
    pub fn normalized(mut self) -> Self {
        self.audio_extensions = normalize_extensions(&self.audio_extensions);
        self.image_extensions = normalize_extensions(&self.image_extensions);
        self
    }

    /// Classify a lowercase extension. Audio wins if both sets contain it.
    pub fn media_kind(&self, extension: &str) -> Option<MediaKind> {
        if self.audio_extensions.contains(extension) {
            Some(MediaKind::Audio)
        } else if self.image_extensions.contains(extension) {
            Some(MediaKind::Image)
        } else {
            None
        }
    }
}

fn normalize_extensions(extensions: &BTreeSet<String>) -> BTreeSet<String> {
    extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
