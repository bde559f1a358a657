//! Media folder with content-based deduplication
//!
//! Files are stored flat under the collection's media directory. A name
//! that is already taken by different content gets a ` (n)` suffix.
//! New files are staged in memory and only written by [`MediaFolder::commit`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use sha2::{Digest, Sha256};

use super::error::{CollectionError, Result};
use super::MediaStore;

static COLLISION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \((\d+)\)$").expect("collision suffix pattern is valid"));

const ILLEGAL_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

#[derive(Debug, Clone)]
pub struct MediaFolder {
    dir: PathBuf,
    staged: BTreeMap<String, Vec<u8>>,
}

impl MediaFolder {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            staged: BTreeMap::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names registered since the last commit, not yet on disk
    pub fn staged(&self) -> impl Iterator<Item = &str> {
        self.staged.keys().map(String::as_str)
    }

    /// Write every staged file into the media directory
    pub fn commit(&mut self) -> Result<usize> {
        if self.staged.is_empty() {
            return Ok(0);
        }
        fs::create_dir_all(&self.dir)?;
        let count = self.staged.len();
        for (name, data) in std::mem::take(&mut self.staged) {
            fs::write(self.dir.join(&name), data)?;
            debug!("Wrote media file {}", name);
        }
        Ok(count)
    }

    /// Content digest of `name`, staged or on disk
    fn existing_digest(&self, name: &str) -> Result<Option<Vec<u8>>> {
        if let Some(data) = self.staged.get(name) {
            return Ok(Some(Sha256::digest(data).to_vec()));
        }
        let target = self.dir.join(name);
        if target.exists() {
            return Ok(Some(Sha256::digest(fs::read(&target)?).to_vec()));
        }
        Ok(None)
    }

    /// Stage `data` under `name`, returning the name actually used
    pub fn write_data(&mut self, name: &str, data: &[u8]) -> Result<String> {
        let clean = strip_illegal(name);
        if clean.is_empty() {
            return Err(CollectionError::InvalidMediaName(PathBuf::from(name)));
        }
        let name = clean;

        let checksum = Sha256::digest(data).to_vec();
        let path = Path::new(&name);
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name.as_str())
            .to_string();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();

        let (base, mut index) = match COLLISION_SUFFIX.captures(&stem) {
            Some(caps) => {
                let start = caps.get(0).map(|m| m.start()).unwrap_or(stem.len());
                let n: u32 = caps[1].parse().unwrap_or(0);
                (stem[..start].to_string(), n)
            }
            None => (stem.clone(), 0),
        };

        let mut candidate = name.clone();
        loop {
            match self.existing_digest(&candidate)? {
                None => {
                    debug!("Staged media file {}", candidate);
                    self.staged.insert(candidate.clone(), data.to_vec());
                    return Ok(candidate);
                }
                Some(existing) if existing == checksum => {
                    debug!("Reusing identical media file {}", candidate);
                    return Ok(candidate);
                }
                Some(_) => {}
            }
            index += 1;
            candidate = format!("{} ({}){}", base, index, ext);
        }
    }
}

impl MediaStore for MediaFolder {
    fn add_file(&mut self, path: &Path) -> Result<String> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| CollectionError::InvalidMediaName(path.to_path_buf()))?
            .to_string();
        let data = fs::read(path)?;
        self.write_data(&name, &data)
    }
}

/// Remove characters that are not allowed in media filenames
pub fn strip_illegal(name: &str) -> String {
    name.chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c) && !c.is_control())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_strip_illegal_characters() {
        assert_eq!(strip_illegal("a:b*c?.png"), "abc.png");
        assert_eq!(strip_illegal("tab\there.mp3"), "tabhere.mp3");
        assert_eq!(strip_illegal("plain.ogg"), "plain.ogg");
    }

    #[test]
    fn test_collision_suffix_increments_existing_index() {
        let temp_dir = TempDir::new().unwrap();
        let mut media = MediaFolder::new(temp_dir.path().to_path_buf());

        assert_eq!(media.write_data("pic (1).png", b"one").unwrap(), "pic (1).png");
        assert_eq!(media.write_data("pic (1).png", b"two").unwrap(), "pic (2).png");
    }

    #[test]
    fn test_nothing_written_before_commit() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("media");
        let mut media = MediaFolder::new(dir.clone());

        media.write_data("a.ogg", b"a").unwrap();
        media.write_data("b.ogg", b"b").unwrap();
        assert!(!dir.exists());
        assert_eq!(media.staged().collect::<Vec<_>>(), vec!["a.ogg", "b.ogg"]);

        assert_eq!(media.commit().unwrap(), 2);
        assert_eq!(fs::read(dir.join("a.ogg")).unwrap(), b"a");
        assert_eq!(media.staged().count(), 0);
    }

    #[test]
    fn test_committed_file_still_deduplicates() {
        let temp_dir = TempDir::new().unwrap();
        let mut media = MediaFolder::new(temp_dir.path().to_path_buf());

        media.write_data("pic.png", b"one").unwrap();
        media.commit().unwrap();

        assert_eq!(media.write_data("pic.png", b"one").unwrap(), "pic.png");
        assert_eq!(media.write_data("pic.png", b"two").unwrap(), "pic (1).png");
        assert_eq!(media.staged().collect::<Vec<_>>(), vec!["pic (1).png"]);
    }

    #[test]
    fn test_empty_name_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut media = MediaFolder::new(temp_dir.path().to_path_buf());
        assert!(matches!(
            media.write_data("???", b"data"),
            Err(CollectionError::InvalidMediaName(_))
        ));
    }
}
