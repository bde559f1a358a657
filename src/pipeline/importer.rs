//! Import orchestration: document to notes, one batch per deck group

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use log::{debug, warn};

use super::config::ImportConfig;
use super::entry::parse_entries;
use super::error::{EntryIssue, ImportError, Result};
use super::grouping::{group_by_deck, DeckGroup};
use super::transform::EntryTransformer;
use crate::collection::{CollectionError, ForeignNote, Services};

/// Header line of the summary text
pub const COMPLETION_HEADER: &str = "Importing complete.";

/// What happened to one deck group
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupReport {
    pub deck: String,
    pub entries: usize,
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Entries whose mapped fields were all empty
    pub skipped: usize,
    pub missing_media: Vec<PathBuf>,
    pub log: Vec<String>,
}

/// Result of a whole import run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportOutcome {
    pub groups: Vec<GroupReport>,
    /// Entries that were rejected before grouping
    pub issues: Vec<EntryIssue>,
}

impl ImportOutcome {
    pub fn total_added(&self) -> usize {
        self.groups.iter().map(|g| g.added).sum()
    }

    pub fn total_updated(&self) -> usize {
        self.groups.iter().map(|g| g.updated).sum()
    }

    /// Completion header followed by every group's log and the entry issues
    pub fn summary_text(&self) -> String {
        let mut fragments: Vec<String> = self
            .groups
            .iter()
            .filter(|g| !g.log.is_empty())
            .map(|g| g.log.join("\n"))
            .collect();
        fragments.extend(self.issues.iter().map(|i| i.to_string()));

        let mut text = format!("{}\n", COMPLETION_HEADER);
        text.push_str(&fragments.join("\n"));
        text
    }
}

/// Drives one import run against injected collection services
pub struct Importer<'a> {
    services: Services<'a>,
    config: &'a ImportConfig,
    media_dir: PathBuf,
    progress: Option<ProgressBar>,
}

impl<'a> Importer<'a> {
    /// `media_dir` is the directory relative media filenames are resolved against
    pub fn new(services: Services<'a>, config: &'a ImportConfig, media_dir: PathBuf) -> Self {
        Self {
            services,
            config,
            media_dir,
            progress: None,
        }
    }

    /// Advance `progress` once per deck group
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn run(&mut self, json_text: &str) -> Result<ImportOutcome> {
        let parsed = parse_entries(json_text)?;
        let (groups, deck_issues) = group_by_deck(parsed.entries);

        let mut issues = parsed.issues;
        issues.extend(deck_issues);
        issues.sort_by_key(EntryIssue::index);

        if self.config.strict {
            if let Some(issue) = issues.into_iter().next() {
                return Err(ImportError::Entry(issue));
            }
            issues = Vec::new();
        }
        for issue in &issues {
            warn!("{}", issue);
        }

        if let Some(pb) = &self.progress {
            pb.set_length(groups.len() as u64);
        }

        let mut reports = Vec::with_capacity(groups.len());
        for group in groups {
            if let Some(pb) = &self.progress {
                pb.set_message(group.deck.clone());
            }
            reports.push(self.import_group(group)?);
            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
        }

        Ok(ImportOutcome {
            groups: reports,
            issues,
        })
    }

    fn import_group(&mut self, group: DeckGroup) -> Result<GroupReport> {
        let model = self
            .services
            .models
            .by_name(&self.config.model_name)
            .ok_or_else(|| ImportError::ModelNotFound(self.config.model_name.clone()))?;

        let deck_id = self.services.decks.id_for_name(&group.deck);
        self.services.decks.select(deck_id);
        let mut deck = self
            .services
            .decks
            .get(deck_id)
            .ok_or(CollectionError::DeckNotFound(deck_id))?;
        deck.model_id = Some(model.id);
        self.services.decks.save(deck)?;
        self.services.models.bind_deck(model.id, deck_id)?;

        debug!(
            "Importing {} entries into deck '{}'",
            group.entries.len(),
            group.deck
        );

        let mut report = GroupReport {
            deck: group.deck.clone(),
            entries: group.entries.len(),
            ..Default::default()
        };

        let mut transformer = EntryTransformer::new(&model.fields, &self.media_dir, self.config);
        let mut notes = Vec::with_capacity(group.entries.len());
        for entry in &group.entries {
            let missing = entry.missing_fields(&model.fields);
            if !missing.is_empty() {
                report.log.push(format!(
                    "Entry {}: missing fields: {}",
                    entry.index(),
                    missing.join(", ")
                ));
            }

            let row = transformer.transform(entry, &mut *self.services.media)?;
            if row.is_empty() {
                report.skipped += 1;
                continue;
            }
            notes.push(ForeignNote::new(row));
        }

        for path in transformer.missing_media() {
            report
                .log
                .push(format!("Media file not found: {}", path.display()));
        }
        report.missing_media = transformer.missing_media().to_vec();

        let inserted = self.services.notes.insert_notes(
            &model,
            deck_id,
            notes,
            self.config.import_mode,
        )?;
        report.added = inserted.added;
        report.updated = inserted.updated;
        report.unchanged = inserted.unchanged;
        report.log.extend(inserted.log);

        Ok(report)
    }
}

/// Read `path` and import it. Relative media names resolve against the file's directory.
pub fn import_from_json<'a>(
    path: &Path,
    services: Services<'a>,
    config: &'a ImportConfig,
) -> Result<ImportOutcome> {
    let json_text = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let media_dir = media_dir_for(path);
    Importer::new(services, config, media_dir).run(&json_text)
}

/// Directory containing `path`, or the current directory for bare filenames
pub fn media_dir_for(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
