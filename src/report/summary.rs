//! Import summary report generation

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::ImportOutcome;

/// Per-deck counts of one import run, ready for display
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub rows: Vec<DeckRow>,
    pub rejected_entries: usize,
    pub missing_media: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeckRow {
    pub deck: String,
    pub entries: usize,
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl ImportSummary {
    pub fn from_outcome(outcome: &ImportOutcome) -> Self {
        Self {
            rows: outcome
                .groups
                .iter()
                .map(|g| DeckRow {
                    deck: g.deck.clone(),
                    entries: g.entries,
                    added: g.added,
                    updated: g.updated,
                    unchanged: g.unchanged,
                    skipped: g.skipped,
                })
                .collect(),
            rejected_entries: outcome.issues.len(),
            missing_media: outcome.groups.iter().map(|g| g.missing_media.len()).sum(),
        }
    }

    pub fn totals(&self) -> DeckRow {
        self.rows.iter().fold(
            DeckRow {
                deck: "Total".to_string(),
                ..Default::default()
            },
            |mut acc, row| {
                acc.entries += row.entries;
                acc.added += row.added;
                acc.updated += row.updated;
                acc.unchanged += row.unchanged;
                acc.skipped += row.skipped;
                acc
            },
        )
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("IMPORT SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Deck").add_attribute(Attribute::Bold),
            Cell::new("Entries").add_attribute(Attribute::Bold),
            Cell::new("Added").add_attribute(Attribute::Bold),
            Cell::new("Updated").add_attribute(Attribute::Bold),
            Cell::new("Unchanged").add_attribute(Attribute::Bold),
            Cell::new("Skipped").add_attribute(Attribute::Bold),
        ]);

        for row in &self.rows {
            table.add_row(deck_cells(row, false));
        }
        if self.rows.len() > 1 {
            table.add_row(deck_cells(&self.totals(), true));
        }

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if self.rejected_entries > 0 {
            println!();
            println!(
                "      {} {}",
                style(self.rejected_entries).red().bold(),
                style("entry(ies) rejected").yellow()
            );
        }
        if self.missing_media > 0 {
            println!(
                "      {} {}",
                style(self.missing_media).yellow().bold(),
                style("media reference(s) not found").yellow()
            );
        }
    }
}

fn deck_cells(row: &DeckRow, bold: bool) -> Vec<Cell> {
    let mut deck = Cell::new(&row.deck);
    if bold {
        deck = deck.add_attribute(Attribute::Bold);
    }
    vec![
        deck,
        Cell::new(row.entries),
        Cell::new(row.added).fg(if row.added > 0 {
            Color::Green
        } else {
            Color::White
        }),
        Cell::new(row.updated).fg(if row.updated > 0 {
            Color::Cyan
        } else {
            Color::White
        }),
        Cell::new(row.unchanged),
        Cell::new(row.skipped).fg(if row.skipped > 0 {
            Color::Yellow
        } else {
            Color::White
        }),
    ]
}
