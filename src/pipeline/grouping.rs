//! Sort-then-group partitioning of entries by destination deck

use super::entry::Entry;
use super::error::EntryIssue;
use crate::collection::normalize_deck_name;

/// Entries sharing one deck name, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct DeckGroup {
    pub deck: String,
    pub entries: Vec<Entry>,
}

/// Partition entries into deck groups in ascending deck-name order.
///
/// Deck names are normalised first, so `"A"` and `" A "` share a group.
/// Entries without a `deck` key are returned as issues instead of being
/// grouped. The sort is stable, so each group keeps the input order.
pub fn group_by_deck(entries: Vec<Entry>) -> (Vec<DeckGroup>, Vec<EntryIssue>) {
    let mut issues = Vec::new();
    let mut keyed: Vec<(String, Entry)> = Vec::with_capacity(entries.len());

    for entry in entries {
        let deck = match entry.deck() {
            Ok(deck) => normalize_deck_name(deck),
            Err(issue) => {
                issues.push(issue);
                continue;
            }
        };
        keyed.push((deck, entry));
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut groups: Vec<DeckGroup> = Vec::new();
    for (deck, entry) in keyed {
        match groups.last_mut() {
            Some(group) if group.deck == deck => group.entries.push(entry),
            _ => groups.push(DeckGroup {
                deck,
                entries: vec![entry],
            }),
        }
    }

    (groups, issues)
}
