//! Read-only queries over an entry collection

use crate::domain::JournalEntry;

/// Find entries matching a free-text query.
///
/// An entry matches when the lowercased query is a substring of the
/// lowercased title or content, or equals one of the tags case-insensitively.
/// Tags match whole, never by substring. The empty query is a substring of
/// everything and so returns the full collection. Collection order is kept.
pub fn find_entries(entries: &[JournalEntry], query: &str) -> Vec<JournalEntry> {
    let q = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&q)
                || entry.content.to_lowercase().contains(&q)
                || entry.tags.iter().any(|tag| tag.to_lowercase() == q)
        })
        .cloned()
        .collect()
}

/// Find entries carrying the given tag (case-insensitive, exact match only).
pub fn find_tags(entries: &[JournalEntry], tag: &str) -> Vec<JournalEntry> {
    let q = tag.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.tags.iter().any(|t| t.to_lowercase() == q))
        .cloned()
        .collect()
}
