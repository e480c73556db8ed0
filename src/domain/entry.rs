//! Journal entry record

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single journal record.
///
/// `title` and `content` are required in storage; `date`, `tags` and `id`
/// are each defaulted independently when missing, so an old record that
/// lacks only `tags` still round-trips with its other fields intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub title: String,
    pub content: String,
    #[serde(default = "current_timestamp")]
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "fresh_id")]
    pub id: String,
}

impl JournalEntry {
    /// Create a new entry stamped with the current time and a fresh id.
    /// Both fields are assigned once here and never modified afterwards.
    pub fn new(title: String, content: String, tags: Vec<String>) -> Self {
        JournalEntry {
            title,
            content,
            date: current_timestamp(),
            tags,
            id: fresh_id(),
        }
    }
}

/// Current local time as an ISO-8601 string.
fn current_timestamp() -> String {
    Local::now().to_rfc3339()
}

/// Freshly generated unique entry id.
fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// Split a comma-separated tag string into individual tags.
/// Pieces are trimmed and empty pieces dropped; order, duplicates and
/// casing are preserved as entered.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
