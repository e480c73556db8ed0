//! Add entry use case

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::EntryRepository;

/// Append a new entry to the journal and return it for display.
pub fn add_entry(
    repository: &impl EntryRepository,
    title: String,
    content: String,
    tags: Vec<String>,
) -> Result<JournalEntry> {
    repository.add(title, content, tags)
}
