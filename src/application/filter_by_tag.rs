//! Tag filter use case

use crate::domain::{self, JournalEntry};
use crate::error::Result;
use crate::infrastructure::EntryRepository;

/// Load the journal and return the entries carrying the given tag.
pub fn filter_by_tag(repository: &impl EntryRepository, tag: &str) -> Result<Vec<JournalEntry>> {
    let entries = repository.load()?;
    Ok(domain::find_tags(&entries, tag))
}
