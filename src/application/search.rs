//! Free-text search use case

use crate::domain::{self, JournalEntry};
use crate::error::Result;
use crate::infrastructure::EntryRepository;

/// Load the journal and return the entries matching the query.
pub fn search_entries(
    repository: &impl EntryRepository,
    query: &str,
) -> Result<Vec<JournalEntry>> {
    let entries = repository.load()?;
    Ok(domain::find_entries(&entries, query))
}
