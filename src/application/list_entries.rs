//! List and count use cases

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::EntryRepository;

/// Load all entries in insertion order.
pub fn list_entries(repository: &impl EntryRepository) -> Result<Vec<JournalEntry>> {
    repository.load()
}

/// Count the entries in the journal.
pub fn count_entries(repository: &impl EntryRepository) -> Result<usize> {
    Ok(repository.load()?.len())
}
