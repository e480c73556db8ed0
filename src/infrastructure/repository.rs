//! JSON file repository for journal entries

use crate::domain::JournalEntry;
use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Abstract repository over a journal entry collection.
///
/// The whole collection is loaded into memory, mutated there, and written
/// back in full. There is no partial update and no locking; concurrent
/// writers race read-modify-write cycles and the last save wins.
pub trait EntryRepository {
    /// Path of the backing file
    fn path(&self) -> &Path;

    /// Load the full entry collection
    fn load(&self) -> Result<Vec<JournalEntry>>;

    /// Overwrite the backing file with the given collection
    fn save(&self, entries: &[JournalEntry]) -> Result<()>;

    /// Append a new entry and persist the whole collection
    fn add(&self, title: String, content: String, tags: Vec<String>) -> Result<JournalEntry>;
}

/// File-backed implementation of EntryRepository
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    /// Create a repository over the given backing file
    pub fn new(path: PathBuf) -> Self {
        FileRepository { path }
    }

    /// Ensure the backing file exists, creating it empty if absent
    fn touch(&self) -> Result<()> {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        Ok(())
    }
}

impl EntryRepository for FileRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<JournalEntry>> {
        self.touch()?;

        let contents = fs::read_to_string(&self.path)?;
        if contents.is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<JournalEntry>>(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // Corrupt state is unrecoverable: reset the file and start
                // fresh rather than surfacing a parse error to the caller.
                log::warn!(
                    "journal file {} is corrupted, resetting: {}",
                    self.path.display(),
                    e
                );
                fs::write(&self.path, "[]")?;
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, entries: &[JournalEntry]) -> Result<()> {
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn add(&self, title: String, content: String, tags: Vec<String>) -> Result<JournalEntry> {
        let mut entries = self.load()?;
        let entry = JournalEntry::new(title, content, tags);
        entries.push(entry.clone());
        self.save(&entries)?;
        Ok(entry)
    }
}
