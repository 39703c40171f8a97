// Rust guideline compliant 2026-10-19

//! Storage module for entry persistence.
//!
//! This module defines the [`EntryStore`] contract consumed by the application
//! layer and provides [`JsonlStore`], a durable JSONL-backed implementation
//! with atomic rewrites and file locking.

use crate::{Entry, EntryDraft, EntryId, EntryPatch, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key-value persistence for vocabulary entries.
///
/// Every method is durable before it returns. Consumers must not rely on the
/// order of [`EntryStore::get_all`] for display purposes.
pub trait EntryStore {
    /// Persists a new entry and returns its assigned id.
    ///
    /// Ids are never handed out twice, even after the entry holding one is
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is invalid or the write fails.
    fn create(&mut self, draft: &EntryDraft) -> Result<EntryId>;

    /// Persists several new entries in one atomic step and returns their ids
    /// in draft order.
    ///
    /// # Errors
    ///
    /// Returns an error if any draft is invalid or the write fails; nothing is
    /// stored in that case.
    fn create_many(&mut self, drafts: &[EntryDraft]) -> Result<Vec<EntryId>>;

    /// Loads a single entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no entry has the id.
    fn get(&self, id: EntryId) -> Result<Entry>;

    /// Applies a partial update and returns the updated entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no entry has the id, or an error if the
    /// result is invalid or the write fails.
    fn update(&mut self, id: EntryId, patch: &EntryPatch) -> Result<Entry>;

    /// Deletes an entry. Deleting an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn delete(&mut self, id: EntryId) -> Result<()>;

    /// Deletes every listed id in one atomic step and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; no entry is removed in that case.
    fn delete_many(&mut self, ids: &[EntryId]) -> Result<usize>;

    /// Loads every entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get_all(&self) -> Result<Vec<Entry>>;
}

/// Sidecar record of the highest id ever assigned.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreMeta {
    #[serde(default)]
    last_id: EntryId,
}

/// Parsed file contents plus the line numbers that could not be read.
#[derive(Debug, Default)]
struct Snapshot {
    entries: Vec<Entry>,
    unreadable: Vec<usize>,
}

/// JSONL-backed entry store.
///
/// Every mutation rewrites the whole file through a temp file and rename
/// while holding an exclusive lock on a sibling `.lock` file. The highest id
/// ever assigned is kept in a sibling `.meta` file so deleted ids stay retired.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl JsonlStore {
    /// Creates a new store for the given JSONL path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the path of the id high-water mark file.
    pub fn meta_path(&self) -> PathBuf {
        self.path.with_extension("meta")
    }

    /// Loads all entries, one JSON object per line.
    ///
    /// A missing file is an empty store. Blank lines are ignored and malformed
    /// lines are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened or read
    /// - A well-formed entry fails validation
    pub fn load_all(&self) -> Result<Vec<Entry>> {
        Ok(self.read_snapshot()?.entries)
    }

    fn read_snapshot(&self) -> Result<Snapshot> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.path.exists() {
            return Ok(Snapshot::default());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut snapshot = Snapshot::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Entry>(&line) {
                Ok(entry) => {
                    entry.validate()?;
                    snapshot.entries.push(entry);
                }
                Err(e) => {
                    warn!(
                        path = %self.path.display(),
                        line = idx + 1,
                        error = %e,
                        "skipping malformed entry line"
                    );
                    snapshot.unreadable.push(idx + 1);
                }
            }
        }

        debug!(count = snapshot.entries.len(), "loaded entries");
        Ok(snapshot)
    }

    /// Loads entries for a rewrite, refusing if any line would be lost.
    fn load_for_write(&self) -> Result<Vec<Entry>> {
        let snapshot = self.read_snapshot()?;
        if let Some(&line) = snapshot.unreadable.first() {
            return Err(Error::UnreadableRecord {
                path: self.path.clone(),
                line,
            });
        }
        Ok(snapshot.entries)
    }

    /// Replaces the file contents with the provided entries.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any entry fails validation
    /// - The temp file cannot be written or renamed
    pub fn save_all(&self, entries: &[Entry]) -> Result<()> {
        for entry in entries {
            entry.validate()?;
        }

        let mut content = String::new();
        for entry in entries {
            content.push_str(&serde_json::to_string(entry)?);
            content.push('\n');
        }

        write_atomic(&self.path, "jsonl.tmp", content.as_bytes())?;
        debug!(count = entries.len(), "saved entries");

        Ok(())
    }

    /// Returns the highest id ever assigned, or 0 for a fresh store.
    ///
    /// # Errors
    ///
    /// Returns an error if the meta file exists but cannot be read or parsed.
    pub fn last_id(&self) -> Result<EntryId> {
        let meta_path = self.meta_path();
        if !meta_path.exists() {
            return Ok(0);
        }
        let content = std::fs::read_to_string(&meta_path)?;
        let meta: StoreMeta = serde_json::from_str(&content)?;
        Ok(meta.last_id)
    }

    fn save_last_id(&self, last_id: EntryId) -> Result<()> {
        let content = serde_json::to_string(&StoreMeta { last_id })?;
        write_atomic(&self.meta_path(), "meta.tmp", content.as_bytes())
    }

    /// Executes a closure with an exclusive lock on the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired or the closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        ensure_parent(&self.path)?;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }

    /// Appends drafts under the lock and returns the first assigned id.
    fn append(&self, drafts: &[EntryDraft]) -> Result<EntryId> {
        for draft in drafts {
            draft.validate()?;
        }
        self.with_lock(|| {
            let mut entries = self.load_for_write()?;
            let first = next_id(&entries, self.last_id()?);
            let count = drafts.len() as EntryId;

            // Ids are retired before the entries land.
            self.save_last_id(first + count - 1)?;
            for (offset, draft) in (0..).zip(drafts) {
                entries.push(draft.clone().into_entry(first + offset));
            }
            self.save_all(&entries)?;
            Ok(first)
        })
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn write_atomic(path: &Path, temp_extension: &str, bytes: &[u8]) -> Result<()> {
    use std::fs::File;
    use std::io::Write;

    ensure_parent(path)?;
    let temp_path = path.with_extension(temp_extension);

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    std::fs::rename(&temp_path, path)?;
    Ok(())
}

fn max_id(entries: &[Entry]) -> EntryId {
    entries.iter().map(|e| e.id).max().unwrap_or(0)
}

fn next_id(entries: &[Entry], last_id: EntryId) -> EntryId {
    max_id(entries).max(last_id) + 1
}

impl EntryStore for JsonlStore {
    fn create(&mut self, draft: &EntryDraft) -> Result<EntryId> {
        self.append(std::slice::from_ref(draft))
    }

    fn create_many(&mut self, drafts: &[EntryDraft]) -> Result<Vec<EntryId>> {
        if drafts.is_empty() {
            return Ok(Vec::new());
        }
        let first = self.append(drafts)?;
        Ok((0..drafts.len() as EntryId).map(|offset| first + offset).collect())
    }

    fn get(&self, id: EntryId) -> Result<Entry> {
        self.load_all()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(Error::NotFound(id))
    }

    fn update(&mut self, id: EntryId, patch: &EntryPatch) -> Result<Entry> {
        self.with_lock(|| {
            let mut entries = self.load_for_write()?;
            let entry = entries
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or(Error::NotFound(id))?;
            patch.apply(entry);
            entry.validate()?;
            let updated = entry.clone();
            self.save_all(&entries)?;
            Ok(updated)
        })
    }

    fn delete(&mut self, id: EntryId) -> Result<()> {
        self.delete_many(&[id]).map(|_| ())
    }

    fn delete_many(&mut self, ids: &[EntryId]) -> Result<usize> {
        self.with_lock(|| {
            let mut entries = self.load_for_write()?;
            let initial_len = entries.len();
            let high_water = max_id(&entries);
            entries.retain(|e| !ids.contains(&e.id));

            let removed = initial_len - entries.len();
            if removed > 0 {
                // Stores written before the meta file existed learn their
                // high-water mark here, before the max id can disappear.
                let last_id = self.last_id()?;
                if high_water > last_id {
                    self.save_last_id(high_water)?;
                }
                self.save_all(&entries)?;
            }
            Ok(removed)
        })
    }

    fn get_all(&self) -> Result<Vec<Entry>> {
        self.load_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Subject;

    #[test]
    fn test_next_id_starts_at_one() {
        assert_eq!(next_id(&[], 0), 1);
    }

    #[test]
    fn test_next_id_follows_max() {
        let entries = vec![
            EntryDraft::new("a", "b", Subject::Noun).into_entry(3),
            EntryDraft::new("c", "d", Subject::Noun).into_entry(9),
        ];
        assert_eq!(next_id(&entries, 0), 10);
        assert_eq!(next_id(&entries, 4), 10);
    }

    #[test]
    fn test_next_id_honours_high_water_mark() {
        let entries = vec![EntryDraft::new("a", "b", Subject::Noun).into_entry(2)];
        assert_eq!(next_id(&entries, 7), 8);
        assert_eq!(next_id(&[], 7), 8);
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(JsonlStore::new(PathBuf::new()).is_err());
    }
}
