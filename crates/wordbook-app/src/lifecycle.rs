// Rust guideline compliant 2026-10-19

//! Entry lifecycle: validated mutations that keep the store and the working
//! set consistent.
//!
//! Every mutation persists first and only then touches the in-memory working
//! set, so a storage failure leaves both sides unchanged.

use crate::error::{AppError, Result};
use crate::view::{compute_display_list, ViewState};
use serde::Serialize;
use tracing::{debug, info};
use wordbook_core::{Entry, EntryDraft, EntryId, EntryPatch, EntryStore, Error as CoreError, Subject};

/// Outcome of a confirmed single-entry removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Removal {
    /// The entry was deleted.
    Removed {
        /// The deleted entry.
        entry: Entry,
    },
    /// The caller declined the confirmation.
    Declined,
    /// No entry had the id; nothing was deleted.
    Missing {
        /// The requested id.
        id: EntryId,
    },
}

/// Outcome of a bulk clear of checked entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClearOutcome {
    /// Checked entries were deleted.
    Cleared {
        /// Number of entries deleted.
        count: usize,
    },
    /// The caller declined the confirmation.
    Declined,
}

/// Owns an entry store and the in-memory working set derived from it.
#[derive(Debug)]
pub struct EntryLifecycle<S: EntryStore> {
    store: S,
    entries: Vec<Entry>,
}

impl<S: EntryStore> EntryLifecycle<S> {
    /// Loads the working set from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn open(store: S) -> Result<Self> {
        let entries = store.get_all()?;
        debug!(count = entries.len(), "opened entry lifecycle");
        Ok(Self { store, entries })
    }

    /// Returns the working set in storage order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Looks up an entry in the working set.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Returns the number of checked entries.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.entries.iter().filter(|e| e.checked).count()
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying store for collaborators that write directly,
    /// such as the quiz engine. Call [`EntryLifecycle::reload`] afterwards.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the lifecycle and returns the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Replaces the working set with a fresh store snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn reload(&mut self) -> Result<()> {
        self.entries = self.store.get_all()?;
        Ok(())
    }

    /// Derives the display list from the current persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn display_list(&self, view: &ViewState) -> Result<Vec<Entry>> {
        Ok(compute_display_list(self.store.get_all()?, view))
    }

    /// Adds a new unchecked entry.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the text or meaning is blank, or a
    /// storage error if the write fails.
    pub fn add(&mut self, text: &str, meaning: &str, subject: Subject) -> Result<Entry> {
        let draft = EntryDraft::new(text, meaning, subject).normalized()?;
        let id = self.store.create(&draft)?;
        let entry = draft.into_entry(id);
        self.entries.push(entry.clone());
        info!(id, "added entry");
        Ok(entry)
    }

    /// Replaces the text, meaning and subject of an entry.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the text or meaning is blank, a not-found
    /// error if the id is not in the working set, or a storage error.
    pub fn edit(
        &mut self,
        id: EntryId,
        text: &str,
        meaning: &str,
        subject: Subject,
    ) -> Result<Entry> {
        let draft = EntryDraft::new(text, meaning, subject).normalized()?;
        let idx = self.position(id)?;

        let patch = EntryPatch::fields(draft.text, draft.meaning, draft.subject);
        let updated = self.store.update(id, &patch)?;
        self.entries[idx] = updated.clone();
        info!(id, "edited entry");
        Ok(updated)
    }

    /// Flips the learned state of an entry.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the id is not in the working set, or a
    /// storage error.
    pub fn toggle_checked(&mut self, id: EntryId) -> Result<Entry> {
        let idx = self.position(id)?;
        let checked = !self.entries[idx].checked;

        let updated = self.store.update(id, &EntryPatch::checked(checked))?;
        self.entries[idx] = updated.clone();
        debug!(id, checked, "toggled entry");
        Ok(updated)
    }

    /// Deletes an entry after the caller confirms.
    ///
    /// `confirm` receives the entry about to be removed; returning false is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error. An id that is already gone is reported as
    /// [`Removal::Missing`] without asking for confirmation.
    pub fn remove<F>(&mut self, id: EntryId, confirm: F) -> Result<Removal>
    where
        F: FnOnce(&Entry) -> bool,
    {
        let Some(idx) = self.entries.iter().position(|e| e.id == id) else {
            debug!(id, "entry already gone, nothing to remove");
            return Ok(Removal::Missing { id });
        };
        if !confirm(&self.entries[idx]) {
            return Ok(Removal::Declined);
        }

        self.store.delete(id)?;
        let entry = self.entries.remove(idx);
        info!(id, "removed entry");
        Ok(Removal::Removed { entry })
    }

    /// Deletes every checked entry after the caller confirms.
    ///
    /// `confirm` receives the number of entries about to be removed.
    ///
    /// # Errors
    ///
    /// Returns an empty-collection error if nothing is checked, or a storage
    /// error. Nothing is deleted in either case.
    pub fn clear_checked<F>(&mut self, confirm: F) -> Result<ClearOutcome>
    where
        F: FnOnce(usize) -> bool,
    {
        let ids: Vec<EntryId> = self
            .entries
            .iter()
            .filter(|e| e.checked)
            .map(|e| e.id)
            .collect();

        if ids.is_empty() {
            return Err(AppError::EmptyCollection(
                "No checked entries to clear".to_string(),
            ));
        }

        if !confirm(ids.len()) {
            return Ok(ClearOutcome::Declined);
        }

        self.store.delete_many(&ids)?;
        self.entries.retain(|e| !e.checked);
        info!(count = ids.len(), "cleared checked entries");
        Ok(ClearOutcome::Cleared { count: ids.len() })
    }

    /// Adds a batch of drafts, typically from a CSV import.
    ///
    /// The batch is written in one step: either every draft is stored or
    /// none is.
    ///
    /// # Errors
    ///
    /// Returns the first validation error, or a storage error.
    pub fn import(&mut self, drafts: Vec<EntryDraft>) -> Result<Vec<Entry>> {
        let drafts = drafts
            .into_iter()
            .map(EntryDraft::normalized)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let ids = self.store.create_many(&drafts)?;
        let added: Vec<Entry> = drafts
            .into_iter()
            .zip(ids)
            .map(|(draft, id)| draft.into_entry(id))
            .collect();

        self.entries.extend(added.iter().cloned());
        info!(count = added.len(), "imported entries");
        Ok(added)
    }

    fn position(&self, id: EntryId) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::Core(CoreError::NotFound(id)))
    }
}
