// Rust guideline compliant 2026-10-19

//! One-shot migration of the legacy flat word list.
//!
//! Earlier releases kept every word in a single JSON array. Each record is
//! inserted into the entry store without its old id so the store assigns a
//! fresh one, then the legacy payload is removed.

use crate::{EntryDraft, EntryStore, Result, Subject};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// A record from the legacy list. Any `id` field is ignored.
#[derive(Debug, Deserialize)]
struct LegacyRecord {
    #[serde(default)]
    text: String,
    #[serde(default)]
    meaning: String,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    checked: Option<bool>,
}

impl LegacyRecord {
    fn into_draft(self) -> EntryDraft {
        EntryDraft {
            text: self.text,
            meaning: self.meaning,
            subject: self
                .subject
                .as_deref()
                .map(Subject::parse_lenient)
                .unwrap_or_default(),
            checked: self.checked.unwrap_or(false),
        }
    }
}

/// Moves legacy records into the store and deletes the legacy file.
///
/// Safe to call on every startup: without a legacy file it does nothing.
///
/// # Arguments
///
/// * `store` - Destination entry store
/// * `legacy_path` - Path of the legacy JSON array
///
/// # Returns
///
/// The number of records migrated.
///
/// # Errors
///
/// Returns an error if the legacy file cannot be read or parsed, or the store
/// write fails. The legacy file is left in place and no record is inserted in
/// that case.
pub fn migrate_legacy<S: EntryStore + ?Sized>(store: &mut S, legacy_path: &Path) -> Result<usize> {
    if !legacy_path.exists() {
        return Ok(0);
    }

    let content = std::fs::read_to_string(legacy_path)?;
    let records: Vec<LegacyRecord> = if content.trim().is_empty() {
        Vec::new()
    } else {
        serde_json::from_str(&content)?
    };

    let mut drafts = Vec::with_capacity(records.len());
    for (idx, record) in records.into_iter().enumerate() {
        match record.into_draft().normalized() {
            Ok(draft) => drafts.push(draft),
            Err(err) => {
                warn!(record = idx, error = %err, "skipping invalid legacy record");
            }
        }
    }

    // All records land in one write or none do.
    let migrated = store.create_many(&drafts)?.len();

    std::fs::remove_file(legacy_path)?;
    info!(migrated, path = %legacy_path.display(), "migrated legacy word list");

    Ok(migrated)
}
