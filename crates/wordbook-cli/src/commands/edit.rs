// Rust guideline compliant 2026-10-19

//! Implementation of the `wb edit` command.
//!
//! Fields that are not given keep their current values.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use wordbook_app::{AppError, Workspace};
use wordbook_core::{Entry, EntryId, Error as CoreError, Subject};

/// Edits the word, meaning or subject of an entry.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - No field to change was given
/// - The entry does not exist
/// - The resulting word or meaning is blank
/// - The store cannot be written
pub fn execute(
    root: Option<&Path>,
    id: EntryId,
    text: Option<String>,
    meaning: Option<String>,
    subject: Option<Subject>,
    formatter: &dyn OutputFormatter,
) -> Result<Entry> {
    if text.is_none() && meaning.is_none() && subject.is_none() {
        return Err(AppError::InvalidInput(
            "Nothing to update; pass --text, --meaning or --subject".to_string(),
        )
        .into());
    }

    let workspace = Workspace::discover(root)?;
    let mut lifecycle = workspace.open_lifecycle()?;

    let current = lifecycle
        .get(id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound(id)))?;

    let entry = lifecycle.edit(
        id,
        text.as_deref().unwrap_or(&current.text),
        meaning.as_deref().unwrap_or(&current.meaning),
        subject.unwrap_or(current.subject),
    )?;
    println!("{}", formatter.format_entry(&entry));

    Ok(entry)
}
