// Rust guideline compliant 2026-10-19

//! Implementation of the `wb remove` command.

use crate::prompt::confirm_stdin;
use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use wordbook_app::{Removal, Workspace};
use wordbook_core::{Entry, EntryId};

/// Removes an entry, asking on the terminal unless `yes` is set.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized or the store cannot
/// be written. An id that is already gone is reported, not an error.
pub fn execute(
    root: Option<&Path>,
    id: EntryId,
    yes: bool,
    formatter: &dyn OutputFormatter,
) -> Result<Removal> {
    execute_with(
        root,
        id,
        |entry| yes || confirm_stdin(&format!("Delete \"{}\"?", entry.text)),
        formatter,
    )
}

/// Removes an entry using a caller-supplied confirmation.
///
/// # Errors
///
/// Same as [`execute`].
pub fn execute_with<F>(
    root: Option<&Path>,
    id: EntryId,
    confirm: F,
    formatter: &dyn OutputFormatter,
) -> Result<Removal>
where
    F: FnOnce(&Entry) -> bool,
{
    let workspace = Workspace::discover(root)?;
    let mut lifecycle = workspace.open_lifecycle()?;

    let outcome = lifecycle.remove(id, confirm)?;
    let message = match &outcome {
        Removal::Removed { entry } => format!("Removed entry {}: {}", entry.id, entry.text),
        Removal::Declined => "Cancelled".to_string(),
        Removal::Missing { id } => format!("Entry {id} not found; nothing removed"),
    };
    println!("{}", formatter.format_message(&message));

    Ok(outcome)
}
