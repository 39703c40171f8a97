// Rust guideline compliant 2026-10-19

//! Implementation of the `wb toggle` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use wordbook_app::Workspace;
use wordbook_core::{Entry, EntryId};

/// Flips the learned state of an entry.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized, the entry does not
/// exist, or the store cannot be written.
pub fn execute(
    root: Option<&Path>,
    id: EntryId,
    formatter: &dyn OutputFormatter,
) -> Result<Entry> {
    let workspace = Workspace::discover(root)?;
    let mut lifecycle = workspace.open_lifecycle()?;

    let entry = lifecycle.toggle_checked(id)?;
    println!("{}", formatter.format_entry(&entry));

    Ok(entry)
}
