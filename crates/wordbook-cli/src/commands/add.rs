// Rust guideline compliant 2026-10-19

//! Implementation of the `wb add` command.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use wordbook_app::Workspace;
use wordbook_core::{Entry, Subject};

/// Adds a new unchecked entry.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The word or meaning is blank
/// - The store cannot be written
pub fn execute(
    root: Option<&Path>,
    text: &str,
    meaning: &str,
    subject: Subject,
    formatter: &dyn OutputFormatter,
) -> Result<Entry> {
    let workspace = Workspace::discover(root)?;
    let mut lifecycle = workspace.open_lifecycle()?;

    let entry = lifecycle.add(text, meaning, subject)?;
    println!("{}", formatter.format_entry(&entry));

    Ok(entry)
}
