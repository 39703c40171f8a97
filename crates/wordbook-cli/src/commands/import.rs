// Rust guideline compliant 2026-10-19

//! Implementation of the `wb import` command.
//!
//! Imports entries from a CSV file in the export format.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use wordbook_app::Workspace;
use wordbook_core::import_csv;

/// Counts reported by an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows added to the store.
    pub imported: usize,
    /// Rows skipped for a missing word or meaning.
    pub skipped: usize,
}

/// Imports entries from a CSV file.
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The source file cannot be read
/// - The store cannot be written
pub fn execute(
    root: Option<&Path>,
    path: &Path,
    formatter: &dyn OutputFormatter,
) -> Result<ImportReport> {
    let workspace = Workspace::discover(root)?;
    if !path.exists() {
        anyhow::bail!("CSV file not found: {}", path.display());
    }

    let text = std::fs::read_to_string(path)?;
    let parsed = import_csv(&text)?;
    let skipped = parsed.skipped;

    let mut lifecycle = workspace.open_lifecycle()?;
    let added = lifecycle.import(parsed.drafts)?;

    let report = ImportReport {
        imported: added.len(),
        skipped,
    };

    let mut message = format!("Imported {} entries", report.imported);
    if report.skipped > 0 {
        message.push_str(&format!(" (skipped {} rows)", report.skipped));
    }
    println!("{}", formatter.format_message(&message));

    Ok(report)
}
