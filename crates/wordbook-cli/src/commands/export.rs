// Rust guideline compliant 2026-10-19

//! Implementation of the `wb export` command.

use crate::OutputFormatter;
use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use wordbook_app::Workspace;
use wordbook_core::{export_csv, export_file_name, CsvColumns, EntryStore};

/// Writes every entry to a CSV file.
///
/// Without `output` the file is named after today's date and placed in the
/// workspace root. Without `columns` the configured column set is used.
///
/// # Returns
///
/// The path that was written.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized, the store cannot be
/// read, or the file cannot be written.
pub fn execute(
    root: Option<&Path>,
    output: Option<PathBuf>,
    columns: Option<CsvColumns>,
    formatter: &dyn OutputFormatter,
) -> Result<PathBuf> {
    let workspace = Workspace::discover(root)?;
    let config = workspace.load_config()?;
    let store = workspace.open_store()?;

    let mut entries = store.get_all()?;
    entries.sort_by_key(|e| e.id);

    let csv = export_csv(&entries, columns.unwrap_or(config.csv_columns))?;
    let path = output.unwrap_or_else(|| {
        workspace
            .root()
            .join(export_file_name(Local::now().date_naive()))
    });
    std::fs::write(&path, csv)?;

    println!(
        "{}",
        formatter.format_message(&format!(
            "Exported {} entries to {}",
            entries.len(),
            path.display()
        ))
    );

    Ok(path)
}
