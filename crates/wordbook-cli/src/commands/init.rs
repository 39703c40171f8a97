// Rust guideline compliant 2026-10-19

//! Implementation of the `wb init` command.
//!
//! Creates the `.wordbook` directory with an empty entry store and a default
//! configuration file.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use wordbook_app::Workspace;

/// Initializes a Wordbook workspace.
///
/// Running it again on an initialized workspace leaves existing files alone.
///
/// # Errors
///
/// Returns an error if:
/// - The `.wordbook` directory cannot be created
/// - The `entries.jsonl` file cannot be created
/// - The configuration file cannot be written
pub fn execute(root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<()> {
    let workspace = Workspace::at(root)?;
    let created = workspace.init()?;

    let message = if created {
        format!("Wordbook initialized at {}", workspace.data_dir().display())
    } else {
        format!(
            "Wordbook already initialized at {}",
            workspace.data_dir().display()
        )
    };
    println!("{}", formatter.format_message(&message));

    Ok(())
}
