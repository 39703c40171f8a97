// Rust guideline compliant 2026-10-19

//! Implementation of the `wb clear` command.
//!
//! Deletes every checked entry in one step.

use crate::prompt::confirm_stdin;
use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use wordbook_app::{AppError, ClearOutcome, Workspace};

/// Deletes all checked entries, asking on the terminal unless `yes` is set.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized or the store cannot
/// be written.
pub fn execute(
    root: Option<&Path>,
    yes: bool,
    formatter: &dyn OutputFormatter,
) -> Result<Option<ClearOutcome>> {
    execute_with(
        root,
        |count| yes || confirm_stdin(&format!("Delete {} checked entries?", count)),
        formatter,
    )
}

/// Deletes all checked entries using a caller-supplied confirmation.
///
/// Returns `None` when nothing was checked.
///
/// # Errors
///
/// Same as [`execute`].
pub fn execute_with<F>(
    root: Option<&Path>,
    confirm: F,
    formatter: &dyn OutputFormatter,
) -> Result<Option<ClearOutcome>>
where
    F: FnOnce(usize) -> bool,
{
    let workspace = Workspace::discover(root)?;
    let mut lifecycle = workspace.open_lifecycle()?;

    let outcome = match lifecycle.clear_checked(confirm) {
        Ok(outcome) => outcome,
        Err(AppError::EmptyCollection(message)) => {
            println!("{}", formatter.format_message(&message));
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let message = match outcome {
        ClearOutcome::Cleared { count } => format!("Removed {} checked entries", count),
        ClearOutcome::Declined => "Cancelled".to_string(),
    };
    println!("{}", formatter.format_message(&message));

    Ok(Some(outcome))
}
