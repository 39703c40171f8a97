// Rust guideline compliant 2026-10-19

//! Implementation of the `wb list` command.
//!
//! Lists entries through the view pipeline with optional subject filters,
//! search, sort direction, shuffle and display mode.

use crate::OutputFormatter;
use anyhow::Result;
use std::path::Path;
use wordbook_app::{DisplayMode, ViewState, Workspace};
use wordbook_core::{Config, Entry, Subject};

/// Options accepted by `wb list`.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Subjects to keep; empty keeps all.
    pub filters: Vec<Subject>,
    /// Search keyword.
    pub search: Option<String>,
    /// Sort Z to A instead of the configured direction.
    pub descending: bool,
    /// Shuffle unchecked entries.
    pub shuffle: bool,
    /// Fields to show.
    pub display: Option<DisplayMode>,
}

impl ListOptions {
    /// Builds the view state on top of the workspace defaults.
    #[must_use]
    pub fn view(&self, config: &Config) -> ViewState {
        let mut view = ViewState::from_config(config);
        if self.descending {
            view.sort_ascending = false;
        }
        if self.shuffle {
            view.shuffle();
        }
        view.set_filters(self.filters.iter().copied());
        if let Some(search) = &self.search {
            view.set_search(search.as_str());
        }
        if let Some(display) = self.display {
            view.display_mode = display;
        }
        view
    }
}

/// Prints the display list.
///
/// # Errors
///
/// Returns an error if the workspace is not initialized or the store or
/// configuration cannot be read.
pub fn execute(
    root: Option<&Path>,
    options: &ListOptions,
    formatter: &dyn OutputFormatter,
) -> Result<Vec<Entry>> {
    let workspace = Workspace::discover(root)?;
    let config = workspace.load_config()?;
    let lifecycle = workspace.open_lifecycle()?;

    let view = options.view(&config);
    let entries = lifecycle.display_list(&view)?;
    println!("{}", formatter.format_list(&entries, view.display_mode));

    Ok(entries)
}
