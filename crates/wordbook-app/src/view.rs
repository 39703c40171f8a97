// Rust guideline compliant 2026-10-19

//! View pipeline: filtering, searching and ordering entries for display.

use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use wordbook_core::{Config, Entry, Subject};

/// Which entry fields a rendering adapter should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Word and meaning.
    #[default]
    Both,
    /// Word only, meaning hidden.
    WordOnly,
    /// Meaning only, word hidden.
    MeaningOnly,
}

impl DisplayMode {
    /// Returns the next mode in the rotation `both -> word_only -> meaning_only`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            DisplayMode::Both => DisplayMode::WordOnly,
            DisplayMode::WordOnly => DisplayMode::MeaningOnly,
            DisplayMode::MeaningOnly => DisplayMode::Both,
        }
    }

    /// Returns true if the word column is visible.
    #[must_use]
    pub fn shows_text(self) -> bool {
        self != DisplayMode::MeaningOnly
    }

    /// Returns true if the meaning column is visible.
    #[must_use]
    pub fn shows_meaning(self) -> bool {
        self != DisplayMode::WordOnly
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "both" => Ok(DisplayMode::Both),
            "word_only" | "word-only" | "word" => Ok(DisplayMode::WordOnly),
            "meaning_only" | "meaning-only" | "meaning" => Ok(DisplayMode::MeaningOnly),
            other => Err(format!("Invalid display mode: {other}")),
        }
    }
}

/// Ephemeral view settings owned by a UI session.
///
/// Sort and shuffle are mutually exclusive: toggling the sort direction
/// clears shuffle, and shuffling keeps the sort direction for later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Subjects to keep; empty keeps every subject.
    pub active_filters: BTreeSet<Subject>,
    /// Sort direction by text when not shuffled.
    pub sort_ascending: bool,
    /// Randomize the unchecked entries instead of sorting them.
    pub shuffled: bool,
    /// Case-insensitive search keyword; blank disables search.
    pub search_keyword: String,
    /// Fields to render.
    pub display_mode: DisplayMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_filters: BTreeSet::new(),
            sort_ascending: true,
            shuffled: false,
            search_keyword: String::new(),
            display_mode: DisplayMode::default(),
        }
    }
}

impl ViewState {
    /// Creates the default view for a workspace configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            sort_ascending: config.sort_ascending,
            ..Self::default()
        }
    }

    /// Flips the sort direction and leaves shuffle mode.
    pub fn toggle_sort(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        self.shuffled = false;
    }

    /// Enters shuffle mode.
    pub fn shuffle(&mut self) {
        self.shuffled = true;
    }

    /// Replaces the active subject filters.
    pub fn set_filters(&mut self, subjects: impl IntoIterator<Item = Subject>) {
        self.active_filters = subjects.into_iter().collect();
    }

    /// Removes every subject filter.
    pub fn clear_filters(&mut self) {
        self.active_filters.clear();
    }

    /// Sets the search keyword.
    pub fn set_search(&mut self, keyword: impl Into<String>) {
        self.search_keyword = keyword.into();
    }

    /// Advances the display mode rotation.
    pub fn rotate_display_mode(&mut self) {
        self.display_mode = self.display_mode.next();
    }

    fn normalized_keyword(&self) -> Option<String> {
        let keyword = self.search_keyword.trim().to_lowercase();
        (!keyword.is_empty()).then_some(keyword)
    }
}

/// Derives the display list using a thread-local random source for shuffle.
///
/// # Arguments
///
/// * `entries` - Current snapshot of every stored entry
/// * `view` - View settings
///
/// # Returns
///
/// Entries ordered as: unchecked entries, then checked entries. When a search
/// is active, prefix matches lead each of those two groups.
#[must_use]
pub fn compute_display_list(entries: Vec<Entry>, view: &ViewState) -> Vec<Entry> {
    compute_display_list_with_rng(entries, view, &mut rand::thread_rng())
}

/// Derives the display list with a caller-provided random source.
///
/// Without shuffle the result depends only on `entries` and `view`.
#[must_use]
pub fn compute_display_list_with_rng<R: Rng + ?Sized>(
    entries: Vec<Entry>,
    view: &ViewState,
    rng: &mut R,
) -> Vec<Entry> {
    let keyword = view.normalized_keyword();
    let retained = apply_filters(entries, view, keyword.as_deref());

    let (unchecked, checked): (Vec<Entry>, Vec<Entry>) =
        retained.into_iter().partition(|e| !e.checked);

    let mut ordered = Vec::with_capacity(unchecked.len() + checked.len());
    for (group, shuffle) in [(unchecked, view.shuffled), (checked, false)] {
        let (mut leading, mut rest) = match keyword.as_deref() {
            Some(keyword) => group.into_iter().partition(|e| is_prefix_match(e, keyword)),
            None => (group, Vec::new()),
        };

        for bucket in [&mut leading, &mut rest] {
            if shuffle {
                bucket.shuffle(rng);
            } else {
                sort_by_text(bucket, view.sort_ascending);
            }
        }

        ordered.append(&mut leading);
        ordered.append(&mut rest);
    }

    ordered
}

fn apply_filters(entries: Vec<Entry>, view: &ViewState, keyword: Option<&str>) -> Vec<Entry> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let predicate = |e: &Entry| {
        if !view.active_filters.is_empty() && !view.active_filters.contains(&e.subject) {
            return false;
        }

        if let Some(keyword) = keyword {
            if !e.text.to_lowercase().contains(keyword)
                && !e.meaning.to_lowercase().contains(keyword)
            {
                return false;
            }
        }

        true
    };

    if entries.len() >= PARALLEL_THRESHOLD {
        entries.into_par_iter().filter(|e| predicate(e)).collect()
    } else {
        entries.into_iter().filter(predicate).collect()
    }
}

fn is_prefix_match(entry: &Entry, keyword: &str) -> bool {
    entry.text.to_lowercase().starts_with(keyword)
        || entry.meaning.to_lowercase().starts_with(keyword)
}

/// Case-insensitive text order with raw text and id as tie breakers.
fn compare_text(a: &Entry, b: &Entry) -> Ordering {
    a.text
        .to_lowercase()
        .cmp(&b.text.to_lowercase())
        .then_with(|| a.text.cmp(&b.text))
        .then_with(|| a.id.cmp(&b.id))
}

fn sort_by_text(entries: &mut [Entry], ascending: bool) {
    if ascending {
        entries.sort_by(compare_text);
    } else {
        entries.sort_by(|a, b| compare_text(b, a));
    }
}
