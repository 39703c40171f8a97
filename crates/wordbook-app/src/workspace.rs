// Rust guideline compliant 2026-10-19

//! Workspace discovery and path management utilities.

use crate::error::{AppError, Result};
use crate::lifecycle::EntryLifecycle;
use std::path::{Path, PathBuf};
use tracing::info;
use wordbook_core::{migrate_legacy, Config, JsonlStore};

/// Name of the data directory inside a workspace root.
pub const DATA_DIR: &str = ".wordbook";

/// Path metadata for a Wordbook workspace.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    data_dir: PathBuf,
    entries_path: PathBuf,
    legacy_path: PathBuf,
    config_path: PathBuf,
}

impl Workspace {
    /// Resolves workspace paths without checking that they exist.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the current directory cannot
    /// be resolved.
    pub fn at(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let data_dir = root.join(DATA_DIR);

        Ok(Self {
            root,
            entries_path: data_dir.join("entries.jsonl"),
            legacy_path: data_dir.join("words.json"),
            config_path: data_dir.join("config.toml"),
            data_dir,
        })
    }

    /// Discovers an initialized workspace starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `root` - Optional workspace root to pin discovery
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The root cannot be resolved
    /// - The `.wordbook` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let workspace = Self::at(root)?;
        if !workspace.data_dir.exists() {
            return Err(AppError::NotInitialized {
                path: workspace.data_dir.clone(),
            });
        }
        Ok(workspace)
    }

    /// Creates the data directory, an empty store and a default config.
    ///
    /// Existing files are left untouched. Returns true if anything was created.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be written.
    pub fn init(&self) -> Result<bool> {
        let mut created = false;

        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)?;
            created = true;
        }

        if !self.entries_path.exists() {
            std::fs::write(&self.entries_path, "")?;
            created = true;
        }

        if !self.config_path.exists() {
            Config::default().save(&self.data_dir)?;
            created = true;
        }

        if created {
            info!(path = %self.data_dir.display(), "initialized workspace");
        }
        Ok(created)
    }

    /// Returns the workspace root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.wordbook` directory path.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_path()
    }

    /// Returns the entries JSONL path.
    #[must_use]
    pub fn entries_path(&self) -> &Path {
        self.entries_path.as_path()
    }

    /// Returns the path of the legacy single-document store.
    #[must_use]
    pub fn legacy_path(&self) -> &Path {
        self.legacy_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the entry store, importing any legacy store first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be initialized or the legacy file
    /// exists but cannot be parsed.
    pub fn open_store(&self) -> Result<JsonlStore> {
        let mut store = JsonlStore::new(self.entries_path.clone())?;
        migrate_legacy(&mut store, &self.legacy_path)?;
        Ok(store)
    }

    /// Opens the store and loads the working set.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened or read.
    pub fn open_lifecycle(&self) -> Result<EntryLifecycle<JsonlStore>> {
        EntryLifecycle::open(self.open_store()?)
    }

    /// Loads workspace configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.data_dir())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wordbook_core::EntryStore;

    #[test]
    fn test_discover_requires_init() {
        let temp = TempDir::new().unwrap();
        let err = Workspace::discover(Some(temp.path())).unwrap_err();
        assert!(matches!(err, AppError::NotInitialized { .. }));
    }

    #[test]
    fn test_init_then_discover() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::at(Some(temp.path())).unwrap();
        assert!(workspace.init().unwrap());
        assert!(!workspace.init().unwrap());

        let found = Workspace::discover(Some(temp.path())).unwrap();
        assert!(found.entries_path().exists());
        assert!(found.config_path().exists());
        assert!(found.open_store().unwrap().get_all().unwrap().is_empty());
    }

    #[test]
    fn test_open_store_migrates_legacy_file() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::at(Some(temp.path())).unwrap();
        workspace.init().unwrap();
        std::fs::write(
            workspace.legacy_path(),
            r#"[{"id": 9, "text": "dog", "meaning": "a pet", "subject": "noun", "checked": true}]"#,
        )
        .unwrap();

        let store = workspace.open_store().unwrap();
        let entries = store.get_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "dog");
        assert!(entries[0].checked);
        assert!(!workspace.legacy_path().exists());
    }
}
