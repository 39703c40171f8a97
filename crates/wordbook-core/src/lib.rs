// Rust guideline compliant 2026-10-19

//! Wordbook Core Library
//!
//! This crate provides the foundational components for the Wordbook vocabulary manager:
//! - Data models (Entry, EntryDraft, EntryPatch, Subject)
//! - Entry store contract and the durable JSONL implementation
//! - One-shot migration of the legacy flat word list
//! - CSV codec for import and export
//! - Quiz phase state machine
//! - Configuration and error types

pub mod codec;
pub mod config;
pub mod error;
pub mod fsm;
pub mod migrate;
pub mod models;
pub mod storage;

pub use codec::{export_csv, export_file_name, import_csv, CsvColumns, CsvImport};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fsm::QuizPhase;
pub use migrate::migrate_legacy;
pub use models::{Entry, EntryDraft, EntryId, EntryPatch, Subject};
pub use storage::{EntryStore, JsonlStore};
