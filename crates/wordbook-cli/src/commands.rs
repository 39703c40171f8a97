// Rust guideline compliant 2026-10-19

//! Command implementations for the Wordbook CLI.

pub mod add;
pub mod clear;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod quiz;
pub mod remove;
pub mod toggle;
