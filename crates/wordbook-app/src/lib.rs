// Rust guideline compliant 2026-10-19

//! Shared application services for Wordbook.
//!
//! This crate sits between the core data layer and any user interface. It
//! provides the view pipeline that turns stored entries into a display list,
//! the entry lifecycle that keeps the store and the working set consistent,
//! the multiple-choice quiz engine, workspace discovery, and standardized
//! response envelopes.

pub mod error;
pub mod lifecycle;
pub mod quiz;
pub mod response;
pub mod view;
pub mod workspace;

pub use error::{AppError, ErrorCode, Result};
pub use lifecycle::{ClearOutcome, EntryLifecycle, Removal};
pub use quiz::{Answer, AnswerOutcome, Choice, Question, QuizEngine, QuizSettings, QuizSummary};
pub use response::Envelope;
pub use view::{compute_display_list, compute_display_list_with_rng, DisplayMode, ViewState};
pub use workspace::Workspace;
