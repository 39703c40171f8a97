// Rust guideline compliant 2026-10-19

//! Finite State Machine module for quiz sessions.
//!
//! The quiz FSM enforces the following transitions:
//!
//! - Any → Idle (reset)
//! - Idle → Running (start)
//! - Running → Running (restart)
//! - Finished → Running (restart)
//! - Running → Finished

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    /// No session is active.
    #[default]
    Idle,
    /// Questions are being asked.
    Running,
    /// The session ended and its score is available.
    Finished,
}

impl QuizPhase {
    /// Checks if a transition to the target phase is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not in the valid transition set.
    pub fn can_transition_to(&self, target: QuizPhase) -> Result<()> {
        match (self, target) {
            (_, QuizPhase::Idle) => Ok(()),
            (_, QuizPhase::Running) => Ok(()),
            (QuizPhase::Running, QuizPhase::Finished) => Ok(()),
            (from, to) => Err(Error::InvalidTransition(format!(
                "Cannot transition quiz from {:?} to {:?}",
                from, to
            ))),
        }
    }

    /// Returns the list of valid target phases for the current phase.
    #[must_use]
    pub fn valid_transitions(&self) -> Vec<QuizPhase> {
        let mut transitions = vec![QuizPhase::Idle, QuizPhase::Running];
        if *self == QuizPhase::Running {
            transitions.push(QuizPhase::Finished);
        }
        transitions
    }

    /// Performs a checked transition in place.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the phase unchanged if the transition is invalid.
    pub fn transition(&mut self, target: QuizPhase) -> Result<()> {
        self.can_transition_to(target)?;
        *self = target;
        Ok(())
    }
}
