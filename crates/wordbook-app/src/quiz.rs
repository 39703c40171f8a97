// Rust guideline compliant 2026-10-19

//! Multiple-choice quiz engine.
//!
//! A session snapshots the store, asks up to `max_questions` questions and
//! records each answer as the entry's learned state. Choices for a question
//! are drawn from unused entries sharing the answer's subject.

use crate::error::{AppError, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use wordbook_core::{
    Config, Entry, EntryId, EntryPatch, EntryStore, Error as CoreError, QuizPhase,
};

/// Limits applied to a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    /// Upper bound on questions per session.
    pub max_questions: usize,
    /// Upper bound on answer choices per question, excluding skip.
    pub max_choices: usize,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            max_questions: 10,
            max_choices: 4,
        }
    }
}

impl QuizSettings {
    /// Reads the quiz limits from a workspace configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_questions: config.quiz_max_questions,
            max_choices: config.quiz_max_choices,
        }
    }
}

/// One answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Entry the meaning belongs to.
    pub entry_id: EntryId,
    /// Meaning shown to the user.
    pub meaning: String,
}

impl From<&Entry> for Choice {
    fn from(entry: &Entry) -> Self {
        Self {
            entry_id: entry.id,
            meaning: entry.meaning.clone(),
        }
    }
}

/// The user's response to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Index into [`Question::choices`].
    Choice(usize),
    /// Skip the question; counts as incorrect.
    Skip,
}

/// A question awaiting or holding an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// 1-based question number.
    pub number: usize,
    /// Answer key.
    pub word: Entry,
    /// Shuffled options; exactly one belongs to `word`.
    pub choices: Vec<Choice>,
    /// Whether input for this question is closed.
    pub answered: bool,
}

impl Question {
    /// Returns true if the answer selects the answer key.
    #[must_use]
    pub fn is_correct(&self, answer: Answer) -> bool {
        match answer {
            Answer::Choice(idx) => self
                .choices
                .get(idx)
                .is_some_and(|c| c.entry_id == self.word.id),
            Answer::Skip => false,
        }
    }

    /// Returns the index of the correct choice.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.choices.iter().position(|c| c.entry_id == self.word.id)
    }
}

/// Result of answering a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    /// Whether the answer was correct.
    pub correct: bool,
    /// The answer key with its updated learned state.
    pub word: Entry,
    /// Whether the session finished with this answer.
    pub finished: bool,
}

/// Final score of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    /// Correct answers.
    pub score: usize,
    /// Planned number of questions.
    pub total_questions: usize,
    /// Questions actually answered.
    pub answered: usize,
    /// `round(100 * score / total_questions)`.
    pub accuracy: u32,
}

#[derive(Debug)]
struct QuizSession {
    pool: Vec<Entry>,
    used_ids: HashSet<EntryId>,
    score: usize,
    total_questions: usize,
    current_index: usize,
    question: Option<Question>,
    tested: Vec<Entry>,
}

impl QuizSession {
    fn has_unused(&self) -> bool {
        self.pool.iter().any(|e| !self.used_ids.contains(&e.id))
    }
}

/// Drives quiz sessions through `Idle -> Running -> Finished`.
#[derive(Debug)]
pub struct QuizEngine {
    phase: QuizPhase,
    settings: QuizSettings,
    session: Option<QuizSession>,
    rng: SmallRng,
}

impl QuizEngine {
    /// Creates an idle engine seeded from the OS.
    #[must_use]
    pub fn new(settings: QuizSettings) -> Self {
        Self::with_rng(settings, SmallRng::from_entropy())
    }

    /// Creates an idle engine with a fixed seed for reproducible sessions.
    #[must_use]
    pub fn with_seed(settings: QuizSettings, seed: u64) -> Self {
        Self::with_rng(settings, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(settings: QuizSettings, rng: SmallRng) -> Self {
        Self {
            phase: QuizPhase::Idle,
            settings,
            session: None,
            rng,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Returns the configured limits.
    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// Returns the current question, answered or not.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref().and_then(|s| s.question.as_ref())
    }

    /// Returns the correct-answer count of the session.
    #[must_use]
    pub fn score(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.score)
    }

    /// Returns the planned number of questions.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.total_questions)
    }

    /// Returns the number of answered questions.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.current_index)
    }

    /// Returns tested entries, most recent first.
    #[must_use]
    pub fn tested(&self) -> &[Entry] {
        self.session
            .as_ref()
            .map(|s| s.tested.as_slice())
            .unwrap_or_default()
    }

    /// Starts a new session, discarding any previous one.
    ///
    /// # Errors
    ///
    /// Returns an empty-collection error if the store has no entries, or a
    /// storage error. The engine stays idle in both cases.
    pub fn start<S: EntryStore + ?Sized>(&mut self, store: &S) -> Result<Question> {
        self.reset();

        let pool = store.get_all()?;
        if pool.is_empty() {
            return Err(AppError::EmptyCollection(
                "No entries registered".to_string(),
            ));
        }

        let total_questions = self.settings.max_questions.min(pool.len());
        self.session = Some(QuizSession {
            pool,
            used_ids: HashSet::new(),
            score: 0,
            total_questions,
            current_index: 0,
            question: None,
            tested: Vec::new(),
        });
        self.phase.transition(QuizPhase::Running)?;
        info!(total_questions, "started quiz");

        self.generate_question()
            .ok_or_else(|| AppError::EmptyCollection("No entries registered".to_string()))
    }

    /// Answers the current question and records the result in the store.
    ///
    /// The store is written before any session state changes; if the write
    /// fails the question stays open. An answer key deleted mid-session is
    /// scored without a store write.
    ///
    /// # Errors
    ///
    /// Returns an error if no question is awaiting an answer, the choice index
    /// is out of range, or the store write fails.
    pub fn answer<S: EntryStore + ?Sized>(
        &mut self,
        store: &mut S,
        answer: Answer,
    ) -> Result<AnswerOutcome> {
        if self.phase != QuizPhase::Running {
            return Err(CoreError::InvalidTransition("No quiz is running".to_string()).into());
        }

        let session = self
            .session
            .as_mut()
            .ok_or_else(|| CoreError::InvalidTransition("No quiz is running".to_string()))?;

        let question = session
            .question
            .as_mut()
            .filter(|q| !q.answered)
            .ok_or_else(|| {
                CoreError::InvalidTransition("No question is awaiting an answer".to_string())
            })?;

        if let Answer::Choice(idx) = answer {
            if idx >= question.choices.len() {
                return Err(AppError::InvalidInput(format!(
                    "Choice {} is out of range (1-{})",
                    idx + 1,
                    question.choices.len()
                )));
            }
        }

        let correct = question.is_correct(answer);
        let word = match store.update(question.word.id, &EntryPatch::checked(correct)) {
            Ok(updated) => updated,
            Err(CoreError::NotFound(id)) => {
                warn!(id, "quiz entry vanished before answer was recorded");
                Entry {
                    checked: correct,
                    ..question.word.clone()
                }
            }
            Err(err) => return Err(err.into()),
        };

        question.answered = true;
        question.word = word.clone();
        if correct {
            session.score += 1;
        }
        session.tested.insert(0, word.clone());
        session.current_index += 1;

        let finished =
            session.current_index >= session.total_questions || !session.has_unused();
        debug!(
            id = word.id,
            correct,
            index = session.current_index,
            "answered quiz question"
        );

        if finished {
            self.phase.transition(QuizPhase::Finished)?;
            info!(score = session.score, "finished quiz");
        }

        Ok(AnswerOutcome {
            correct,
            word,
            finished,
        })
    }

    /// Advances to the next question after an answer.
    ///
    /// Returns `None` and finishes the session if no question can be built.
    ///
    /// # Errors
    ///
    /// Returns an error if no quiz is running (for example after a reset
    /// cancelled a pending advance) or the current question is unanswered.
    pub fn next_question(&mut self) -> Result<Option<Question>> {
        if self.phase != QuizPhase::Running {
            return Err(CoreError::InvalidTransition("No quiz is running".to_string()).into());
        }

        let pending = self.current_question().is_some_and(|q| !q.answered);
        if pending {
            return Err(CoreError::InvalidTransition(
                "Current question has not been answered".to_string(),
            )
            .into());
        }

        match self.generate_question() {
            Some(question) => Ok(Some(question)),
            None => {
                self.phase.transition(QuizPhase::Finished)?;
                Ok(None)
            }
        }
    }

    /// Flips the learned state of a tested entry.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the entry was not tested in this session,
    /// or a storage error.
    pub fn toggle_tested<S: EntryStore + ?Sized>(
        &mut self,
        store: &mut S,
        id: EntryId,
    ) -> Result<Entry> {
        let session = self
            .session
            .as_mut()
            .ok_or(AppError::Core(CoreError::NotFound(id)))?;
        let idx = session
            .tested
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::Core(CoreError::NotFound(id)))?;

        let checked = !session.tested[idx].checked;
        let updated = store.update(id, &EntryPatch::checked(checked))?;
        session.tested[idx] = updated.clone();
        Ok(updated)
    }

    /// Returns the summary of a finished session.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        if self.phase != QuizPhase::Finished {
            return None;
        }
        let session = self.session.as_ref()?;
        Some(QuizSummary {
            score: session.score,
            total_questions: session.total_questions,
            answered: session.current_index,
            accuracy: accuracy(session.score, session.total_questions),
        })
    }

    /// Discards the session and returns to idle.
    pub fn reset(&mut self) {
        self.session = None;
        self.phase = QuizPhase::Idle;
    }

    fn generate_question(&mut self) -> Option<Question> {
        let session = self.session.as_mut()?;
        if session.current_index >= session.total_questions {
            return None;
        }

        let unused: Vec<&Entry> = session
            .pool
            .iter()
            .filter(|e| !session.used_ids.contains(&e.id))
            .collect();
        let word = (*unused.choose(&mut self.rng)?).clone();

        let mut distractors: Vec<&Entry> = unused
            .iter()
            .copied()
            .filter(|e| e.subject == word.subject && e.id != word.id)
            .collect();
        let choice_count = self.settings.max_choices.max(1).min(distractors.len() + 1);
        distractors.shuffle(&mut self.rng);
        distractors.truncate(choice_count - 1);

        let mut choices: Vec<Choice> = distractors.into_iter().map(Choice::from).collect();
        choices.push(Choice::from(&word));
        choices.shuffle(&mut self.rng);

        session.used_ids.insert(word.id);
        let question = Question {
            number: session.current_index + 1,
            word,
            choices,
            answered: false,
        };
        session.question = Some(question.clone());
        Some(question)
    }
}

/// Percentage of correct answers, rounded half away from zero.
fn accuracy(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score * 200 + total) / (total * 2)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_rounding() {
        assert_eq!(accuracy(1, 3), 33);
        assert_eq!(accuracy(2, 3), 67);
        assert_eq!(accuracy(1, 8), 13);
        assert_eq!(accuracy(3, 3), 100);
        assert_eq!(accuracy(0, 0), 0);
    }

    #[test]
    fn test_question_correctness() {
        let word = Entry {
            id: 2,
            text: "run".to_string(),
            meaning: "to move fast".to_string(),
            subject: wordbook_core::Subject::IntransitiveVerb,
            checked: false,
        };
        let question = Question {
            number: 1,
            choices: vec![
                Choice {
                    entry_id: 5,
                    meaning: "to sleep".to_string(),
                },
                Choice::from(&word),
            ],
            word,
            answered: false,
        };
        assert!(question.is_correct(Answer::Choice(1)));
        assert!(!question.is_correct(Answer::Choice(0)));
        assert!(!question.is_correct(Answer::Choice(9)));
        assert!(!question.is_correct(Answer::Skip));
        assert_eq!(question.correct_index(), Some(1));
    }
}
