// Rust guideline compliant 2026-10-19

use tempfile::TempDir;
use wordbook_app::{Answer, AppError, ErrorCode, QuizEngine, QuizSettings};
use wordbook_core::{EntryDraft, EntryId, EntryStore, JsonlStore, QuizPhase, Subject};

fn store_with(temp: &TempDir, words: &[(&str, &str, Subject)]) -> (JsonlStore, Vec<EntryId>) {
    let mut store = JsonlStore::new(temp.path().join("entries.jsonl")).unwrap();
    let ids = words
        .iter()
        .map(|(text, meaning, subject)| {
            store
                .create(&EntryDraft::new(*text, *meaning, *subject))
                .unwrap()
        })
        .collect();
    (store, ids)
}

fn three_nouns(temp: &TempDir) -> (JsonlStore, Vec<EntryId>) {
    store_with(
        temp,
        &[
            ("cat", "a feline", Subject::Noun),
            ("dog", "a canine", Subject::Noun),
            ("cow", "a bovine", Subject::Noun),
        ],
    )
}

fn wrong_index(engine: &QuizEngine) -> usize {
    let question = engine.current_question().unwrap();
    let correct = question.correct_index().unwrap();
    (correct + 1) % question.choices.len()
}

#[test]
fn test_start_with_empty_store_fails() {
    let temp = TempDir::new().unwrap();
    let (store, _) = store_with(&temp, &[]);
    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 1);

    let err = engine.start(&store).unwrap_err();
    assert_eq!(err.code(), ErrorCode::EmptyCollection);
    assert_eq!(engine.phase(), QuizPhase::Idle);
}

#[test]
fn test_three_same_subject_entries_full_session() {
    let temp = TempDir::new().unwrap();
    let (mut store, _) = three_nouns(&temp);
    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 7);

    let first = engine.start(&store).unwrap();
    assert_eq!(engine.phase(), QuizPhase::Running);
    assert_eq!(engine.total_questions(), 3);
    assert_eq!(first.number, 1);
    assert_eq!(first.choices.len(), 3);

    // Correct answer.
    let correct = first.correct_index().unwrap();
    let outcome = engine.answer(&mut store, Answer::Choice(correct)).unwrap();
    assert!(outcome.correct);
    assert!(outcome.word.checked);
    assert!(!outcome.finished);
    assert!(store.get(first.word.id).unwrap().checked);

    // Wrong answer.
    let second = engine.next_question().unwrap().unwrap();
    assert_eq!(second.choices.len(), 2);
    let wrong = wrong_index(&engine);
    let outcome = engine.answer(&mut store, Answer::Choice(wrong)).unwrap();
    assert!(!outcome.correct);
    assert!(!store.get(second.word.id).unwrap().checked);

    // Skip counts as incorrect.
    let third = engine.next_question().unwrap().unwrap();
    assert_eq!(third.choices.len(), 1);
    let outcome = engine.answer(&mut store, Answer::Skip).unwrap();
    assert!(!outcome.correct);
    assert!(outcome.finished);

    assert_eq!(engine.phase(), QuizPhase::Finished);
    let summary = engine.summary().unwrap();
    assert_eq!(summary.score, 1);
    assert_eq!(summary.total_questions, 3);
    assert_eq!(summary.answered, 3);
    assert_eq!(summary.accuracy, 33);
}

#[test]
fn test_total_questions_capped_by_settings() {
    let temp = TempDir::new().unwrap();
    let words: Vec<(String, String)> = (0..15)
        .map(|i| (format!("word{i}"), format!("meaning{i}")))
        .collect();
    let rows: Vec<(&str, &str, Subject)> = words
        .iter()
        .map(|(t, m)| (t.as_str(), m.as_str(), Subject::Noun))
        .collect();
    let (store, _) = store_with(&temp, &rows);

    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 3);
    let question = engine.start(&store).unwrap();
    assert_eq!(engine.total_questions(), 10);
    assert_eq!(question.choices.len(), 4);

    let small = QuizSettings {
        max_questions: 2,
        max_choices: 3,
    };
    let mut engine = QuizEngine::with_seed(small, 3);
    let question = engine.start(&store).unwrap();
    assert_eq!(engine.total_questions(), 2);
    assert_eq!(question.choices.len(), 3);
}

#[test]
fn test_choices_share_subject_with_answer() {
    let temp = TempDir::new().unwrap();
    let (store, _) = store_with(
        &temp,
        &[
            ("cat", "a feline", Subject::Noun),
            ("dog", "a canine", Subject::Noun),
            ("run", "to move fast", Subject::IntransitiveVerb),
            ("eat", "to consume", Subject::TransitiveVerb),
        ],
    );
    let all = store.get_all().unwrap();

    for seed in 0..20 {
        let mut engine = QuizEngine::with_seed(QuizSettings::default(), seed);
        let question = engine.start(&store).unwrap();
        for choice in &question.choices {
            let entry = all.iter().find(|e| e.id == choice.entry_id).unwrap();
            assert_eq!(entry.subject, question.word.subject);
        }
    }
}

#[test]
fn test_answer_requires_open_question() {
    let temp = TempDir::new().unwrap();
    let (mut store, _) = three_nouns(&temp);
    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 11);

    let err = engine.answer(&mut store, Answer::Skip).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);

    engine.start(&store).unwrap();
    engine.answer(&mut store, Answer::Skip).unwrap();
    let err = engine.answer(&mut store, Answer::Skip).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.current_index(), 1);
}

#[test]
fn test_next_question_requires_answer() {
    let temp = TempDir::new().unwrap();
    let (store, _) = three_nouns(&temp);
    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 5);
    engine.start(&store).unwrap();

    let err = engine.next_question().unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);
}

#[test]
fn test_out_of_range_choice_keeps_question_open() {
    let temp = TempDir::new().unwrap();
    let (mut store, _) = three_nouns(&temp);
    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 5);
    engine.start(&store).unwrap();

    let err = engine.answer(&mut store, Answer::Choice(9)).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(!engine.current_question().unwrap().answered);
    assert!(engine.answer(&mut store, Answer::Skip).is_ok());
}

#[test]
fn test_reset_cancels_pending_advance() {
    let temp = TempDir::new().unwrap();
    let (mut store, _) = three_nouns(&temp);
    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 9);
    engine.start(&store).unwrap();
    engine.answer(&mut store, Answer::Skip).unwrap();

    engine.reset();
    assert_eq!(engine.phase(), QuizPhase::Idle);
    assert!(engine.next_question().is_err());
    assert!(engine.current_question().is_none());
    assert!(engine.tested().is_empty());
}

#[test]
fn test_restart_discards_previous_session() {
    let temp = TempDir::new().unwrap();
    let (mut store, _) = three_nouns(&temp);
    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 9);
    let question = engine.start(&store).unwrap();
    let correct = question.correct_index().unwrap();
    engine.answer(&mut store, Answer::Choice(correct)).unwrap();

    let question = engine.start(&store).unwrap();
    assert_eq!(question.number, 1);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.current_index(), 0);
    assert!(engine.tested().is_empty());
}

#[test]
fn test_tested_history_most_recent_first_and_toggle() {
    let temp = TempDir::new().unwrap();
    let (mut store, _) = three_nouns(&temp);
    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 21);

    let first = engine.start(&store).unwrap();
    engine.answer(&mut store, Answer::Skip).unwrap();
    let second = engine.next_question().unwrap().unwrap();
    engine.answer(&mut store, Answer::Skip).unwrap();

    let tested: Vec<EntryId> = engine.tested().iter().map(|e| e.id).collect();
    assert_eq!(tested, vec![second.word.id, first.word.id]);

    let toggled = engine.toggle_tested(&mut store, first.word.id).unwrap();
    assert!(toggled.checked);
    assert!(store.get(first.word.id).unwrap().checked);
    assert!(engine.tested()[1].checked);

    let err = engine.toggle_tested(&mut store, 999).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_deleted_answer_key_still_scored() {
    let temp = TempDir::new().unwrap();
    let (mut store, _) = three_nouns(&temp);
    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 4);

    let question = engine.start(&store).unwrap();
    store.delete(question.word.id).unwrap();

    let correct = question.correct_index().unwrap();
    let outcome = engine.answer(&mut store, Answer::Choice(correct)).unwrap();
    assert!(outcome.correct);
    assert_eq!(engine.score(), 1);
    assert_eq!(store.get_all().unwrap().len(), 2);
}

#[test]
fn test_single_entry_quiz() {
    let temp = TempDir::new().unwrap();
    let (mut store, ids) = store_with(&temp, &[("so", "therefore", Subject::Adverb)]);
    let mut engine = QuizEngine::new(QuizSettings::default());

    let question = engine.start(&store).unwrap();
    assert_eq!(question.word.id, ids[0]);
    assert_eq!(question.choices.len(), 1);

    let outcome = engine.answer(&mut store, Answer::Choice(0)).unwrap();
    assert!(outcome.correct);
    assert!(outcome.finished);
    assert_eq!(engine.summary().unwrap().accuracy, 100);
}

#[test]
fn test_answer_for_deleted_entry_leaves_replacement_untouched() {
    let temp = TempDir::new().unwrap();
    let (mut store, ids) = store_with(&temp, &[("cat", "a feline", Subject::Noun)]);
    let mut engine = QuizEngine::with_seed(QuizSettings::default(), 9);

    let question = engine.start(&store).unwrap();
    store.delete(ids[0]).unwrap();
    let dog = store
        .create(&EntryDraft::new("dog", "a canine", Subject::Noun))
        .unwrap();
    assert_ne!(dog, ids[0]);

    let correct = question.correct_index().unwrap();
    assert!(engine.answer(&mut store, Answer::Choice(correct)).unwrap().correct);
    assert!(!store.get(dog).unwrap().checked);
}
