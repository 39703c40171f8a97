// Rust guideline compliant 2026-10-19

use proptest::prelude::*;
use std::collections::HashSet;
use tempfile::TempDir;
use wordbook_app::{Answer, QuizEngine, QuizSettings};
use wordbook_core::{EntryDraft, EntryStore, JsonlStore, QuizPhase, Subject};

fn arb_subjects() -> impl Strategy<Value = Vec<Subject>> {
    prop::collection::vec(
        prop::sample::select(vec![Subject::Noun, Subject::Adjective, Subject::Idiom]),
        1..16,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_questions_follow_choice_rules(
        subjects in arb_subjects(),
        seed in any::<u64>(),
        answers in prop::collection::vec(any::<bool>(), 16),
    ) {
        let temp = TempDir::new().unwrap();
        let mut store = JsonlStore::new(temp.path().join("entries.jsonl")).unwrap();
        for (idx, subject) in subjects.iter().enumerate() {
            store
                .create(&EntryDraft::new(format!("w{idx}"), format!("m{idx}"), *subject))
                .unwrap();
        }
        let all = store.get_all().unwrap();

        let mut engine = QuizEngine::with_seed(QuizSettings::default(), seed);
        let mut question = Some(engine.start(&store).unwrap());
        let mut used = HashSet::new();
        let mut expected_score = 0;

        for answer_correctly in &answers {
            let Some(q) = question.take() else { break };

            prop_assert!(!q.choices.is_empty());
            prop_assert!(q.choices.len() <= 4);
            prop_assert!(q.correct_index().is_some());
            prop_assert!(!used.contains(&q.word.id));

            let distinct: HashSet<_> = q.choices.iter().map(|c| c.entry_id).collect();
            prop_assert_eq!(distinct.len(), q.choices.len());
            for choice in &q.choices {
                prop_assert!(!used.contains(&choice.entry_id));
                let entry = all.iter().find(|e| e.id == choice.entry_id).unwrap();
                prop_assert_eq!(entry.subject, q.word.subject);
            }
            used.insert(q.word.id);

            let answer = if *answer_correctly {
                expected_score += 1;
                Answer::Choice(q.correct_index().unwrap())
            } else {
                Answer::Skip
            };
            let outcome = engine.answer(&mut store, answer).unwrap();
            prop_assert_eq!(store.get(q.word.id).unwrap().checked, *answer_correctly);

            if !outcome.finished {
                question = engine.next_question().unwrap();
            }
        }

        prop_assert_eq!(engine.phase(), QuizPhase::Finished);
        let summary = engine.summary().unwrap();
        prop_assert_eq!(summary.total_questions, subjects.len().min(10));
        prop_assert_eq!(summary.answered, summary.total_questions);
        prop_assert_eq!(summary.score, expected_score);
        let expected_accuracy =
            (100.0 * expected_score as f64 / summary.total_questions as f64).round() as u32;
        prop_assert_eq!(summary.accuracy, expected_accuracy);
    }
}
