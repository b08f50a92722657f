use std::collections::HashSet;

use python_quiz::{
    Config, Label, NewQuestion, QuestionStore, Quiz, QuizError, RoundEngine, RoundState,
    SqliteQuestionStore, Verdict, sample_questions,
};

fn power_question() -> NewQuestion {
    NewQuestion {
        text: "What is 2**3?".to_string(),
        options: ["6", "8", "9", "12"].map(String::from),
        correct_label: Label::B,
        explanation: Some("2 to the power of 3 is 8.".to_string()),
    }
}

fn engine_over(questions: &[NewQuestion]) -> RoundEngine<SqliteQuestionStore> {
    let mut store = SqliteQuestionStore::open_in_memory().unwrap();
    store.initialize().unwrap();
    store.seed_if_empty(questions).unwrap();
    RoundEngine::new(store)
}

#[test]
fn correct_answer_then_round_is_consumed() {
    let mut engine = engine_over(&[power_question()]);

    let view = engine.start_round().unwrap();
    assert_eq!(view.text, "What is 2**3?");
    let labels: Vec<Label> = view.options.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, Label::ALL);

    let verdict = engine.submit_answer("B").unwrap();
    assert_eq!(
        verdict,
        Verdict {
            is_correct: true,
            correct_label: Label::B,
            explanation: Some("2 to the power of 3 is 8.".to_string()),
        }
    );

    assert!(matches!(
        engine.submit_answer("B"),
        Err(QuizError::NoActiveRound)
    ));
}

#[test]
fn incorrect_answer_reports_the_right_one() {
    let mut engine = engine_over(&[power_question()]);
    engine.start_round().unwrap();

    let verdict = engine.submit_answer("A").unwrap();
    assert!(!verdict.is_correct);
    assert_eq!(verdict.correct_label, Label::B);
    assert_eq!(engine.state(), RoundState::Idle);
}

#[test]
fn invalid_label_is_rejected_without_losing_the_round() {
    let mut engine = engine_over(&[power_question()]);
    assert!(matches!(
        engine.submit_answer("Z"),
        Err(QuizError::NoActiveRound)
    ));

    engine.start_round().unwrap();
    assert!(matches!(
        engine.submit_answer("Z"),
        Err(QuizError::InvalidLabel(_))
    ));
    assert_eq!(engine.state(), RoundState::AwaitingAnswer);
}

#[test]
fn seeded_questions_satisfy_content_rules() {
    let mut engine = engine_over(&sample_questions().unwrap());

    let mut texts = HashSet::new();
    for _ in 0..100 {
        let view = engine.start_round().unwrap();
        assert!(view.options.iter().all(|(_, text)| !text.is_empty()));

        let verdict = engine.submit(Label::A).unwrap();
        assert!(Label::ALL.contains(&verdict.correct_label));
        texts.insert(view.text);
    }
    assert_eq!(texts.len(), 5);
}

#[test]
fn database_is_seeded_once_across_launches() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        database: dir.path().join("quiz.db"),
        ..Config::default()
    };

    for _ in 0..3 {
        let quiz = Quiz::open(&config).unwrap();
        assert_eq!(quiz.app().engine().store().count().unwrap(), 5);
    }

    let store = SqliteQuestionStore::open(&config.database).unwrap();
    assert_eq!(store.count().unwrap(), 5);
    store.close().unwrap();
}

#[test]
fn custom_question_file_seeds_a_fresh_database() {
    let dir = tempfile::tempdir().unwrap();
    let questions_path = dir.path().join("questions.json");
    std::fs::write(
        &questions_path,
        serde_json::to_string(&vec![power_question()]).unwrap(),
    )
    .unwrap();

    let config = Config {
        database: dir.path().join("quiz.db"),
        questions: Some(questions_path),
        ..Config::default()
    };

    let quiz = Quiz::open(&config).unwrap();
    let engine = quiz.app().engine();
    assert_eq!(engine.state(), RoundState::Idle);
    assert_eq!(engine.store().count().unwrap(), 1);

    let question = engine.store().fetch_random_question().unwrap();
    assert_eq!(question.text, "What is 2**3?");
    assert_eq!(question.correct_label, Label::B);
}
