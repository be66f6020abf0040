use std::sync::Arc;

use quiz_core::model::{CorrectAnswer, Question, QuestionSet, SessionMode};
use quiz_core::time::fixed_clock;
use services::{QuizLoopError, QuizLoopService, QuizSession, SessionError, SessionEvent};
use storage::repository::Storage;

fn service() -> QuizLoopService {
    QuizLoopService::new(fixed_clock(), Storage::in_memory().question_store())
}

#[tokio::test]
async fn two_correct_answers_finish_without_review() {
    let service = service();
    service
        .import_questions(
            r#"[
                {"question": "Q1", "options": ["a", "b"], "correctAnswer": 1},
                {"question": "Q2", "options": ["a", "b"], "correctAnswer": 1}
            ]"#,
        )
        .await
        .unwrap();

    let mut session = QuizSession::with_seed(fixed_clock(), 42);
    let mut event = service.start_session(&mut session).await.unwrap();
    while let SessionEvent::QuestionPresented(_) = event {
        session.toggle_selection(1).unwrap();
        assert!(service.submit(&mut session).unwrap().correct);
        event = service.advance(&mut session).unwrap();
    }

    let SessionEvent::Finished(summary) = event else {
        panic!("expected the summary");
    };
    assert_eq!(summary.correct(), 2);
    assert_eq!(summary.incorrect(), 0);
    assert_eq!(summary.accuracy_percent(), 100);
    assert!(!summary.can_review());
    assert!(!service.is_ticking());

    let err = service.review_missed(&mut session).unwrap_err();
    assert!(matches!(
        err,
        QuizLoopError::Session(SessionError::NothingToReview)
    ));
}

#[tokio::test]
async fn missed_multi_answer_is_reviewed() {
    let service = service();
    let set = Arc::new(QuestionSet::new(vec![
        Question::new(
            "Which TWO?",
            vec!["a".into(), "b".into(), "c".into()],
            CorrectAnswer::multiple([0, 2]),
            None,
        )
        .unwrap(),
    ]));

    let mut session = QuizSession::with_seed(fixed_clock(), 1);
    service.start_with(&mut session, set).unwrap();
    session.toggle_selection(0).unwrap();
    let outcome = service.submit(&mut session).unwrap();
    assert!(!outcome.correct);
    assert_eq!(outcome.explanation, "No explanation provided.");

    let finished = service.advance(&mut session).unwrap();
    assert!(finished.is_finished());
    assert_eq!(session.missed(), &[0]);

    let SessionEvent::QuestionPresented(presented) = service.review_missed(&mut session).unwrap()
    else {
        panic!("expected a review question");
    };
    assert_eq!(presented.index, 0);
    assert_eq!(presented.mode, SessionMode::Review);
    assert!(presented.multi_answer);
    assert!(service.is_ticking());
}

#[tokio::test]
async fn malformed_item_is_dropped_on_import() {
    let service = service();
    let (set, report) = service
        .import_questions(
            r#"[
                {"question": "ok", "options": ["a", "b"], "correctAnswer": 0},
                {"question": "bad", "options": ["only"], "correctAnswer": 0}
            ]"#,
        )
        .await
        .unwrap();
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(set.len(), 1);

    let stored = service.load_questions().await.unwrap().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.get(0).unwrap().text(), "ok");
}

#[tokio::test]
async fn replacing_questions_resets_the_session() {
    let service = service();
    service
        .import_questions(r#"[{"question": "Q", "options": ["a", "b"], "correctAnswer": 0}]"#)
        .await
        .unwrap();

    let mut session = service.new_session();
    service.start_session(&mut session).await.unwrap();
    let mut events = service.subscribe();

    service
        .replace_questions(
            r#"[{"question": "New", "options": ["x", "y", "z"], "correctAnswer": [1]}]"#,
            &mut session,
        )
        .await
        .unwrap();
    assert_eq!(events.recv().await.unwrap(), SessionEvent::Reset);
    assert!(session.questions().is_none());

    service.start_session(&mut session).await.unwrap();
    assert_eq!(session.current_question().unwrap().text(), "New");
}

#[tokio::test]
async fn restart_after_summary_restarts_ticker_and_publishes() {
    let service = service();
    service
        .import_questions(
            r#"[
                {"question": "Q1", "options": ["a", "b"], "correctAnswer": 0},
                {"question": "Q2", "options": ["a", "b"], "correctAnswer": 0}
            ]"#,
        )
        .await
        .unwrap();

    let mut session = QuizSession::with_seed(fixed_clock(), 9);
    let mut event = service.start_session(&mut session).await.unwrap();
    while let SessionEvent::QuestionPresented(_) = event {
        session.toggle_selection(1).unwrap();
        service.submit(&mut session).unwrap();
        event = service.advance(&mut session).unwrap();
    }
    assert!(event.is_finished());
    assert!(!service.is_ticking());

    let mut events = service.subscribe();
    let restarted = service.restart(&mut session).unwrap();
    assert!(service.is_ticking());
    assert_eq!(*service.elapsed().borrow(), 0);

    let SessionEvent::QuestionPresented(presented) = events.recv().await.unwrap() else {
        panic!("expected a presented question after restart");
    };
    assert_eq!(restarted, SessionEvent::QuestionPresented(presented.clone()));
    assert_eq!(presented.ordinal, 1);
    assert_eq!(presented.mode, SessionMode::Normal);
    assert_eq!(session.incorrect_count(), 0);
    assert!(session.missed().is_empty());
}
