use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::sync::Arc;

use quiz_core::model::{Question, QuestionSet, SessionMode, SessionSummary};

use crate::Clock;
use crate::error::SessionError;
use super::events::{AnswerOutcome, PresentedQuestion, SessionEvent};
use super::progress::SessionProgress;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Coarse lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active(SessionMode),
    Summary,
}

#[derive(Debug, Clone)]
struct CurrentQuestion {
    index: usize,
    selected: BTreeSet<usize>,
    outcome: Option<AnswerOutcome>,
}

#[derive(Debug, Clone)]
enum Stage {
    Idle,
    Active(CurrentQuestion),
    Summary(SessionSummary),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Practice session over a fixed question set.
///
/// The normal pass draws every question exactly once in random order; a review
/// pass then replays the missed questions in the order they were missed.
/// Operations take `&mut self` and either succeed or leave the state untouched.
pub struct QuizSession {
    clock: Clock,
    rng: StdRng,
    questions: Option<Arc<QuestionSet>>,
    stage: Stage,
    mode: SessionMode,
    remaining: Vec<usize>,
    review_queue: VecDeque<usize>,
    missed: Vec<usize>,
    correct: u32,
    incorrect: u32,
    presented: usize,
    pass_total: usize,
    started_at: Option<DateTime<Utc>>,
    frozen_elapsed: Option<u64>,
}

impl QuizSession {
    /// Create an idle session using OS randomness for draws.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self::with_rng(clock, StdRng::from_os_rng())
    }

    /// Create an idle session with a deterministic draw order.
    #[must_use]
    pub fn with_seed(clock: Clock, seed: u64) -> Self {
        Self::with_rng(clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(clock: Clock, rng: StdRng) -> Self {
        Self {
            clock,
            rng,
            questions: None,
            stage: Stage::Idle,
            mode: SessionMode::Normal,
            remaining: Vec::new(),
            review_queue: VecDeque::new(),
            missed: Vec::new(),
            correct: 0,
            incorrect: 0,
            presented: 0,
            pass_total: 0,
            started_at: None,
            frozen_elapsed: None,
        }
    }

    /// Mutable access to the session clock; tests advance fixed clocks through this.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    //
    // ─── OPERATIONS ────────────────────────────────────────────────────────
    //

    /// Start a normal pass over `questions` and present the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyQuestionSet` if there is nothing to practice.
    pub fn start(&mut self, questions: Arc<QuestionSet>) -> Result<SessionEvent, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuestionSet);
        }

        self.remaining = (0..questions.len()).collect();
        self.pass_total = questions.len();
        self.questions = Some(questions);
        self.mode = SessionMode::Normal;
        self.review_queue.clear();
        self.missed.clear();
        self.correct = 0;
        self.incorrect = 0;
        self.presented = 0;
        self.started_at = Some(self.clock.now());
        self.frozen_elapsed = None;

        Ok(self.select_next_question())
    }

    /// Start a fresh normal pass over the question set of the last `start`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` if no question set was ever started.
    pub fn restart(&mut self) -> Result<SessionEvent, SessionError> {
        let questions = self.questions.clone().ok_or(SessionError::NotStarted)?;
        self.start(questions)
    }

    /// Select or toggle an option of the current question.
    ///
    /// Single-answer questions keep exactly one selection; multi-answer
    /// questions toggle membership. Returns the selection after the change.
    ///
    /// # Errors
    ///
    /// Returns `NotActive` outside an active question, `AlreadySubmitted` once
    /// the answer is in, and `InvalidIndex` for an out-of-range option.
    pub fn toggle_selection(&mut self, option: usize) -> Result<&BTreeSet<usize>, SessionError> {
        let questions = self.questions.as_deref().ok_or(SessionError::NotActive)?;
        let Stage::Active(current) = &mut self.stage else {
            return Err(SessionError::NotActive);
        };
        if current.outcome.is_some() {
            return Err(SessionError::AlreadySubmitted);
        }
        let question = questions
            .get(current.index)
            .ok_or(SessionError::NotActive)?;
        if option >= question.option_count() {
            return Err(SessionError::InvalidIndex {
                index: option,
                options: question.option_count(),
            });
        }

        if question.is_multi_answer() {
            if !current.selected.remove(&option) {
                current.selected.insert(option);
            }
        } else {
            current.selected.clear();
            current.selected.insert(option);
        }

        Ok(&current.selected)
    }

    /// Score the current selection.
    ///
    /// Outside review, counters are updated and a wrong answer is appended to
    /// the missed list. Review answers are reported but never scored.
    ///
    /// # Errors
    ///
    /// Returns `NotActive` outside an active question, `AlreadySubmitted` on a
    /// second submit, and `NoSelection` when nothing is selected.
    pub fn submit(&mut self) -> Result<&AnswerOutcome, SessionError> {
        let questions = self.questions.as_deref().ok_or(SessionError::NotActive)?;
        let Stage::Active(current) = &mut self.stage else {
            return Err(SessionError::NotActive);
        };
        if current.outcome.is_some() {
            return Err(SessionError::AlreadySubmitted);
        }
        if current.selected.is_empty() {
            return Err(SessionError::NoSelection);
        }
        let question = questions
            .get(current.index)
            .ok_or(SessionError::NotActive)?;

        let correct = question.is_correct(&current.selected);
        let scored = self.mode == SessionMode::Normal;
        if scored {
            if correct {
                self.correct = self.correct.saturating_add(1);
            } else {
                self.incorrect = self.incorrect.saturating_add(1);
                self.missed.push(current.index);
            }
        }

        let outcome = current.outcome.insert(AnswerOutcome {
            index: current.index,
            correct,
            scored,
            selected: current.selected.clone(),
            correct_answer: question.correct_answer().indices(),
            explanation: question.explanation().to_owned(),
        });
        Ok(outcome)
    }

    /// Move past a submitted question to the next one, or to the summary.
    ///
    /// # Errors
    ///
    /// Returns `NotActive` outside an active question and `NotSubmitted` if
    /// the current question has not been answered yet.
    pub fn advance(&mut self) -> Result<SessionEvent, SessionError> {
        let Stage::Active(current) = &self.stage else {
            return Err(SessionError::NotActive);
        };
        if current.outcome.is_none() {
            return Err(SessionError::NotSubmitted);
        }
        Ok(self.select_next_question())
    }

    /// Replay the questions missed in the last normal pass, oldest miss first.
    ///
    /// # Errors
    ///
    /// Returns `NotInSummary` unless the session is showing its summary, and
    /// `NothingToReview` when no question was missed. Neither changes state.
    pub fn review_missed(&mut self) -> Result<SessionEvent, SessionError> {
        if !matches!(self.stage, Stage::Summary(_)) {
            return Err(SessionError::NotInSummary);
        }
        if self.missed.is_empty() {
            return Err(SessionError::NothingToReview);
        }

        self.review_queue = self.missed.iter().copied().collect();
        self.pass_total = self.review_queue.len();
        self.presented = 0;
        self.mode = SessionMode::Review;
        self.started_at = Some(self.clock.now());
        self.frozen_elapsed = None;

        Ok(self.select_next_question())
    }

    /// Drop all session state and return to idle.
    pub fn reset(&mut self) -> SessionEvent {
        self.questions = None;
        self.stage = Stage::Idle;
        self.mode = SessionMode::Normal;
        self.remaining.clear();
        self.review_queue.clear();
        self.missed.clear();
        self.correct = 0;
        self.incorrect = 0;
        self.presented = 0;
        self.pass_total = 0;
        self.started_at = None;
        self.frozen_elapsed = None;
        SessionEvent::Reset
    }

    fn select_next_question(&mut self) -> SessionEvent {
        let next = match self.mode {
            SessionMode::Normal => {
                if self.remaining.is_empty() {
                    None
                } else {
                    let pos = self.rng.random_range(0..self.remaining.len());
                    Some(self.remaining.swap_remove(pos))
                }
            }
            SessionMode::Review => self.review_queue.pop_front(),
        };

        let Some(index) = next else {
            return self.finish();
        };

        self.presented += 1;
        self.stage = Stage::Active(CurrentQuestion {
            index,
            selected: BTreeSet::new(),
            outcome: None,
        });
        SessionEvent::QuestionPresented(self.presented_question(index))
    }

    fn finish(&mut self) -> SessionEvent {
        let elapsed = self.elapsed_seconds();
        self.frozen_elapsed = Some(elapsed);
        let summary = SessionSummary::from_counts(
            self.mode,
            self.correct,
            self.incorrect,
            elapsed,
            self.missed.clone(),
        );
        self.stage = Stage::Summary(summary.clone());
        SessionEvent::Finished(summary)
    }

    fn presented_question(&self, index: usize) -> PresentedQuestion {
        PresentedQuestion {
            index,
            mode: self.mode,
            ordinal: self.presented,
            pass_total: self.pass_total,
            legacy_ordinal: self.legacy_ordinal(),
            multi_answer: self
                .questions
                .as_deref()
                .and_then(|set| set.get(index))
                .is_some_and(Question::is_multi_answer),
        }
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.stage {
            Stage::Idle => SessionState::Idle,
            Stage::Active(_) => SessionState::Active(self.mode),
            Stage::Summary(_) => SessionState::Summary,
        }
    }

    #[must_use]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    #[must_use]
    pub fn questions(&self) -> Option<&QuestionSet> {
        self.questions.as_deref()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match &self.stage {
            Stage::Active(current) => Some(current.index),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        let index = self.current_index()?;
        self.questions.as_deref()?.get(index)
    }

    /// Options selected for the current question so far.
    #[must_use]
    pub fn selected(&self) -> Option<&BTreeSet<usize>> {
        match &self.stage {
            Stage::Active(current) => Some(&current.selected),
            _ => None,
        }
    }

    /// Outcome of the current question once it has been submitted.
    #[must_use]
    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        match &self.stage {
            Stage::Active(current) => current.outcome.as_ref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&SessionSummary> {
        match &self.stage {
            Stage::Summary(summary) => Some(summary),
            _ => None,
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.incorrect
    }

    /// Indices missed in the normal pass, in the order they were missed.
    #[must_use]
    pub fn missed(&self) -> &[usize] {
        &self.missed
    }

    /// Questions not yet drawn in the normal pass.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Questions still queued in the review pass.
    #[must_use]
    pub fn review_queue_len(&self) -> usize {
        self.review_queue.len()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Seconds since the current pass started; frozen once the pass finishes.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        if let Some(frozen) = self.frozen_elapsed {
            return frozen;
        }
        self.started_at
            .map_or(0, |started_at| self.clock.seconds_since(started_at))
    }

    /// True while a pass is running and its elapsed time is still counting.
    #[must_use]
    pub fn is_timing(&self) -> bool {
        self.started_at.is_some() && self.frozen_elapsed.is_none()
    }

    /// Ordinal computed the way the first version of the trainer displayed it.
    ///
    /// Counts draws so far except that the first draw of a set with more than
    /// one question shows as 1 only because of how the formula is shaped.
    /// Only defined for the normal pass.
    #[must_use]
    pub fn legacy_ordinal(&self) -> Option<usize> {
        if self.mode != SessionMode::Normal {
            return None;
        }
        let total = self.questions.as_deref()?.len();
        let remaining = self.remaining.len();
        Some(if remaining + 1 < total {
            total - remaining
        } else {
            1
        })
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let is_active = matches!(self.stage, Stage::Active(_));
        SessionProgress {
            mode: self.mode,
            ordinal: self.presented,
            pass_total: self.pass_total,
            answered: self.presented.saturating_sub(usize::from(
                is_active && self.last_outcome().is_none(),
            )),
            correct: self.correct,
            incorrect: self.incorrect,
            elapsed_seconds: self.elapsed_seconds(),
            is_complete: matches!(self.stage, Stage::Summary(_)),
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("state", &self.state())
            .field("questions_len", &self.questions.as_deref().map(QuestionSet::len))
            .field("remaining_len", &self.remaining.len())
            .field("review_queue_len", &self.review_queue.len())
            .field("missed", &self.missed)
            .field("correct", &self.correct)
            .field("incorrect", &self.incorrect)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::model::CorrectAnswer;
    use quiz_core::time::fixed_clock;

    fn single(text: &str, correct: usize) -> Question {
        Question::new(
            text,
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            CorrectAnswer::Single(correct),
            None,
        )
        .unwrap()
    }

    fn multi(text: &str, correct: &[usize]) -> Question {
        Question::new(
            text,
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            CorrectAnswer::multiple(correct.iter().copied()),
            Some("pick both".into()),
        )
        .unwrap()
    }

    fn singles(n: usize) -> Arc<QuestionSet> {
        Arc::new(QuestionSet::new(
            (0..n).map(|i| single(&format!("Q{i}"), 0)).collect(),
        ))
    }

    fn answer(session: &mut QuizSession, options: &[usize]) -> AnswerOutcome {
        for option in options {
            session.toggle_selection(*option).unwrap();
        }
        session.submit().unwrap().clone()
    }

    fn presented_index(event: &SessionEvent) -> usize {
        match event {
            SessionEvent::QuestionPresented(presented) => presented.index,
            other => panic!("expected a presented question, got {other:?}"),
        }
    }

    #[test]
    fn start_requires_questions() {
        let mut session = QuizSession::with_seed(fixed_clock(), 1);
        let err = session
            .start(Arc::new(QuestionSet::default()))
            .unwrap_err();
        assert_eq!(err, SessionError::EmptyQuestionSet);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn normal_pass_draws_each_question_once() {
        let mut session = QuizSession::with_seed(fixed_clock(), 7);
        let mut seen = Vec::new();
        let mut event = session.start(singles(10)).unwrap();

        while let SessionEvent::QuestionPresented(presented) = &event {
            seen.push(presented.index);
            assert_eq!(presented.ordinal, seen.len());
            assert_eq!(presented.pass_total, 10);
            answer(&mut session, &[0]);
            event = session.advance().unwrap();
        }

        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
        assert_eq!(session.state(), SessionState::Summary);
        assert_eq!(session.correct_count(), 10);
    }

    #[test]
    fn two_correct_answers_disable_review() {
        let mut session = QuizSession::with_seed(fixed_clock(), 3);
        session.start(singles(2)).unwrap();
        answer(&mut session, &[0]);
        session.advance().unwrap();
        answer(&mut session, &[0]);
        let event = session.advance().unwrap();

        let SessionEvent::Finished(summary) = event else {
            panic!("expected summary");
        };
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.incorrect(), 0);
        assert!(!summary.can_review());

        let before = session.progress();
        assert_eq!(
            session.review_missed().unwrap_err(),
            SessionError::NothingToReview
        );
        assert_eq!(session.progress(), before);
        assert_eq!(session.state(), SessionState::Summary);
    }

    #[test]
    fn multi_answer_subset_is_incorrect_and_reviewed() {
        let set = Arc::new(QuestionSet::new(vec![multi("Q", &[0, 2])]));
        let mut session = QuizSession::with_seed(fixed_clock(), 1);
        session.start(set).unwrap();

        let outcome = answer(&mut session, &[0]);
        assert!(!outcome.correct);
        assert!(outcome.scored);
        assert_eq!(outcome.correct_answer, BTreeSet::from([0, 2]));
        assert_eq!(outcome.explanation, "pick both");
        assert_eq!(session.missed(), &[0]);

        assert!(matches!(
            session.advance().unwrap(),
            SessionEvent::Finished(_)
        ));
        let event = session.review_missed().unwrap();
        assert_eq!(presented_index(&event), 0);
        assert_eq!(session.state(), SessionState::Active(SessionMode::Review));
    }

    #[test]
    fn multi_answer_superset_is_incorrect_and_toggle_removes() {
        let set = Arc::new(QuestionSet::new(vec![multi("Q", &[0, 2])]));
        let mut session = QuizSession::with_seed(fixed_clock(), 1);
        session.start(set).unwrap();

        session.toggle_selection(0).unwrap();
        session.toggle_selection(1).unwrap();
        let selected = session.toggle_selection(2).unwrap().clone();
        assert_eq!(selected, BTreeSet::from([0, 1, 2]));
        assert!(!session.submit().unwrap().correct);

        let set = Arc::new(QuestionSet::new(vec![multi("Q", &[0, 2])]));
        session.start(set).unwrap();
        session.toggle_selection(1).unwrap();
        let selected = session.toggle_selection(1).unwrap().clone();
        assert!(selected.is_empty());
        assert_eq!(session.submit().unwrap_err(), SessionError::NoSelection);
        answer(&mut session, &[2, 0]);
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn single_answer_selection_is_exclusive() {
        let mut session = QuizSession::with_seed(fixed_clock(), 1);
        session.start(singles(1)).unwrap();
        session.toggle_selection(2).unwrap();
        let selected = session.toggle_selection(1).unwrap();
        assert_eq!(selected, &BTreeSet::from([1]));
    }

    #[test]
    fn invalid_option_is_rejected() {
        let mut session = QuizSession::with_seed(fixed_clock(), 1);
        session.start(singles(1)).unwrap();
        assert_eq!(
            session.toggle_selection(4).unwrap_err(),
            SessionError::InvalidIndex {
                index: 4,
                options: 4
            }
        );
        assert!(session.selected().unwrap().is_empty());
    }

    #[test]
    fn submit_and_advance_are_ordered() {
        let mut session = QuizSession::with_seed(fixed_clock(), 1);
        assert_eq!(session.submit().unwrap_err(), SessionError::NotActive);
        session.start(singles(2)).unwrap();

        assert_eq!(session.advance().unwrap_err(), SessionError::NotSubmitted);
        assert_eq!(session.submit().unwrap_err(), SessionError::NoSelection);
        answer(&mut session, &[1]);
        assert_eq!(session.submit().unwrap_err(), SessionError::AlreadySubmitted);
        assert_eq!(
            session.toggle_selection(0).unwrap_err(),
            SessionError::AlreadySubmitted
        );
        assert_eq!(session.incorrect_count(), 1);
        assert_eq!(
            session.review_missed().unwrap_err(),
            SessionError::NotInSummary
        );
    }

    #[test]
    fn review_is_fifo_and_unscored() {
        let mut session = QuizSession::with_seed(fixed_clock(), 11);
        let mut event = session.start(singles(5)).unwrap();
        let mut missed_order = Vec::new();
        let mut submits = 0;

        // Miss every other question.
        while let SessionEvent::QuestionPresented(presented) = &event {
            let wrong = submits % 2 == 0;
            if wrong {
                missed_order.push(presented.index);
            }
            answer(&mut session, if wrong { &[3] } else { &[0] });
            submits += 1;
            event = session.advance().unwrap();
        }
        assert_eq!(session.missed(), missed_order.as_slice());
        assert_eq!(
            session.correct_count() + session.incorrect_count(),
            submits
        );

        let mut reviewed = Vec::new();
        let mut event = session.review_missed().unwrap();
        while let SessionEvent::QuestionPresented(presented) = &event {
            assert_eq!(presented.mode, SessionMode::Review);
            assert_eq!(presented.pass_total, missed_order.len());
            assert_eq!(presented.legacy_ordinal, None);
            reviewed.push(presented.index);
            let outcome = answer(&mut session, &[3]);
            assert!(!outcome.scored);
            event = session.advance().unwrap();
        }

        assert_eq!(reviewed, missed_order);
        assert_eq!(session.missed(), missed_order.as_slice());
        assert_eq!(
            session.correct_count() + session.incorrect_count(),
            submits
        );
        let summary = session.summary().unwrap();
        assert_eq!(summary.mode(), SessionMode::Review);
        assert!(summary.can_review());
    }

    #[test]
    fn elapsed_time_stops_at_summary_and_restarts_for_review() {
        let mut session = QuizSession::with_seed(fixed_clock(), 5);
        session.start(singles(1)).unwrap();
        assert!(session.is_timing());
        session.clock_mut().advance(Duration::seconds(42));
        assert_eq!(session.elapsed_seconds(), 42);

        answer(&mut session, &[2]);
        let SessionEvent::Finished(summary) = session.advance().unwrap() else {
            panic!("expected summary");
        };
        assert_eq!(summary.elapsed_seconds(), 42);
        assert!(!session.is_timing());

        session.clock_mut().advance(Duration::seconds(100));
        assert_eq!(session.elapsed_seconds(), 42);

        session.review_missed().unwrap();
        assert_eq!(session.elapsed_seconds(), 0);
        session.clock_mut().advance(Duration::seconds(5));
        assert_eq!(session.elapsed_seconds(), 5);
    }

    #[test]
    fn legacy_ordinal_matches_first_version() {
        let mut session = QuizSession::with_seed(fixed_clock(), 2);
        let mut legacy = Vec::new();
        let mut event = session.start(singles(3)).unwrap();
        while let SessionEvent::QuestionPresented(presented) = &event {
            legacy.push(presented.legacy_ordinal.unwrap());
            answer(&mut session, &[0]);
            event = session.advance().unwrap();
        }
        assert_eq!(legacy, vec![1, 2, 3]);
    }

    #[test]
    fn restart_and_reset() {
        let mut session = QuizSession::with_seed(fixed_clock(), 2);
        assert_eq!(session.restart().unwrap_err(), SessionError::NotStarted);

        session.start(singles(2)).unwrap();
        answer(&mut session, &[1]);
        session.restart().unwrap();
        assert_eq!(session.incorrect_count(), 0);
        assert!(session.missed().is_empty());
        assert_eq!(session.remaining_count(), 1);

        assert_eq!(session.reset(), SessionEvent::Reset);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.questions().is_none());
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn progress_counts_answered_questions() {
        let mut session = QuizSession::with_seed(fixed_clock(), 2);
        session.start(singles(3)).unwrap();
        let progress = session.progress();
        assert_eq!(progress.ordinal, 1);
        assert_eq!(progress.answered, 0);

        answer(&mut session, &[0]);
        assert_eq!(session.progress().answered, 1);
        session.advance().unwrap();
        assert_eq!(session.progress().ordinal, 2);
        assert_eq!(session.progress().answered, 1);
    }
}
