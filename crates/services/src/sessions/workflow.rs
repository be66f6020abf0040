use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{broadcast, watch};

use quiz_core::model::{ImportReport, QuestionSet};
use storage::repository::QuestionStore;

use crate::Clock;
use crate::error::QuizLoopError;
use super::events::{AnswerOutcome, SessionEvent};
use super::service::QuizSession;
use super::timer::ElapsedTicker;

const EVENT_CAPACITY: usize = 64;

/// Orchestrates persisted questions, session transitions and the elapsed ticker.
///
/// Every successful transition is published on a broadcast channel so a
/// presentation layer can follow along without polling the session.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    store: QuestionStore,
    events: broadcast::Sender<SessionEvent>,
    ticker: Arc<Mutex<ElapsedTicker>>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, store: QuestionStore) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            clock,
            store,
            events,
            ticker: Arc::new(Mutex::new(ElapsedTicker::new())),
        }
    }

    /// A fresh idle session sharing this service's clock.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(self.clock)
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Elapsed seconds of the running pass, updated once per second.
    #[must_use]
    pub fn elapsed(&self) -> watch::Receiver<u64> {
        self.ticker().subscribe()
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker().is_running()
    }

    //
    // ─── QUESTION STORE ────────────────────────────────────────────────────
    //

    /// Load the persisted question set, if one was imported.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Storage` if the store cannot be read.
    pub async fn load_questions(&self) -> Result<Option<Arc<QuestionSet>>, QuizLoopError> {
        let loaded = self.store.load().await?;
        Ok(loaded.filter(|set| !set.is_empty()).map(Arc::new))
    }

    /// Validate an import document and persist the surviving questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Import` when the document is rejected (the store
    /// is left untouched) and `QuizLoopError::Storage` if the write fails.
    pub async fn import_questions(
        &self,
        document: &str,
    ) -> Result<(Arc<QuestionSet>, ImportReport), QuizLoopError> {
        let (set, report) = QuestionSet::import_json(document)?;
        if report.has_skipped() {
            tracing::warn!(
                imported = report.imported,
                skipped = report.skipped,
                "skipped invalid questions during import"
            );
        }
        self.store.save(&set).await?;
        tracing::info!(imported = report.imported, "question set imported");
        Ok((Arc::new(set), report))
    }

    /// Import a document and drop whatever session was in progress.
    ///
    /// # Errors
    ///
    /// Same as [`Self::import_questions`]; on error the session is untouched.
    pub async fn replace_questions(
        &self,
        document: &str,
        session: &mut QuizSession,
    ) -> Result<(Arc<QuestionSet>, ImportReport), QuizLoopError> {
        let imported = self.import_questions(document).await?;
        let event = session.reset();
        self.ticker().freeze_at(0);
        self.publish(event);
        Ok(imported)
    }

    //
    // ─── SESSION TRANSITIONS ───────────────────────────────────────────────
    //

    /// Start a normal pass over the persisted question set.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::NoQuestions` if nothing has been imported yet.
    pub async fn start_session(
        &self,
        session: &mut QuizSession,
    ) -> Result<SessionEvent, QuizLoopError> {
        let questions = self
            .load_questions()
            .await?
            .ok_or(QuizLoopError::NoQuestions)?;
        self.start_with(session, questions)
    }

    /// Start a normal pass over an already loaded question set.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` if the set is empty.
    pub fn start_with(
        &self,
        session: &mut QuizSession,
        questions: Arc<QuestionSet>,
    ) -> Result<SessionEvent, QuizLoopError> {
        let total = questions.len();
        let event = session.start(questions)?;
        tracing::info!(total, "quiz session started");
        self.ticker().start(0);
        Ok(self.publish(event))
    }

    /// Start a fresh normal pass over the question set of the last start.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` if the session was never started.
    pub fn restart(&self, session: &mut QuizSession) -> Result<SessionEvent, QuizLoopError> {
        let event = session.restart()?;
        tracing::info!("quiz session restarted");
        self.ticker().start(0);
        Ok(self.publish(event))
    }

    /// Submit the current selection.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` when the session rejects the submit.
    pub fn submit(&self, session: &mut QuizSession) -> Result<AnswerOutcome, QuizLoopError> {
        let outcome = session.submit()?.clone();
        tracing::debug!(
            index = outcome.index,
            correct = outcome.correct,
            scored = outcome.scored,
            "answer submitted"
        );
        self.publish(SessionEvent::AnswerSubmitted(outcome.clone()));
        Ok(outcome)
    }

    /// Move on from a submitted question. Freezes the ticker at the summary.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` when the current question is unanswered.
    pub fn advance(&self, session: &mut QuizSession) -> Result<SessionEvent, QuizLoopError> {
        let event = session.advance()?;
        if let SessionEvent::Finished(summary) = &event {
            self.ticker().freeze_at(summary.elapsed_seconds());
            tracing::info!(
                mode = ?summary.mode(),
                correct = summary.correct(),
                incorrect = summary.incorrect(),
                accuracy = summary.accuracy_percent(),
                elapsed = summary.elapsed_seconds(),
                "quiz pass finished"
            );
        }
        Ok(self.publish(event))
    }

    /// Replay the missed questions from the summary with a fresh timer.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Session` outside the summary or with nothing missed.
    pub fn review_missed(&self, session: &mut QuizSession) -> Result<SessionEvent, QuizLoopError> {
        let event = session.review_missed()?;
        tracing::info!(missed = session.missed().len(), "review pass started");
        self.ticker().start(0);
        Ok(self.publish(event))
    }

    /// Clear the persisted questions and return the session to idle.
    ///
    /// # Errors
    ///
    /// Returns `QuizLoopError::Storage` if the store cannot be cleared; the
    /// session is left as it was in that case.
    pub async fn reset(&self, session: &mut QuizSession) -> Result<SessionEvent, QuizLoopError> {
        self.store.clear().await?;
        let event = session.reset();
        self.ticker().freeze_at(0);
        tracing::info!("quiz reset");
        Ok(self.publish(event))
    }

    fn publish(&self, event: SessionEvent) -> SessionEvent {
        // No subscribers is fine.
        let _ = self.events.send(event.clone());
        event
    }

    fn ticker(&self) -> MutexGuard<'_, ElapsedTicker> {
        self.ticker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
