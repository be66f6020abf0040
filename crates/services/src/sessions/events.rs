use std::collections::BTreeSet;

use quiz_core::model::{SessionMode, SessionSummary};
use serde::Serialize;

/// Question handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentedQuestion {
    /// Position of the question in the loaded set.
    pub index: usize,
    pub mode: SessionMode,
    /// 1-based count of questions shown in the current pass.
    pub ordinal: usize,
    pub pass_total: usize,
    /// Ordinal as the first version of the trainer displayed it. Normal pass only.
    pub legacy_ordinal: Option<usize>,
    pub multi_answer: bool,
}

/// Feedback for a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub index: usize,
    pub correct: bool,
    /// False for review answers, which never touch the counters.
    pub scored: bool,
    pub selected: BTreeSet<usize>,
    pub correct_answer: BTreeSet<usize>,
    pub explanation: String,
}

/// Notifications published as a session moves between states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    QuestionPresented(PresentedQuestion),
    AnswerSubmitted(AnswerOutcome),
    Finished(SessionSummary),
    Reset,
}

impl SessionEvent {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}
