//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::ImportError;
use storage::repository::StorageError;

/// Rejected session operations. The session state is unchanged on error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("question set is empty")]
    EmptyQuestionSet,
    #[error("no session has been started")]
    NotStarted,
    #[error("no question is currently being presented")]
    NotActive,
    #[error("option {index} is out of range for {options} options")]
    InvalidIndex { index: usize, options: usize },
    #[error("select at least one option before submitting")]
    NoSelection,
    #[error("the current question was already submitted")]
    AlreadySubmitted,
    #[error("submit an answer before moving on")]
    NotSubmitted,
    #[error("review is only available from the session summary")]
    NotInSummary,
    #[error("no incorrect questions to review")]
    NothingToReview,
}

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoopError {
    #[error("no questions loaded")]
    NoQuestions,
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ExplainService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExplainError {
    #[error("missing required parameters: {0}")]
    MissingParameters(String),
    #[error("correct answer index {index} is out of range for {options} options")]
    InvalidAnswerIndex { index: usize, options: usize },
    #[error("invalid model endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("model request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("model reply is not valid JSON: {0}")]
    MalformedReply(#[from] serde_json::Error),
    #[error("unexpected model response format")]
    UnrecognizedReplyFormat,
}

impl ExplainError {
    /// True for errors caused by the caller's request rather than the model call.
    #[must_use]
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            Self::MissingParameters(_) | Self::InvalidAnswerIndex { .. }
        )
    }
}
