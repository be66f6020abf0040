#![forbid(unsafe_code)]

pub mod error;
pub mod explain;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{ExplainError, QuizLoopError, SessionError};
pub use explain::{
    ExplainConfig, ExplainPayload, ExplainRequest, ExplainService, Explanation, ModelClient,
};
pub use sessions::{
    AnswerOutcome, ElapsedTicker, PresentedQuestion, QuizLoopService, QuizSession, SessionEvent,
    SessionProgress, SessionState,
};
