mod events;
mod progress;
mod service;
mod timer;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::{QuizLoopError, SessionError};
pub use events::{AnswerOutcome, PresentedQuestion, SessionEvent};
pub use progress::SessionProgress;
pub use service::{QuizSession, SessionState};
pub use timer::ElapsedTicker;
pub use workflow::QuizLoopService;
