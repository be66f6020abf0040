mod question;
mod question_set;
mod session;

pub use question::{
    CorrectAnswer, DEFAULT_EXPLANATION, MIN_OPTIONS, Question, QuestionDraft, QuestionError,
};
pub use question_set::{ImportError, ImportReport, QuestionSet};
pub use session::{SessionMode, SessionSummary, accuracy_percent};
