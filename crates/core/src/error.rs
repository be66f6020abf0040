use thiserror::Error;

use crate::model::{ImportError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Import(#[from] ImportError),
}
