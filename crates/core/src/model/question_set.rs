use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::question::{Question, QuestionDraft};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    #[error("import document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("import document must be a non-empty JSON array of questions")]
    InvalidDocument,
    #[error("no valid questions found ({skipped} skipped)")]
    NoValidQuestions { skipped: usize },
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

impl ImportReport {
    #[must_use]
    pub fn has_skipped(&self) -> bool {
        self.skipped > 0
    }
}

/// Ordered, immutable collection of validated questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parse an import document, dropping entries that fail validation.
    ///
    /// Entries that are not question-shaped objects count as skipped, the
    /// same as entries breaking a question invariant.
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Parse` for malformed JSON,
    /// `ImportError::InvalidDocument` if the document is not a non-empty array,
    /// and `ImportError::NoValidQuestions` when every entry was dropped.
    pub fn import_json(document: &str) -> Result<(Self, ImportReport), ImportError> {
        let Value::Array(items) = serde_json::from_str::<Value>(document)? else {
            return Err(ImportError::InvalidDocument);
        };
        if items.is_empty() {
            return Err(ImportError::InvalidDocument);
        }

        let total = items.len();
        let questions: Vec<Question> = items
            .into_iter()
            .filter_map(validate_item)
            .collect();
        let report = ImportReport {
            imported: questions.len(),
            skipped: total - questions.len(),
        };

        if questions.is_empty() {
            return Err(ImportError::NoValidQuestions {
                skipped: report.skipped,
            });
        }

        Ok((Self::new(questions), report))
    }

    /// Serialize for the persisted question store.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Rehydrate a set previously written by `to_json`.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the payload is malformed or a stored
    /// question no longer satisfies its invariants.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

fn validate_item(item: Value) -> Option<Question> {
    let draft: QuestionDraft = serde_json::from_value(item).ok()?;
    draft.validate().ok()
}
