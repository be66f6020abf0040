use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder shown when a question carries no explanation.
pub const DEFAULT_EXPLANATION: &str = "No explanation provided.";

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is missing")]
    MissingText,
    #[error("question needs at least {MIN_OPTIONS} options, got {count}")]
    TooFewOptions { count: usize },
    #[error("correct answer is missing")]
    MissingCorrectAnswer,
    #[error("correct answer set is empty")]
    EmptyCorrectAnswer,
    #[error("correct answer index {index} is out of range for {options} options")]
    AnswerOutOfRange { index: usize, options: usize },
}

//
// ─── CORRECT ANSWER ────────────────────────────────────────────────────────────
//

/// Correct answer of a question: one option index, or a set of indices.
///
/// A `Multiple` answer is presented with checkbox semantics even when it holds
/// a single index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Single(usize),
    Multiple(BTreeSet<usize>),
}

impl CorrectAnswer {
    /// Build a multi-answer from any collection of indices.
    #[must_use]
    pub fn multiple(indices: impl IntoIterator<Item = usize>) -> Self {
        Self::Multiple(indices.into_iter().collect())
    }

    #[must_use]
    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// All correct indices, ascending.
    #[must_use]
    pub fn indices(&self) -> BTreeSet<usize> {
        match self {
            Self::Single(index) => BTreeSet::from([*index]),
            Self::Multiple(set) => set.clone(),
        }
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::Single(correct) => *correct == index,
            Self::Multiple(set) => set.contains(&index),
        }
    }

    /// Exact-match scoring. No partial credit for multi-answer questions.
    #[must_use]
    pub fn is_satisfied_by(&self, selected: &BTreeSet<usize>) -> bool {
        match self {
            Self::Single(correct) => selected.len() == 1 && selected.contains(correct),
            Self::Multiple(set) => set == selected,
        }
    }

    fn validate(&self, options: usize) -> Result<(), QuestionError> {
        if let Self::Multiple(set) = self {
            if set.is_empty() {
                return Err(QuestionError::EmptyCorrectAnswer);
            }
        }
        match self.indices().into_iter().find(|index| *index >= options) {
            Some(index) => Err(QuestionError::AnswerOutOfRange { index, options }),
            None => Ok(()),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in an import document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(default, rename = "question")]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default, rename = "correctAnswer")]
    pub correct_answer: Option<CorrectAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuestionDraft {
    /// Validate the draft into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text is missing, fewer than two options
    /// are given, or the correct answer is missing, empty, or out of range.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let text = self
            .text
            .filter(|text| !text.trim().is_empty())
            .ok_or(QuestionError::MissingText)?;
        let options = self.options.unwrap_or_default();
        if options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                count: options.len(),
            });
        }
        let correct_answer = self
            .correct_answer
            .ok_or(QuestionError::MissingCorrectAnswer)?;
        correct_answer.validate(options.len())?;

        Ok(Question {
            text,
            options,
            correct_answer,
            explanation: self.explanation.filter(|text| !text.trim().is_empty()),
        })
    }
}

/// A validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionDraft")]
pub struct Question {
    #[serde(rename = "question")]
    text: String,
    options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    correct_answer: CorrectAnswer,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
}

impl TryFrom<QuestionDraft> for Question {
    type Error = QuestionError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl Question {
    /// Convenience constructor that runs the same validation as imports.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the question breaks any invariant.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: CorrectAnswer,
        explanation: Option<String>,
    ) -> Result<Self, QuestionError> {
        QuestionDraft {
            text: Some(text.into()),
            options: Some(options),
            correct_answer: Some(correct_answer),
            explanation,
        }
        .validate()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_answer(&self) -> &CorrectAnswer {
        &self.correct_answer
    }

    #[must_use]
    pub fn is_multi_answer(&self) -> bool {
        self.correct_answer.is_multiple()
    }

    /// Explanation text, or the placeholder when none was provided.
    #[must_use]
    pub fn explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or(DEFAULT_EXPLANATION)
    }

    #[must_use]
    pub fn has_explanation(&self) -> bool {
        self.explanation.is_some()
    }

    #[must_use]
    pub fn is_correct(&self, selected: &BTreeSet<usize>) -> bool {
        self.correct_answer.is_satisfied_by(selected)
    }
}
