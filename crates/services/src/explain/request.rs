use serde::{Deserialize, Serialize};

use quiz_core::model::CorrectAnswer;

use crate::error::ExplainError;

/// Raw explanation request as posted by the browser client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainPayload {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer_index: Option<CorrectAnswer>,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl ExplainPayload {
    /// Check that every field is present and non-empty and the answer is in range.
    ///
    /// # Errors
    ///
    /// Returns `ExplainError::MissingParameters` naming the absent fields, or
    /// `ExplainError::InvalidAnswerIndex` for an answer outside the options.
    pub fn into_request(self) -> Result<ExplainRequest, ExplainError> {
        let question = self.question.filter(|text| !text.trim().is_empty());
        let options = self.options.filter(|options| !options.is_empty());
        let explanation = self.explanation.filter(|text| !text.trim().is_empty());

        let (Some(question), Some(options), Some(correct_answer), Some(explanation)) =
            (question, options, self.correct_answer_index, explanation)
        else {
            return Err(ExplainError::MissingParameters(
                "question, options, correctAnswerIndex and explanation are required".into(),
            ));
        };

        if let Some(index) = correct_answer
            .indices()
            .into_iter()
            .find(|index| *index >= options.len())
        {
            return Err(ExplainError::InvalidAnswerIndex {
                index,
                options: options.len(),
            });
        }
        if correct_answer.indices().is_empty() {
            return Err(ExplainError::MissingParameters(
                "correctAnswerIndex must not be empty".into(),
            ));
        }

        Ok(ExplainRequest {
            question,
            options,
            correct_answer,
            explanation,
        })
    }
}

/// Validated explanation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainRequest {
    question: String,
    options: Vec<String>,
    correct_answer: CorrectAnswer,
    explanation: String,
}

impl ExplainRequest {
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &CorrectAnswer {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Text of every correct option, in option order.
    #[must_use]
    pub fn correct_options(&self) -> Vec<&str> {
        self.correct_answer
            .indices()
            .into_iter()
            .filter_map(|index| self.options.get(index).map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> ExplainPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn accepts_single_and_multiple_indices() {
        let single = payload(
            r#"{"question":"Q","options":["a","b"],"correctAnswerIndex":1,"explanation":"e"}"#,
        )
        .into_request()
        .unwrap();
        assert_eq!(single.correct_options(), vec!["b"]);

        let multi = payload(
            r#"{"question":"Q","options":["a","b","c"],"correctAnswerIndex":[2,0],"explanation":"e"}"#,
        )
        .into_request()
        .unwrap();
        assert_eq!(multi.correct_options(), vec!["a", "c"]);
    }

    #[test]
    fn index_zero_is_present() {
        let request = payload(
            r#"{"question":"Q","options":["a","b"],"correctAnswerIndex":0,"explanation":"e"}"#,
        )
        .into_request()
        .unwrap();
        assert_eq!(request.correct_answer(), &CorrectAnswer::Single(0));
    }

    #[test]
    fn missing_or_blank_fields_are_rejected() {
        for json in [
            r#"{"options":["a","b"],"correctAnswerIndex":0,"explanation":"e"}"#,
            r#"{"question":"Q","correctAnswerIndex":0,"explanation":"e"}"#,
            r#"{"question":"Q","options":["a","b"],"explanation":"e"}"#,
            r#"{"question":"Q","options":["a","b"],"correctAnswerIndex":0,"explanation":""}"#,
            r#"{"question":"  ","options":["a","b"],"correctAnswerIndex":0,"explanation":"e"}"#,
            r#"{"question":"Q","options":[],"correctAnswerIndex":0,"explanation":"e"}"#,
        ] {
            let err = payload(json).into_request().unwrap_err();
            assert!(matches!(err, ExplainError::MissingParameters(_)), "{json}");
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = payload(
            r#"{"question":"Q","options":["a","b"],"correctAnswerIndex":[0,2],"explanation":"e"}"#,
        )
        .into_request()
        .unwrap_err();
        assert!(matches!(
            err,
            ExplainError::InvalidAnswerIndex { index: 2, options: 2 }
        ));
        assert!(err.is_invalid_request());
    }
}
