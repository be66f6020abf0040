use serde::{Deserialize, Serialize};

/// Which pass a session is in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// Primary pass drawing from the full question set without replacement.
    #[default]
    Normal,
    /// Secondary pass over the questions missed in the prior pass.
    Review,
}

/// Aggregate summary shown when a pass finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    mode: SessionMode,
    correct: u32,
    incorrect: u32,
    accuracy_percent: u8,
    elapsed_seconds: u64,
    missed: Vec<usize>,
}

impl SessionSummary {
    /// Build a summary from the counters of a finished pass.
    #[must_use]
    pub fn from_counts(
        mode: SessionMode,
        correct: u32,
        incorrect: u32,
        elapsed_seconds: u64,
        missed: Vec<usize>,
    ) -> Self {
        Self {
            mode,
            correct,
            incorrect,
            accuracy_percent: accuracy_percent(correct, incorrect),
            elapsed_seconds,
            missed,
        }
    }

    #[must_use]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn answered(&self) -> u32 {
        self.correct.saturating_add(self.incorrect)
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> u8 {
        self.accuracy_percent
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Question indices answered incorrectly, in the order they were missed.
    #[must_use]
    pub fn missed(&self) -> &[usize] {
        &self.missed
    }

    /// Review is offered only when something was missed.
    #[must_use]
    pub fn can_review(&self) -> bool {
        !self.missed.is_empty()
    }
}

/// Rounded percentage of correct answers; 0 when nothing was answered.
#[must_use]
pub fn accuracy_percent(correct: u32, incorrect: u32) -> u8 {
    let answered = u64::from(correct) + u64::from(incorrect);
    if answered == 0 {
        return 0;
    }
    let rounded = (u64::from(correct) * 200 + answered) / (answered * 2);
    u8::try_from(rounded).unwrap_or(100)
}
