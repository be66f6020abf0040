use quiz_core::model::SessionMode;
use quiz_core::time::format_elapsed;
use serde::Serialize;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub mode: SessionMode,
    /// 1-based position of the current question within the pass.
    pub ordinal: usize,
    pub pass_total: usize,
    pub answered: usize,
    pub correct: u32,
    pub incorrect: u32,
    pub elapsed_seconds: u64,
    pub is_complete: bool,
}

impl SessionProgress {
    /// Questions of the current pass not yet answered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pass_total.saturating_sub(self.answered)
    }

    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}
