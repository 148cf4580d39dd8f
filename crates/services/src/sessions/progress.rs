use quiz_core::model::{AnswerMap, Locale};

/// Point-in-time copy of the user-visible session fields.
///
/// Two sessions in the same situation compare equal, which is what the
/// reset guarantee is stated in terms of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_index: usize,
    pub answers: AnswerMap,
    pub remaining_secs: u32,
    pub locale: Locale,
    pub submitted: bool,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub unattempted: usize,
}
