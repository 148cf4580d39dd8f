use std::path::PathBuf;

use quiz_core::model::{QuestionBank, QuestionDraft};

use crate::error::QuestionBankError;

/// Where the quiz gets its questions from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuestionSource {
    #[default]
    Builtin,
    /// A JSON array of question drafts.
    File(PathBuf),
}

impl QuestionSource {
    /// # Errors
    ///
    /// Returns `QuestionBankError` if the file cannot be read or parsed, or if
    /// any question fails validation.
    pub fn load(&self) -> Result<QuestionBank, QuestionBankError> {
        match self {
            QuestionSource::Builtin => Ok(QuestionBank::builtin()?),
            QuestionSource::File(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| QuestionBankError::Io {
                    path: path.clone(),
                    source,
                })?;
                let bank = parse_question_bank(&raw)?;
                tracing::info!(path = %path.display(), questions = bank.len(), "loaded question bank");
                Ok(bank)
            }
        }
    }
}

/// Parse and validate a JSON question file.
///
/// # Errors
///
/// Returns `QuestionBankError::Json` for malformed JSON and
/// `QuestionBankError::Invalid` for questions that fail validation.
pub fn parse_question_bank(json: &str) -> Result<QuestionBank, QuestionBankError> {
    let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
    Ok(QuestionBank::from_drafts(drafts)?)
}
