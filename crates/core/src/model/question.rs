use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::locale::Locale;

/// Every question offers exactly this many options.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has blank text for locale {locale}")]
    BlankText { id: QuestionId, locale: Locale },

    #[error("question {id} needs 4 options for locale {locale}, got {len}")]
    OptionCount {
        id: QuestionId,
        locale: Locale,
        len: usize,
    },

    #[error("question {id} has a blank option for locale {locale}")]
    BlankOption { id: QuestionId, locale: Locale },

    #[error("question {id}: answer {answer:?} is not one of its English options")]
    UnknownAnswer { id: QuestionId, answer: String },

    #[error("duplicate question id {0}")]
    DuplicateId(QuestionId),

    #[error("question bank is empty")]
    EmptyBank,
}

//
// ─── OPTION KEY ────────────────────────────────────────────────────────────────
//

/// Position of an option within a question, independent of display language.
///
/// Answers are recorded as keys so switching locale mid-quiz never changes
/// whether an answer is correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OptionKey(u8);

impl OptionKey {
    pub const ALL: [OptionKey; OPTION_COUNT] =
        [OptionKey(0), OptionKey(1), OptionKey(2), OptionKey(3)];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// `A`, `B`, `C` or `D`.
    #[must_use]
    pub fn letter(self) -> char {
        char::from(b'A' + self.0)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

//
// ─── LOCALIZED VALUES ──────────────────────────────────────────────────────────
//

/// One value per supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub hi: T,
}

impl<T> Localized<T> {
    #[must_use]
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Hi => &self.hi,
        }
    }

    fn try_map<U, E>(self, mut f: impl FnMut(Locale, T) -> Result<U, E>) -> Result<Localized<U>, E> {
        Ok(Localized {
            en: f(Locale::En, self.en)?,
            hi: f(Locale::Hi, self.hi)?,
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in a question file.
///
/// `answer` is the correct option's text in English; it is resolved to an
/// [`OptionKey`] by [`QuestionDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: u32,
    pub question: Localized<String>,
    pub options: Localized<Vec<String>>,
    pub answer: String,
}

impl QuestionDraft {
    /// # Errors
    ///
    /// Returns `QuestionError` if any text or option is blank, if a locale
    /// does not have exactly four options, or if `answer` does not match one
    /// of the English options.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = QuestionId::new(self.id);

        let text = self.question.try_map(|locale, text| {
            if text.trim().is_empty() {
                Err(QuestionError::BlankText { id, locale })
            } else {
                Ok(text)
            }
        })?;

        let options = self.options.try_map(|locale, options| {
            let len = options.len();
            let options: [String; OPTION_COUNT] = options
                .try_into()
                .map_err(|_| QuestionError::OptionCount { id, locale, len })?;
            if options.iter().any(|option| option.trim().is_empty()) {
                return Err(QuestionError::BlankOption { id, locale });
            }
            Ok(options)
        })?;

        let answer = self.answer.trim();
        let correct = options
            .en
            .iter()
            .position(|option| option.trim() == answer)
            .and_then(OptionKey::from_index)
            .ok_or_else(|| QuestionError::UnknownAnswer {
                id,
                answer: self.answer.clone(),
            })?;

        Ok(Question {
            id,
            text,
            options,
            correct,
        })
    }
}

/// A single quiz item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: Localized<String>,
    options: Localized<[String; OPTION_COUNT]>,
    correct: OptionKey,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self, locale: Locale) -> &str {
        self.text.get(locale)
    }

    #[must_use]
    pub fn options(&self, locale: Locale) -> &[String; OPTION_COUNT] {
        self.options.get(locale)
    }

    #[must_use]
    pub fn option(&self, locale: Locale, key: OptionKey) -> &str {
        &self.options.get(locale)[key.index()]
    }

    #[must_use]
    pub fn correct_key(&self) -> OptionKey {
        self.correct
    }

    #[must_use]
    pub fn correct_answer(&self, locale: Locale) -> &str {
        self.option(locale, self.correct)
    }

    #[must_use]
    pub fn is_correct(&self, key: OptionKey) -> bool {
        self.correct == key
    }
}
