use quiz_core::model::Locale;

use crate::vm::strings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Clipboard,
}

impl ViewError {
    #[must_use]
    pub fn message(self, locale: Locale) -> &'static str {
        match self {
            ViewError::Clipboard => strings(locale).copy_failed,
        }
    }
}

/// Transient banner shown above the question card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Copied,
    Failed(ViewError),
}

impl Notice {
    #[must_use]
    pub fn message(self, locale: Locale) -> &'static str {
        match self {
            Notice::Copied => strings(locale).copied,
            Notice::Failed(err) => err.message(locale),
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Notice::Failed(_))
    }
}
