use quiz_core::model::Locale;

use crate::vm::strings;

/// Page colour scheme, shared through context from [`crate::app::AppShell`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Label of the button that switches away from this theme.
    #[must_use]
    pub fn toggle_label(self, locale: Locale) -> &'static str {
        let text = strings(locale);
        match self {
            Theme::Light => text.dark_mode,
            Theme::Dark => text.light_mode,
        }
    }
}
