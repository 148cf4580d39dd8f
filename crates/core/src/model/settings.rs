use thiserror::Error;

use crate::countdown::DEFAULT_TIME_LIMIT_SECS;
use crate::model::locale::Locale;

pub const MIN_TIME_LIMIT_SECS: u32 = 1;
pub const MAX_TIME_LIMIT_SECS: u32 = 3_600;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("time limit must be between 1 and 3600 seconds, got {secs}")]
    TimeLimitOutOfRange { secs: u32 },
}

/// Validated quiz configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    time_limit_secs: u32,
    default_locale: Locale,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            default_locale: Locale::En,
        }
    }
}

impl QuizSettings {
    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    #[must_use]
    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }
}

/// Partially specified settings; unset fields fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizSettingsDraft {
    pub time_limit_secs: Option<u32>,
    pub default_locale: Option<Locale>,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `SettingsError::TimeLimitOutOfRange` if the time limit is
    /// outside `1..=3600`.
    pub fn validate(self) -> Result<QuizSettings, SettingsError> {
        let defaults = QuizSettings::default();
        let time_limit_secs = self.time_limit_secs.unwrap_or(defaults.time_limit_secs);
        if !(MIN_TIME_LIMIT_SECS..=MAX_TIME_LIMIT_SECS).contains(&time_limit_secs) {
            return Err(SettingsError::TimeLimitOutOfRange {
                secs: time_limit_secs,
            });
        }

        Ok(QuizSettings {
            time_limit_secs,
            default_locale: self.default_locale.unwrap_or(defaults.default_locale),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_gives_defaults() {
        let settings = QuizSettingsDraft::new().validate().unwrap();
        assert_eq!(settings.time_limit_secs(), 60);
        assert_eq!(settings.default_locale(), Locale::En);
    }

    #[test]
    fn rejects_zero_time_limit() {
        let draft = QuizSettingsDraft {
            time_limit_secs: Some(0),
            ..QuizSettingsDraft::default()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            SettingsError::TimeLimitOutOfRange { secs: 0 }
        );
    }

    #[test]
    fn keeps_overrides() {
        let settings = QuizSettingsDraft {
            time_limit_secs: Some(90),
            default_locale: Some(Locale::Hi),
        }
        .validate()
        .unwrap();
        assert_eq!(settings.time_limit_secs(), 90);
        assert_eq!(settings.default_locale(), Locale::Hi);
    }
}
