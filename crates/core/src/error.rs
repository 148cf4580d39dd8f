use thiserror::Error;

use crate::model::{LocaleError, QuestionError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Locale(#[from] LocaleError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Locale, QuizSettingsDraft};

    fn settings_from(time_limit: u32, locale: &str) -> Result<crate::model::QuizSettings, Error> {
        let default_locale: Locale = locale.parse()?;
        let settings = QuizSettingsDraft {
            time_limit_secs: Some(time_limit),
            default_locale: Some(default_locale),
        }
        .validate()?;
        Ok(settings)
    }

    #[test]
    fn layer_errors_convert_into_core_error() {
        assert!(settings_from(90, "hi").is_ok());
        assert!(matches!(settings_from(90, "fr"), Err(Error::Locale(_))));
        assert!(matches!(settings_from(0, "en"), Err(Error::Settings(_))));

        let err = Error::from(QuestionError::EmptyBank);
        assert_eq!(err.to_string(), QuestionError::EmptyBank.to_string());
    }
}
