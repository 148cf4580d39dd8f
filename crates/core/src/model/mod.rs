mod answers;
mod bank;
mod ids;
mod locale;
mod question;
mod score;
mod settings;

pub use answers::AnswerMap;
pub use bank::QuestionBank;
pub use ids::QuestionId;
pub use locale::{Locale, LocaleError};
pub use question::{Localized, OPTION_COUNT, OptionKey, Question, QuestionDraft, QuestionError};
pub use score::{Outcome, PENALTY_INCORRECT, POINTS_CORRECT, ScoreResult, classify};
pub use settings::{
    MAX_TIME_LIMIT_SECS, MIN_TIME_LIMIT_SECS, QuizSettings, QuizSettingsDraft, SettingsError,
};
