#![forbid(unsafe_code)]

pub mod clipboard;
pub mod error;
pub mod question_source;
pub mod sessions;
pub mod share;

pub use quiz_core::Clock;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use error::{ClipboardError, QuestionBankError, SessionError};
pub use question_source::{QuestionSource, parse_question_bank};
pub use share::share_text;

pub use sessions::{
    QuestionReview, QuizService, QuizSession, SessionProgress, SessionReport, SessionState,
    SessionTick, SubmissionPhase, SubmitReason,
};
