mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::{SessionProgress, SessionState};
pub use service::{QuizSession, SessionTick, SubmissionPhase, SubmitReason};
pub use view::{QuestionReview, SessionReport};
pub use workflow::QuizService;
