use std::sync::Arc;

use chrono::{DateTime, Utc};
use quiz_core::model::{
    AnswerMap, Locale, OptionKey, Question, QuestionBank, QuizSettings, ScoreResult,
};
use quiz_core::{Countdown, TickOutcome};

use super::progress::{SessionProgress, SessionState};
use crate::error::SessionError;
use crate::share::share_text;

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Where the session is in the submit flow.
///
/// `InProgress -> ConfirmPending -> Submitted`, or straight to `Submitted`
/// when the timer runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    InProgress,
    ConfirmPending,
    Submitted,
}

/// Why a session was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitReason {
    Manual,
    TimeExpired,
}

/// Result of advancing the session timer by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTick {
    Running { remaining: u32 },
    /// Time ran out on this tick and the session was submitted.
    Expired(ScoreResult),
    /// Nothing to do: the session is already submitted.
    Idle,
}

impl SessionTick {
    /// True when the host should stop scheduling ticks.
    #[must_use]
    pub fn is_final(self) -> bool {
        !matches!(self, SessionTick::Running { .. })
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at the quiz.
///
/// Holds navigation, recorded answers, the countdown, the display locale and
/// the submit flow. All transitions are plain methods; the host UI owns the
/// value and schedules [`QuizSession::tick`] once per second.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    current: usize,
    answers: AnswerMap,
    countdown: Countdown,
    locale: Locale,
    phase: SubmissionPhase,
    result: Option<ScoreResult>,
    submit_reason: Option<SubmitReason>,
    started_at: DateTime<Utc>,
    submitted_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// `started_at` should come from the services layer clock.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, settings: &QuizSettings, started_at: DateTime<Utc>) -> Self {
        Self {
            bank,
            current: 0,
            answers: AnswerMap::new(),
            countdown: Countdown::new(settings.time_limit_secs()),
            locale: settings.default_locale(),
            phase: SubmissionPhase::InProgress,
            result: None,
            submit_reason: None,
            started_at,
            submitted_at: None,
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.current)
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn selected(&self, index: usize) -> Option<OptionKey> {
        self.answers.get(index)
    }

    #[must_use]
    pub fn selected_current(&self) -> Option<OptionKey> {
        self.answers.get(self.current)
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn result(&self) -> Option<ScoreResult> {
        self.result
    }

    #[must_use]
    pub fn submit_reason(&self) -> Option<SubmitReason> {
        self.submit_reason
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.current < self.bank.last_index()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState {
            current_index: self.current,
            answers: self.answers.clone(),
            remaining_secs: self.countdown.remaining(),
            locale: self.locale,
            submitted: self.is_submitted(),
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.bank.len();
        let answered = self.answers.len();
        SessionProgress {
            total,
            answered,
            unattempted: total.saturating_sub(answered),
        }
    }

    /// Clipboard text for the current question in the active locale.
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.current_question()
            .map(|question| share_text(question, self.locale))
    }

    // ─── Answers ──────────────────────────────────────────────────────────────

    /// Record (or overwrite) the answer for `index`. Does not move the cursor.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Submitted` once the session is submitted and
    /// `SessionError::QuestionOutOfRange` for an index outside the bank.
    pub fn select_option(&mut self, index: usize, key: OptionKey) -> Result<(), SessionError> {
        if self.is_submitted() {
            return Err(SessionError::Submitted);
        }
        if index >= self.bank.len() {
            return Err(SessionError::QuestionOutOfRange {
                index,
                total: self.bank.len(),
            });
        }
        self.answers.record(index, key);
        tracing::debug!(index, option = %key, "answer recorded");
        Ok(())
    }

    /// # Errors
    ///
    /// Same as [`QuizSession::select_option`].
    pub fn select_current(&mut self, key: OptionKey) -> Result<(), SessionError> {
        self.select_option(self.current, key)
    }

    // ─── Navigation ───────────────────────────────────────────────────────────

    /// Jump to `index`. Out-of-range targets leave the cursor where it is.
    ///
    /// Returns whether the cursor moved.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.bank.len() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    pub fn next(&mut self) -> bool {
        match self.current.checked_add(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    /// Flip the display language. Recorded answers are unaffected.
    pub fn switch_locale(&mut self) -> Locale {
        self.locale = self.locale.toggled();
        self.locale
    }

    // ─── Submit flow ──────────────────────────────────────────────────────────

    /// Ask for confirmation before submitting. Only valid while in progress.
    pub fn request_submit(&mut self) -> bool {
        if self.phase != SubmissionPhase::InProgress {
            return false;
        }
        self.phase = SubmissionPhase::ConfirmPending;
        true
    }

    /// Dismiss the confirmation; answers stay as they were.
    pub fn cancel_submit(&mut self) -> bool {
        if self.phase != SubmissionPhase::ConfirmPending {
            return false;
        }
        self.phase = SubmissionPhase::InProgress;
        true
    }

    /// Submit after confirmation. Returns `None` unless confirmation is
    /// pending.
    pub fn confirm_submit(&mut self, now: DateTime<Utc>) -> Option<ScoreResult> {
        if self.phase != SubmissionPhase::ConfirmPending {
            return None;
        }
        Some(self.submit(SubmitReason::Manual, now))
    }

    /// Take one second off the clock, submitting if it hits zero.
    ///
    /// Keeps counting while confirmation is pending. After submission every
    /// tick is `Idle`.
    pub fn tick(&mut self, now: DateTime<Utc>) -> SessionTick {
        if self.is_submitted() {
            return SessionTick::Idle;
        }
        match self.countdown.tick() {
            TickOutcome::Running { remaining } => SessionTick::Running { remaining },
            TickOutcome::Expired => {
                tracing::info!("time is up, submitting quiz");
                SessionTick::Expired(self.submit(SubmitReason::TimeExpired, now))
            }
            TickOutcome::Idle => SessionTick::Idle,
        }
    }

    /// Start over: first question, no answers, full clock, nothing submitted.
    ///
    /// The display locale is a preference and survives the reset.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.current = 0;
        self.answers.clear();
        self.countdown.reset();
        self.phase = SubmissionPhase::InProgress;
        self.result = None;
        self.submit_reason = None;
        self.started_at = now;
        self.submitted_at = None;
        tracing::info!(questions = self.bank.len(), "quiz session reset");
    }

    fn submit(&mut self, reason: SubmitReason, now: DateTime<Utc>) -> ScoreResult {
        self.countdown.stop();
        let result = ScoreResult::compute(&self.bank, &self.answers);
        self.phase = SubmissionPhase::Submitted;
        self.result = Some(result);
        self.submit_reason = Some(reason);
        self.submitted_at = Some(now);
        tracing::info!(
            ?reason,
            correct = result.correct(),
            incorrect = result.incorrect(),
            unattempted = result.unattempted(),
            score = result.score(),
            "quiz submitted"
        );
        result
    }
}
