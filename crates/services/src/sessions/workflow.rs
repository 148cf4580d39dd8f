use std::sync::Arc;

use quiz_core::model::{QuestionBank, QuizSettings, ScoreResult};

use super::service::{QuizSession, SessionTick};
use super::view::SessionReport;
use crate::Clock;

/// Starts quiz sessions and stamps their transitions with the service clock.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, bank: Arc<QuestionBank>, settings: QuizSettings) -> Self {
        Self {
            clock,
            bank,
            settings,
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        tracing::info!(
            questions = self.bank.len(),
            time_limit_secs = self.settings.time_limit_secs(),
            "starting quiz session"
        );
        QuizSession::new(Arc::clone(&self.bank), &self.settings, self.clock.now())
    }

    pub fn tick(&self, session: &mut QuizSession) -> SessionTick {
        session.tick(self.clock.now())
    }

    pub fn confirm_submit(&self, session: &mut QuizSession) -> Option<ScoreResult> {
        session.confirm_submit(self.clock.now())
    }

    /// "Try again": reset the session in place.
    pub fn restart(&self, session: &mut QuizSession) {
        session.reset(self.clock.now());
    }

    /// Report for a submitted session, in its current display locale.
    #[must_use]
    pub fn report(&self, session: &QuizSession) -> Option<SessionReport> {
        SessionReport::from_session(session)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use quiz_core::time::fixed_now;

    use super::*;

    #[test]
    fn submission_is_stamped_with_service_clock() {
        let mut clock = Clock::fixed(fixed_now());
        let bank = Arc::new(QuestionBank::builtin().unwrap());
        let service = QuizService::new(clock, Arc::clone(&bank), QuizSettings::default());
        let mut session = service.start_session();
        assert_eq!(session.started_at(), fixed_now());

        clock.advance(Duration::seconds(42));
        let later = QuizService::new(clock, bank, QuizSettings::default());
        session.request_submit();
        later.confirm_submit(&mut session).unwrap();
        assert_eq!(session.submitted_at(), Some(fixed_now() + Duration::seconds(42)));
    }

    #[test]
    fn restart_resets_session() {
        let service = QuizService::new(
            Clock::fixed(fixed_now()),
            Arc::new(QuestionBank::builtin().unwrap()),
            QuizSettings::default(),
        );
        let mut session = service.start_session();
        let initial = session.state();
        for _ in 0..60 {
            service.tick(&mut session);
        }
        assert!(service.report(&session).is_some());

        service.restart(&mut session);
        assert_eq!(session.state(), initial);
        assert!(service.report(&session).is_none());
    }
}
