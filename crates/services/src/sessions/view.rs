use chrono::{DateTime, Utc};
use quiz_core::model::{Locale, Outcome, ScoreResult, classify};

use super::service::{QuizSession, SubmitReason};

/// One row of the post-quiz answer review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    /// 1-based position in the quiz.
    pub number: usize,
    pub prompt: String,
    /// The chosen option's text, or `None` when the question was skipped.
    pub selected: Option<String>,
    pub correct_answer: String,
    pub outcome: Outcome,
}

/// Everything the results screen shows for a submitted session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub result: ScoreResult,
    pub reason: SubmitReason,
    pub locale: Locale,
    pub submitted_at: DateTime<Utc>,
    pub time_used_secs: u32,
    pub reviews: Vec<QuestionReview>,
}

impl SessionReport {
    /// Returns `None` until the session has been submitted.
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let result = session.result()?;
        let reason = session.submit_reason()?;
        let submitted_at = session.submitted_at()?;
        let locale = session.locale();

        let reviews = session
            .bank()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let answer = session.selected(index);
                QuestionReview {
                    number: index + 1,
                    prompt: question.text(locale).to_string(),
                    selected: answer.map(|key| question.option(locale, key).to_string()),
                    correct_answer: question.correct_answer(locale).to_string(),
                    outcome: classify(question, answer),
                }
            })
            .collect();

        Some(Self {
            result,
            reason,
            locale,
            submitted_at,
            time_used_secs: session.countdown().elapsed(),
            reviews,
        })
    }

    #[must_use]
    pub fn percent(&self, outcome: Outcome) -> f64 {
        self.result.percent(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quiz_core::model::{OptionKey, QuestionBank, QuizSettings};
    use quiz_core::time::fixed_now;

    use super::*;

    #[test]
    fn report_lists_every_question_in_order() {
        let bank = Arc::new(QuestionBank::builtin().unwrap());
        let mut session = QuizSession::new(bank, &QuizSettings::default(), fixed_now());
        session
            .select_option(0, session.bank().get(0).unwrap().correct_key())
            .unwrap();
        session
            .select_option(1, OptionKey::from_index(0).unwrap())
            .unwrap();
        session.tick(fixed_now());
        session.tick(fixed_now());
        assert!(SessionReport::from_session(&session).is_none());

        session.request_submit();
        session.confirm_submit(fixed_now()).unwrap();
        let report = SessionReport::from_session(&session).unwrap();

        assert_eq!(report.reviews.len(), 5);
        assert_eq!(report.time_used_secs, 2);
        assert_eq!(report.reason, SubmitReason::Manual);

        let first = &report.reviews[0];
        assert_eq!(first.number, 1);
        assert_eq!(first.selected.as_deref(), Some("Paris"));
        assert_eq!(first.outcome, Outcome::Correct);

        let second = &report.reviews[1];
        assert_eq!(second.selected.as_deref(), Some("Earth"));
        assert_eq!(second.correct_answer, "Mars");
        assert_eq!(second.outcome, Outcome::Incorrect);

        assert_eq!(report.reviews[4].selected, None);
        assert_eq!(report.reviews[4].outcome, Outcome::Unattempted);
    }
}
