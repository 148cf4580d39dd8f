use quiz_core::model::{Locale, OptionKey};
use services::{QuizSession, SubmissionPhase};

use crate::vm::strings::strings;
use crate::vm::time_fmt::format_countdown;

/// Everything the quiz screen can ask the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(OptionKey),
    Previous,
    Next,
    ToggleLocale,
    Share,
    RequestSubmit,
    CancelSubmit,
    ConfirmSubmit,
    TryAgain,
    ToggleTheme,
    DismissNotice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub key: OptionKey,
    pub letter: char,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmVm {
    pub unattempted: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub locale: Locale,
    pub progress_label: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub timer_label: String,
    /// Under ten seconds left.
    pub timer_urgent: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub confirm: Option<ConfirmVm>,
}

/// Build the quiz screen for an unsubmitted session.
///
/// Returns `None` once the session is submitted; the report takes over then.
#[must_use]
pub fn map_quiz_screen(session: &QuizSession) -> Option<QuizScreenVm> {
    if session.is_submitted() {
        return None;
    }
    let question = session.current_question()?;
    let locale = session.locale();
    let text = strings(locale);
    let selected = session.selected_current();

    let options = OptionKey::ALL
        .iter()
        .map(|&key| OptionVm {
            key,
            letter: key.letter(),
            text: question.option(locale, key).to_string(),
            selected: selected == Some(key),
        })
        .collect();

    let confirm = (session.phase() == SubmissionPhase::ConfirmPending).then(|| ConfirmVm {
        unattempted: session.progress().unattempted,
    });

    Some(QuizScreenVm {
        locale,
        progress_label: format!(
            "{} {} {} {}",
            text.question,
            session.current_index() + 1,
            text.out_of,
            session.total_questions()
        ),
        prompt: question.text(locale).to_string(),
        options,
        timer_label: format_countdown(session.remaining_secs()),
        timer_urgent: session.remaining_secs() < 10,
        can_go_previous: session.can_go_previous(),
        can_go_next: session.can_go_next(),
        confirm,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quiz_core::model::{QuestionBank, QuizSettings};
    use quiz_core::time::fixed_now;

    use super::*;

    fn session() -> QuizSession {
        let bank = Arc::new(QuestionBank::builtin().unwrap());
        QuizSession::new(bank, &QuizSettings::default(), fixed_now())
    }

    #[test]
    fn first_question_has_no_previous() {
        let vm = map_quiz_screen(&session()).unwrap();
        assert_eq!(vm.progress_label, "Question 1 out of 5");
        assert_eq!(vm.timer_label, "01:00");
        assert!(!vm.can_go_previous);
        assert!(vm.can_go_next);
        assert_eq!(vm.options.len(), 4);
        assert!(vm.options.iter().all(|option| !option.selected));
        assert!(vm.confirm.is_none());
    }

    #[test]
    fn last_question_has_no_next() {
        let mut session = session();
        assert!(session.go_to(4));
        let vm = map_quiz_screen(&session).unwrap();
        assert_eq!(vm.progress_label, "Question 5 out of 5");
        assert!(vm.can_go_previous);
        assert!(!vm.can_go_next);
    }

    #[test]
    fn selection_survives_locale_switch() {
        let mut session = session();
        let key = OptionKey::from_index(2).unwrap();
        session.select_current(key).unwrap();
        session.switch_locale();

        let vm = map_quiz_screen(&session).unwrap();
        assert_eq!(vm.locale, Locale::Hi);
        assert_eq!(vm.progress_label, "प्रश्न 1 में से 5");
        let chosen: Vec<_> = vm.options.iter().filter(|option| option.selected).collect();
        assert_eq!(chosen.len(), 1);
        assert_eq!(chosen[0].key, key);
    }

    #[test]
    fn confirm_shows_live_unattempted_count() {
        let mut session = session();
        session
            .select_current(OptionKey::from_index(0).unwrap())
            .unwrap();
        session.request_submit();

        let vm = map_quiz_screen(&session).unwrap();
        assert_eq!(vm.confirm, Some(ConfirmVm { unattempted: 4 }));
    }

    #[test]
    fn submitted_session_has_no_quiz_screen() {
        let mut session = session();
        session.request_submit();
        session.confirm_submit(fixed_now()).unwrap();
        assert!(map_quiz_screen(&session).is_none());
    }
}
