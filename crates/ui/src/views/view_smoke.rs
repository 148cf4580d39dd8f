use std::time::Duration;

use quiz_core::model::{Locale, OptionKey, QuizSettings};
use services::{SubmissionPhase, SubmitReason};

use super::test_harness::{
    ClipboardMode, setup_view_harness, setup_view_harness_with, setup_view_harness_with_time_limit,
};
use crate::vm::QuizIntent;

fn key(index: usize) -> OptionKey {
    OptionKey::from_index(index).expect("option key")
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Question 1 out of 5"), "missing progress in {html}");
    assert!(html.contains("What is the capital of France?"), "missing prompt in {html}");
    assert!(html.contains("Paris"), "missing option in {html}");
    assert!(html.contains("01:00"), "missing timer in {html}");
    assert!(html.contains("quiz-submit"), "missing submit in {html}");
    assert!(harness.timer().is_active());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_select_and_navigate() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(key(2)));
    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 2 out of 5"), "missing progress in {html}");
    assert!(html.contains("Red Planet"), "missing prompt in {html}");

    // Stepping back past the first question is a no-op.
    harness.dispatch(QuizIntent::Previous);
    harness.dispatch(QuizIntent::Previous);
    let session = harness.session();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.selected(0), Some(key(2)));
    assert!(harness.render().contains("option--selected"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_submit_confirmation_flow() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(key(2)));
    for _ in 0..4 {
        harness.dispatch(QuizIntent::Next);
    }
    let html = harness.render();
    assert!(html.contains("quiz-submit"), "missing submit in {html}");

    harness.dispatch(QuizIntent::RequestSubmit);
    let html = harness.render();
    assert!(html.contains("Submit Quiz?"), "missing modal in {html}");
    assert!(html.contains("Unattempted Questions: 4"), "missing count in {html}");
    assert!(
        html.contains("Once submitted, you cannot modify your answers."),
        "missing warning in {html}"
    );

    harness.dispatch(QuizIntent::CancelSubmit);
    assert!(!harness.render().contains("Submit Quiz?"));
    assert_eq!(harness.session().phase(), SubmissionPhase::InProgress);
    assert_eq!(harness.session().answers().len(), 1);

    harness.dispatch(QuizIntent::RequestSubmit);
    harness.dispatch(QuizIntent::ConfirmSubmit);
    let session = harness.session();
    assert!(session.is_submitted());
    assert_eq!(session.submit_reason(), Some(SubmitReason::Manual));
    assert!(!harness.timer().is_active());

    let html = harness.render();
    assert!(html.contains("Score: 10"), "missing score in {html}");
    assert!(html.contains("Correct: 1 / 5"), "missing correct line in {html}");
    assert!(html.contains("Unattempted: 4 / 5"), "missing unattempted line in {html}");
    assert!(html.contains("20.00%"), "missing percentage in {html}");
    assert!(html.contains("Not answered"), "missing review in {html}");
    assert!(html.contains("#4caf50"), "missing chart colour in {html}");
    assert!(html.contains("Correct: 20.00%"), "missing arc label in {html}");
    assert!(html.contains("Show answers"), "missing review toggle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_submit_from_first_question() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 out of 5"), "missing progress in {html}");
    assert!(html.contains("quiz-submit"), "missing submit in {html}");

    harness.dispatch(QuizIntent::Select(key(2)));
    harness.dispatch(QuizIntent::RequestSubmit);
    let html = harness.render();
    assert!(html.contains("Unattempted Questions: 4"), "missing modal in {html}");

    harness.dispatch(QuizIntent::ConfirmSubmit);
    let session = harness.session();
    assert!(session.is_submitted());
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.result().map(|result| result.score()), Some(10));
    assert!(harness.render().contains("Score: 10"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_try_again_resets() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(key(0)));
    harness.dispatch(QuizIntent::Next);
    harness.dispatch(QuizIntent::RequestSubmit);
    harness.dispatch(QuizIntent::ConfirmSubmit);
    assert!(harness.render().contains("Try Again"));

    harness.dispatch(QuizIntent::TryAgain);
    let session = harness.session();
    assert!(!session.is_submitted());
    assert_eq!(session.current_index(), 0);
    assert!(session.answers().is_empty());
    assert_eq!(session.remaining_secs(), 60);
    assert!(harness.timer().is_active());

    let html = harness.render();
    assert!(html.contains("Question 1 out of 5"), "missing progress in {html}");
    assert!(html.contains("01:00"), "missing timer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_share_copies_question() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Share);
    assert_eq!(
        harness.clipboard.writes(),
        vec!["What is the capital of France?\nOptions: Berlin, Madrid, Paris, Rome".to_string()]
    );
    let html = harness.render();
    assert!(html.contains("Question copied to clipboard!"), "missing notice in {html}");

    harness.dispatch(QuizIntent::DismissNotice);
    assert!(!harness.render().contains("Question copied to clipboard!"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_clipboard_failure_shows_notice() {
    let mut harness = setup_view_harness_with(QuizSettings::default(), ClipboardMode::Failing);
    harness.rebuild();

    harness.dispatch(QuizIntent::Share);
    let html = harness.render();
    assert!(html.contains("Could not copy the question"), "missing notice in {html}");
    assert!(html.contains("notice--error"), "missing error style in {html}");
    assert!(!harness.session().is_submitted());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_locale_toggle_keeps_answers() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(key(2)));
    harness.dispatch(QuizIntent::ToggleLocale);
    let html = harness.render();
    assert!(html.contains("फ्रांस की राजधानी क्या है?"), "missing hindi prompt in {html}");
    assert!(html.contains("पेरिस"), "missing hindi option in {html}");
    assert!(html.contains("English"), "missing switch-back label in {html}");

    let session = harness.session();
    assert_eq!(session.locale(), Locale::Hi);
    assert_eq!(session.selected(0), Some(key(2)));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_theme_toggle() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    assert!(harness.render().contains("theme-light"));

    harness.dispatch(QuizIntent::ToggleTheme);
    let html = harness.render();
    assert!(html.contains("app-root theme-dark"), "missing dark theme in {html}");
    assert!(html.contains("Light Mode"), "missing toggle label in {html}");

    // The theme belongs to the shell, so it survives submitting.
    harness.dispatch(QuizIntent::RequestSubmit);
    harness.dispatch(QuizIntent::ConfirmSubmit);
    assert!(harness.render().contains("app-root theme-dark"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_timer_expiry_submits_once() {
    let mut harness = setup_view_harness_with_time_limit(1);
    harness.rebuild();
    assert!(harness.render().contains("00:01"));

    for _ in 0..5 {
        if harness.session().is_submitted() {
            break;
        }
        harness.drive_for(Duration::from_millis(1500)).await;
    }

    let session = harness.session();
    assert!(session.is_submitted(), "timer never expired");
    assert_eq!(session.submit_reason(), Some(SubmitReason::TimeExpired));
    assert_eq!(session.remaining_secs(), 0);
    assert!(!harness.timer().is_active());

    let html = harness.render();
    assert!(html.contains("Time is up!"), "missing expiry banner in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
}
