use std::time::Duration;

use dioxus::prelude::*;
use quiz_core::model::OptionKey;
use services::SubmissionPhase;

use super::components::{NoticeBanner, OptionButton, QuizNavbar};
use super::confirm::ConfirmModal;
use crate::context::AppContext;
use crate::theme::Theme;
use crate::timer::TimerHandle;
use crate::views::{Notice, ReportView, ViewError};
use crate::vm::{QuizIntent, map_quiz_screen, strings};

#[cfg(test)]
use services::QuizSession;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// `1`-`4` and `a`-`d` pick an option.
fn option_for_key(value: &str) -> Option<OptionKey> {
    let index = match value {
        "1" | "a" | "A" => 0,
        "2" | "b" | "B" => 1,
        "3" | "c" | "C" => 2,
        "4" | "d" | "D" => 3,
        _ => return None,
    };
    OptionKey::from_index(index)
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.quiz_service();
    let clipboard = ctx.clipboard();

    let session = use_signal({
        let service = service.clone();
        move || service.start_session()
    });
    let notice = use_signal(|| None::<Notice>);
    let theme = use_context::<Signal<Theme>>();
    let timer = use_hook(TimerHandle::default);

    let start_timer = {
        let service = service.clone();
        let timer = timer.clone();
        use_callback(move |()| {
            let service = service.clone();
            let own_handle = timer.clone();
            let mut session = session;
            let task = spawn(async move {
                loop {
                    tokio::time::sleep(TICK_INTERVAL).await;
                    let tick = service.tick(&mut session.write());
                    if tick.is_final() {
                        // Stop before yielding so no tick lands after expiry.
                        own_handle.release();
                        break;
                    }
                }
            });
            timer.replace(task);
        })
    };

    use_hook(move || start_timer.call(()));
    use_drop({
        let timer = timer.clone();
        move || timer.cancel()
    });

    let dispatch = {
        let service = service.clone();
        let timer = timer.clone();
        use_callback(move |intent: QuizIntent| {
            let mut session = session;
            let mut notice = notice;
            let mut theme = theme;

            match intent {
                QuizIntent::Select(key) => {
                    if let Err(err) = session.write().select_current(key) {
                        tracing::debug!(error = %err, "selection ignored");
                    }
                }
                QuizIntent::Previous => {
                    if session.write().previous() {
                        notice.set(None);
                    }
                }
                QuizIntent::Next => {
                    if session.write().next() {
                        notice.set(None);
                    }
                }
                QuizIntent::ToggleLocale => {
                    let locale = session.write().switch_locale();
                    tracing::debug!(locale = %locale, "display language switched");
                }
                QuizIntent::Share => {
                    let Some(text) = session.read().share_text() else {
                        return;
                    };
                    match clipboard.write_text(&text) {
                        Ok(()) => notice.set(Some(Notice::Copied)),
                        Err(err) => {
                            tracing::warn!(error = %err, "failed to copy question");
                            notice.set(Some(Notice::Failed(ViewError::Clipboard)));
                        }
                    }
                }
                QuizIntent::RequestSubmit => {
                    session.write().request_submit();
                }
                QuizIntent::CancelSubmit => {
                    session.write().cancel_submit();
                }
                QuizIntent::ConfirmSubmit => {
                    if service.confirm_submit(&mut session.write()).is_some() {
                        timer.cancel();
                    }
                }
                QuizIntent::TryAgain => {
                    service.restart(&mut session.write());
                    notice.set(None);
                    start_timer.call(());
                }
                QuizIntent::ToggleTheme => {
                    let next = theme.peek().toggled();
                    theme.set(next);
                }
                QuizIntent::DismissNotice => notice.set(None),
            }
        })
    };

    #[cfg(test)]
    {
        let timer = timer.clone();
        use_hook(move || {
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, session, timer);
            }
        });
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let phase = session.peek().phase();
        match phase {
            SubmissionPhase::Submitted => {}
            SubmissionPhase::ConfirmPending => {
                if evt.data.key() == Key::Escape {
                    evt.prevent_default();
                    dispatch.call(QuizIntent::CancelSubmit);
                }
            }
            SubmissionPhase::InProgress => match evt.data.key() {
                Key::ArrowLeft => {
                    evt.prevent_default();
                    dispatch.call(QuizIntent::Previous);
                }
                Key::ArrowRight => {
                    evt.prevent_default();
                    dispatch.call(QuizIntent::Next);
                }
                Key::Character(value) => {
                    if let Some(key) = option_for_key(&value) {
                        evt.prevent_default();
                        dispatch.call(QuizIntent::Select(key));
                    }
                }
                _ => {}
            },
        }
    });

    let guard = session.read();
    let locale = guard.locale();
    let text = strings(locale);
    let report = service.report(&guard);
    let screen = map_quiz_screen(&guard);
    drop(guard);
    let timer_label = screen
        .as_ref()
        .map(|screen| screen.timer_label.clone())
        .unwrap_or_default();
    let timer_urgent = screen.as_ref().is_some_and(|screen| screen.timer_urgent);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            QuizNavbar {
                locale,
                timer_label,
                timer_urgent,
                theme: theme(),
                on_intent: dispatch,
            }

            if let Some(notice) = notice() {
                NoticeBanner { notice, locale, on_intent: dispatch }
            }

            if let Some(report) = report {
                ReportView {
                    report,
                    on_try_again: move |()| dispatch.call(QuizIntent::TryAgain),
                }
            } else if let Some(screen) = screen {
                section { class: "quiz-card",
                    p { class: "quiz-card__progress", "{screen.progress_label}" }
                    h2 { class: "quiz-card__prompt", "{screen.prompt}" }

                    div { class: "quiz-card__options",
                        for option in screen.options.iter().cloned() {
                            OptionButton { key: "{option.letter}", option, on_intent: dispatch }
                        }
                    }

                    div { class: "quiz-card__actions",
                        button {
                            class: "btn",
                            id: "quiz-previous",
                            r#type: "button",
                            disabled: !screen.can_go_previous,
                            onclick: move |_| dispatch.call(QuizIntent::Previous),
                            "{text.previous}"
                        }
                        button {
                            class: "btn btn--ghost",
                            id: "quiz-share",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizIntent::Share),
                            "{text.share}"
                        }
                        button {
                            class: "btn",
                            id: "quiz-next",
                            r#type: "button",
                            disabled: !screen.can_go_next,
                            onclick: move |_| dispatch.call(QuizIntent::Next),
                            "{text.next}"
                        }
                        // Submitting is allowed from any question.
                        button {
                            class: "btn btn--primary",
                            id: "quiz-submit",
                            r#type: "button",
                            onclick: move |_| dispatch.call(QuizIntent::RequestSubmit),
                            "{text.submit}"
                        }
                    }
                }

                if let Some(confirm) = screen.confirm.as_ref() {
                    ConfirmModal { locale, unattempted: confirm.unattempted, on_intent: dispatch }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<QuizSession>>>>,
    timer: Rc<RefCell<Option<TimerHandle>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        session: Signal<QuizSession>,
        timer: TimerHandle,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
        *self.timer.borrow_mut() = Some(timer);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<QuizSession> {
        (*self.session.borrow()).expect("quiz session registered")
    }

    pub(crate) fn timer(&self) -> TimerHandle {
        self.timer.borrow().clone().expect("quiz timer registered")
    }
}
