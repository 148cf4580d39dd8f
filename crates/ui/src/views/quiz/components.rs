use dioxus::prelude::*;
use quiz_core::model::Locale;

use crate::theme::Theme;
use crate::views::Notice;
use crate::vm::{OptionVm, QuizIntent, strings};

#[component]
pub(super) fn QuizNavbar(
    locale: Locale,
    /// Empty once the quiz is submitted.
    timer_label: String,
    timer_urgent: bool,
    theme: Theme,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let text = strings(locale);
    let theme_label = theme.toggle_label(locale);
    // The button names the language it switches to.
    let switch_to = locale.toggled().native_name();
    let timer_class = if timer_urgent {
        "navbar__timer navbar__timer--urgent"
    } else {
        "navbar__timer"
    };

    rsx! {
        header { class: "navbar",
            h1 { class: "navbar__brand", "Quiz20" }
            div { class: "navbar__controls",
                if !timer_label.is_empty() {
                    span { class: timer_class, id: "quiz-timer", "{timer_label}" }
                }
                button {
                    class: "btn btn--ghost",
                    id: "quiz-translate",
                    r#type: "button",
                    title: "{text.translate}",
                    onclick: move |_| on_intent.call(QuizIntent::ToggleLocale),
                    "{switch_to}"
                }
                button {
                    class: "btn btn--ghost",
                    id: "quiz-theme",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::ToggleTheme),
                    "{theme_label}"
                }
            }
        }
    }
}

#[component]
pub(super) fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let class = if option.selected {
        "option option--selected"
    } else {
        "option"
    };
    let pressed = if option.selected { "true" } else { "false" };
    let key = option.key;

    rsx! {
        button {
            class,
            r#type: "button",
            aria_pressed: pressed,
            onclick: move |_| on_intent.call(QuizIntent::Select(key)),
            span { class: "option__letter", "{option.letter}" }
            span { class: "option__text", "{option.text}" }
        }
    }
}

#[component]
pub(super) fn NoticeBanner(
    notice: Notice,
    locale: Locale,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let text = strings(locale);
    let class = if notice.is_error() {
        "notice notice--error"
    } else {
        "notice notice--success"
    };
    let message = notice.message(locale);

    rsx! {
        div { class, role: "status",
            span { "{message}" }
            button {
                class: "notice__dismiss",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::DismissNotice),
                "{text.dismiss}"
            }
        }
    }
}
