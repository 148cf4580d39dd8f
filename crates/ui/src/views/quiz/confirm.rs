use dioxus::prelude::*;
use quiz_core::model::Locale;

use crate::vm::{QuizIntent, strings};

/// Last chance before the answers are scored.
#[component]
pub(super) fn ConfirmModal(
    locale: Locale,
    unattempted: usize,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let text = strings(locale);

    rsx! {
        div { class: "modal-overlay",
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "confirm-title",
                h2 { class: "modal__title", id: "confirm-title", "{text.confirm_title}" }
                p { class: "modal__count", "{text.unattempted_questions}: {unattempted}" }
                p { class: "modal__warning", "{text.confirm_warning}" }
                div { class: "modal__actions",
                    button {
                        class: "btn btn--primary",
                        id: "confirm-yes",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::ConfirmSubmit),
                        "{text.yes}"
                    }
                    button {
                        class: "btn",
                        id: "confirm-no",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::CancelSubmit),
                        "{text.no}"
                    }
                }
            }
        }
    }
}
