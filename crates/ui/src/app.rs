use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;
use crate::theme::Theme;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Quiz20" }

        AppShell { Router::<Route> {} }
    }
}

/// Root container. Provides the `Signal<Theme>` context and carries the
/// theme class so every screen picks up the same colours.
#[component]
pub fn AppShell(children: Element) -> Element {
    let theme = use_context_provider(|| Signal::new(Theme::default()));

    rsx! {
        div { class: "app-root {theme().class()}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                {children}
            }
        }
    }
}
