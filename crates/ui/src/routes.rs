use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::QuizView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", QuizView)] Quiz {},
}
