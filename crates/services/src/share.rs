use quiz_core::model::{Locale, Question};

/// Plain-text rendering of a question for the clipboard.
///
/// `"<question>\nOptions: <o1>, <o2>, <o3>, <o4>"` in the given locale.
#[must_use]
pub fn share_text(question: &Question, locale: Locale) -> String {
    format!(
        "{}\nOptions: {}",
        question.text(locale),
        question.options(locale).join(", ")
    )
}
