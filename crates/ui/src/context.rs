use std::sync::Arc;

use services::{ClipboardSink, QuizService};

pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;
    fn clipboard(&self) -> Arc<dyn ClipboardSink>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_service: Arc<QuizService>,
    clipboard: Arc<dyn ClipboardSink>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_service: app.quiz_service(),
            clipboard: app.clipboard(),
        }
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    #[must_use]
    pub fn clipboard(&self) -> Arc<dyn ClipboardSink> {
        Arc::clone(&self.clipboard)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
