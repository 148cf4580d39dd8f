use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;
use quiz_core::model::{QuestionBank, QuizSettings, QuizSettingsDraft};
use quiz_core::time::fixed_now;
use services::{ClipboardError, ClipboardSink, Clock, QuizService, QuizSession};

use crate::app::AppShell;
use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::timer::TimerHandle;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("clipboard lock").clone()
    }
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes
            .lock()
            .expect("clipboard lock")
            .push(text.to_string());
        Ok(())
    }
}

struct FailingClipboard;

impl ClipboardSink for FailingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no display".to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardMode {
    Recording,
    Failing,
}

struct TestApp {
    quiz_service: Arc<QuizService>,
    clipboard: Arc<dyn ClipboardSink>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn clipboard(&self) -> Arc<dyn ClipboardSink> {
        Arc::clone(&self.clipboard)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! {
        AppShell { Router::<Route> {} }
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
    pub clipboard: Arc<RecordingClipboard>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Wait up to `limit` for spawned work (the countdown) to wake, then render.
    pub async fn drive_for(&mut self, limit: Duration) {
        let _ = tokio::time::timeout(limit, self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn session(&self) -> QuizSession {
        let session = self.handles.session();
        self.dom.in_runtime(|| QuizSession::clone(&session.peek()))
    }

    pub fn timer(&self) -> TimerHandle {
        self.handles.timer()
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> ViewHarness {
    setup_view_harness_with(QuizSettings::default(), ClipboardMode::Recording)
}

pub fn setup_view_harness_with_time_limit(secs: u32) -> ViewHarness {
    let settings = QuizSettingsDraft {
        time_limit_secs: Some(secs),
        default_locale: None,
    }
    .validate()
    .expect("valid settings");
    setup_view_harness_with(settings, ClipboardMode::Recording)
}

pub fn setup_view_harness_with(settings: QuizSettings, mode: ClipboardMode) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let bank = Arc::new(QuestionBank::builtin().expect("builtin bank"));
    let quiz_service = Arc::new(QuizService::new(clock, bank, settings));

    let recording = Arc::new(RecordingClipboard::default());
    let clipboard: Arc<dyn ClipboardSink> = match mode {
        ClipboardMode::Recording => recording.clone(),
        ClipboardMode::Failing => Arc::new(FailingClipboard),
    };

    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        quiz_service,
        clipboard,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        handles,
        clipboard: recording,
    }
}
