use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;

/// Owner of the running countdown task.
///
/// At most one task is tracked. Cancelling is idempotent, and installing a
/// new task cancels the previous one first.
#[derive(Clone, Default)]
pub struct TimerHandle {
    task: Rc<Cell<Option<Task>>>,
}

impl TimerHandle {
    pub fn replace(&self, task: Task) {
        if let Some(previous) = self.task.replace(Some(task)) {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }

    /// Forget the tracked task without cancelling it. Used by the task itself
    /// when it finishes on its own.
    pub fn release(&self) {
        self.task.set(None);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        let task = self.task.get();
        task.is_some()
    }
}
