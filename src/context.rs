//! Task Page Context
//!
//! Shared handle to the controller, provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::ReqwestClient;
use crate::controller::TaskListController;
use crate::models::Task;
use crate::store::TaskStore;

/// Controller as wired in the browser
pub type PageController = TaskListController<ReqwestClient, TaskStore>;

/// Page-wide actions provided via context
#[derive(Clone, Copy)]
pub struct TaskContext {
    controller: StoredValue<PageController, LocalStorage>,
    /// How long a non-sticky notice stays on screen
    pub notice_timeout_ms: u32,
}

impl TaskContext {
    pub fn new(controller: PageController, notice_timeout_ms: u32) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            notice_timeout_ms,
        }
    }

    fn controller(&self) -> PageController {
        self.controller.get_value()
    }

    pub fn role_label(&self) -> &'static str {
        self.controller.with_value(|c| c.session().role_label())
    }

    /// Trigger a reload of tasks
    pub fn reload(&self) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.fetch_tasks().await;
        });
    }

    pub fn toggle(&self, task: Task) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.toggle_task(&task).await;
        });
    }

    pub fn delete(&self, task: Task) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.delete_task(&task).await;
        });
    }

    /// Submit the add form
    pub fn add(&self) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.add_task().await;
        });
    }

    pub fn set_draft(&self, description: String) {
        self.controller.with_value(|c| c.set_draft(description));
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.controller.with_value(|c| c.dismiss_notice(id));
    }
}
