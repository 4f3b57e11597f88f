//! Task List Controller
//!
//! Fetch / mutate / re-fetch cycles behind the task page. Every mutation is followed
//! by a full reload of the list; nothing is patched locally.


use std::future::Future;

use crate::commands::{HttpClient, TaskApi};
use crate::config::{AppConfig, DraftResetPolicy, ErrorPolicy};
use crate::error::TaskResult;
use crate::models::{AuthSession, Task};
use crate::store::StateCell;

/// Failure handling choices for the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Policies {
    pub draft_reset: DraftResetPolicy,
    pub errors: ErrorPolicy,
}

impl From<&AppConfig> for Policies {
    fn from(config: &AppConfig) -> Self {
        Self {
            draft_reset: config.draft_reset,
            errors: config.error_policy,
        }
    }
}

#[derive(Clone)]
pub struct TaskListController<H, S> {
    api: TaskApi<H>,
    state: S,
    policies: Policies,
}

impl<H: HttpClient, S: StateCell> TaskListController<H, S> {
    pub fn new(api: TaskApi<H>, state: S, policies: Policies) -> Self {
        Self { api, state, policies }
    }

    pub fn session(&self) -> &AuthSession {
        self.api.session()
    }

    #[cfg(test)]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Reload the whole list. On failure the previous list stays on screen.
    pub async fn fetch_tasks(&self) -> TaskResult<()> {
        self.state.apply(|s| s.begin_request());
        let result = self.api.list_tasks().await.map(|tasks| {
            log::debug!("[TASKS] Loaded {} tasks", tasks.len());
            self.state.apply(|s| s.replace_tasks(tasks));
        });
        self.state.apply(|s| s.end_request());
        self.report("fetch", result)
    }

    /// Delete, then resync. A failed delete leaves the list as it was.
    pub async fn delete_task(&self, task: &Task) -> TaskResult<()> {
        let deleted = self.mutate(self.api.delete_task(task)).await;
        self.report("delete", deleted)?;
        self.fetch_tasks().await
    }

    /// Flip `done` and send the task, then resync
    pub async fn toggle_task(&self, task: &Task) -> TaskResult<()> {
        self.update_task(&task.toggled()).await
    }

    /// Send the task exactly as given, then resync
    pub async fn update_task(&self, task: &Task) -> TaskResult<()> {
        let updated = self.mutate(self.api.update_task(task)).await;
        self.report("update", updated)?;
        self.fetch_tasks().await
    }

    /// Submit the current draft, then resync.
    ///
    /// The draft is cleared on success, and also on failure under
    /// `DraftResetPolicy::Always`.
    pub async fn add_task(&self) -> TaskResult<()> {
        let draft = self.state.snapshot().draft;
        let created = self.mutate(self.api.create_task(&draft)).await;

        if created.is_ok() || self.policies.draft_reset == DraftResetPolicy::Always {
            self.state.apply(|s| s.clear_draft());
        }
        self.report("add", created)?;
        self.fetch_tasks().await
    }

    pub fn set_draft(&self, description: String) {
        self.state.apply(|s| s.set_draft(description));
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.state.apply(|s| s.dismiss_notice(id));
    }

    async fn mutate(&self, request: impl Future<Output = TaskResult<()>>) -> TaskResult<()> {
        self.state.apply(|s| s.begin_request());
        let result = request.await;
        self.state.apply(|s| s.end_request());
        result
    }

    /// Log a failure and surface it according to the error policy
    fn report(&self, action: &str, result: TaskResult<()>) -> TaskResult<()> {
        if let Err(e) = &result {
            log::warn!("[TASKS] {} failed: {}", action, e);
            if self.policies.errors == ErrorPolicy::Notify {
                let message = e.user_message();
                let sticky = e.is_fatal();
                self.state.apply(|s| {
                    s.push_notice(message, sticky);
                });
            }
        }
        result
    }
}
