//! Task List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All transitions are
//! plain methods on `TaskListState` so they can run outside the browser.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DraftTask, Task};
use crate::progress::completion_percent;

/// What the page body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// A request is outstanding; the placeholder replaces the list
    Loading,
    /// No tasks: show the call to action
    #[default]
    Empty,
    /// Table plus add form
    Populated,
}

/// Message shown above the list
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    /// Stays until clicked away instead of timing out
    pub sticky: bool,
}

/// Task page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskListState {
    /// Tasks in server order, replaced wholesale on every fetch
    pub tasks: Vec<Task>,
    /// Contents of the add form
    pub draft: DraftTask,
    /// Derived from `tasks`; kept as-is when the list is empty
    pub completion_percent: u8,
    /// Requests currently in flight
    pub pending: u32,
    pub phase: Phase,
    pub notice: Option<Notice>,
    pub next_notice_id: u64,
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_request(&mut self) {
        self.pending += 1;
        self.refresh_phase();
    }

    pub fn end_request(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        self.refresh_phase();
    }

    /// Replace the list with a fresh server response
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        if let Some(percent) = completion_percent(&self.tasks) {
            self.completion_percent = percent;
        }
        self.refresh_phase();
    }

    pub fn set_draft(&mut self, description: String) {
        self.draft.description = description;
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub fn push_notice(&mut self, message: impl Into<String>, sticky: bool) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.notice = Some(Notice {
            id,
            message: message.into(),
            sticky,
        });
        id
    }

    /// Hide the notice if it is still the one with `id`
    pub fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    fn refresh_phase(&mut self) {
        self.phase = if self.is_loading() {
            Phase::Loading
        } else if self.tasks.is_empty() {
            Phase::Empty
        } else {
            Phase::Populated
        };
    }
}

/// Type alias for the store
pub type TaskStore = Store<TaskListState>;

/// Get the task store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

/// Somewhere the controller can apply state transitions
pub trait StateCell {
    fn apply(&self, f: impl FnOnce(&mut TaskListState));
    fn snapshot(&self) -> TaskListState;
}

impl StateCell for TaskStore {
    fn apply(&self, f: impl FnOnce(&mut TaskListState)) {
        self.update(f);
    }

    fn snapshot(&self) -> TaskListState {
        self.get_untracked()
    }
}

impl StateCell for Rc<RefCell<TaskListState>> {
    fn apply(&self, f: impl FnOnce(&mut TaskListState)) {
        f(&mut self.borrow_mut());
    }

    fn snapshot(&self) -> TaskListState {
        self.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, done: bool) -> Task {
        Task::new(id, format!("task {}", id), done)
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = TaskListState::new();
        assert!(state.tasks.is_empty());
        assert_eq!(state.phase, Phase::Empty);
        assert_eq!(state.completion_percent, 0);
        assert_eq!(state.draft, DraftTask::default());
    }

    #[test]
    fn test_loading_until_all_requests_finish() {
        let mut state = TaskListState::new();
        state.begin_request();
        state.begin_request();
        assert_eq!(state.phase, Phase::Loading);

        state.end_request();
        assert_eq!(state.phase, Phase::Loading);

        state.end_request();
        assert_eq!(state.phase, Phase::Empty);

        state.end_request();
        assert_eq!(state.pending, 0);
    }

    #[test]
    fn test_replace_tasks_recomputes_percent() {
        let mut state = TaskListState::new();
        state.replace_tasks(vec![task("1", true), task("2", false)]);
        assert_eq!(state.completion_percent, 50);
        assert_eq!(state.phase, Phase::Populated);

        state.replace_tasks(vec![task("1", true)]);
        assert_eq!(state.completion_percent, 100);
        assert_eq!(state.tasks.len(), 1);
    }

    #[test]
    fn test_empty_list_keeps_previous_percent() {
        let mut state = TaskListState::new();
        state.replace_tasks(vec![task("1", true), task("2", true), task("3", false)]);
        assert_eq!(state.completion_percent, 67);

        state.replace_tasks(vec![]);
        assert_eq!(state.completion_percent, 67);
        assert_eq!(state.phase, Phase::Empty);
    }

    #[test]
    fn test_replace_while_loading_stays_loading() {
        let mut state = TaskListState::new();
        state.begin_request();
        state.replace_tasks(vec![task("1", false)]);
        assert_eq!(state.phase, Phase::Loading);
        state.end_request();
        assert_eq!(state.phase, Phase::Populated);
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut state = TaskListState::new();
        let first = state.push_notice("first", false);
        let second = state.push_notice("second", true);
        assert_ne!(first, second);

        state.dismiss_notice(first);
        assert_eq!(state.notice.as_ref().map(|n| n.message.as_str()), Some("second"));

        state.dismiss_notice(second);
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_draft_edits() {
        let mut state = TaskListState::new();
        state.set_draft("buy milk".into());
        assert_eq!(state.draft.description, "buy milk");
        state.clear_draft();
        assert!(state.draft.description.is_empty());
    }
}
