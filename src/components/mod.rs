//! UI Components
//!
//! Leptos components of the task page.

mod loader;
mod new_task_form;
mod notice_toast;
mod task_list_view;
mod task_row;

pub use loader::Loader;
pub use new_task_form::NewTaskForm;
pub use notice_toast::NoticeToast;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
