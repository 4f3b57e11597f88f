//! Completion Progress
//!
//! Percentage of finished tasks shown in the page header.

use crate::models::Task;

/// Percentage of tasks marked done, rounded half-up.
///
/// Returns `None` for an empty list so callers keep whatever they showed before.
pub fn completion_percent(tasks: &[Task]) -> Option<u8> {
    let total = tasks.len();
    if total == 0 {
        return None;
    }
    let done = tasks.iter().filter(|task| task.done).count();
    // round(100 * done / total) without going through floats
    let percent = (200 * done + total) / (2 * total);
    Some(percent as u8)
}
