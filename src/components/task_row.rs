//! Task Row Component
//!
//! Individual task in the list.

use leptos::prelude::*;

use crate::context::TaskContext;
use crate::models::Task;

/// A single task row: status toggle, description, delete
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<TaskContext>().expect("TaskContext should be provided");

    let done = task.done;
    let description = task.description.clone();
    let row_class = if done { "task completed" } else { "task" };
    let text_class = if done { "task-description text-through" } else { "task-description" };
    let icon = if done { "check_circle_outline" } else { "radio_button_unchecked" };
    let toggle_target = task.clone();
    let delete_target = task;

    view! {
        <div class=row_class>
            // Status toggle
            <div class="action-icon" on:click=move |_| ctx.toggle(toggle_target.clone())>
                <span class="material-icons-round">{icon}</span>
            </div>

            <div class=text_class>{description}</div>

            // Delete button
            <div class="action-icon" on:click=move |_| ctx.delete(delete_target.clone())>
                <span class="material-icons-round">"clear"</span>
            </div>
        </div>
    }
}
