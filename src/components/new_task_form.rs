//! New Task Form Component
//!
//! Input bound to the draft plus the "Add task" button.

use leptos::prelude::*;

use crate::context::TaskContext;
use crate::store::{use_task_store, TaskListStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<TaskContext>().expect("TaskContext should be provided");
    let store = use_task_store();

    // Empty descriptions are submitted as-is; the server decides
    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add();
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <div class="input-field col s6">
                <input
                    placeholder="Description"
                    id="description"
                    type="text"
                    name="description"
                    class="validate"
                    prop:value=move || store.draft().get().description
                    on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                />
            </div>
            <div>
                <button type="submit" class="waves-effect waves-light btn">"Add task"</button>
            </div>
        </form>
    }
}
