//! Task List View Component
//!
//! The task page: header with progress, the list or a call to action, and the add form.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{ReqwestClient, TaskApi};
use crate::components::{Loader, NewTaskForm, NoticeToast, TaskRow};
use crate::config::AppConfig;
use crate::context::TaskContext;
use crate::controller::{Policies, TaskListController};
use crate::models::{AuthSession, Task};
use crate::store::{Phase, TaskListState, TaskListStateStoreFields};

/// Task page for one signed-in session
#[component]
pub fn TaskListView(session: AuthSession, config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(TaskListState::new());
    provide_context(store);

    let api = TaskApi::new(ReqwestClient::new(config.api_base.clone()), session);
    let controller = TaskListController::new(api, store, Policies::from(&config));
    let ctx = TaskContext::new(controller, config.notice_timeout_ms);
    provide_context(ctx);

    // Load tasks on mount
    Effect::new(move |_| ctx.reload());

    let role = ctx.role_label();
    // Key on mutable fields so a toggled task re-renders
    let task_key = |task: &Task| (task.id.clone(), task.done, task.description.clone());

    view! {
        <NoticeToast />
        {move || match store.phase().get() {
            Phase::Loading => view! { <Loader /> }.into_any(),
            phase => view! {
                <div>
                    <div class="tasks-header">
                        <h3>{role} " Todo List"</h3>
                        {(phase == Phase::Populated).then(|| view! {
                            <div>"Complete progress: " {move || store.completion_percent().get()} "%"</div>
                        })}
                    </div>

                    {if phase == Phase::Empty {
                        view! { <div class="call-to-action">"Let's create new task"</div> }.into_any()
                    } else {
                        view! {
                            <div>
                                <div class="table">
                                    <div class="table-item">"Status"</div>
                                    <div class="table-item description">"Description"</div>
                                    <div class="table-item">"Action"</div>
                                </div>
                                <For
                                    each=move || store.tasks().get()
                                    key=task_key
                                    children=move |task| view! { <TaskRow task=task /> }
                                />
                            </div>
                        }.into_any()
                    }}

                    <NewTaskForm />
                </div>
            }.into_any(),
        }}
    }
}
