//! Notice Toast Component
//!
//! Shows the latest request failure. Non-sticky notices dismiss themselves.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::TaskContext;
use crate::store::{use_task_store, TaskListStateStoreFields};

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_context::<TaskContext>().expect("TaskContext should be provided");
    let store = use_task_store();

    // Schedule dismissal whenever a new notice appears
    Effect::new(move |_| {
        let Some(notice) = store.notice().get() else { return };
        if notice.sticky {
            return;
        }
        let timeout = ctx.notice_timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            ctx.dismiss_notice(notice.id);
        });
    });

    move || {
        store.notice().get().map(|notice| {
            let id = notice.id;
            let class = if notice.sticky { "notice notice-sticky" } else { "notice" };
            view! {
                <div class=class role="alert" on:click=move |_| ctx.dismiss_notice(id)>
                    {notice.message}
                </div>
            }
        })
    }
}
