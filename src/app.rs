//! Task List Frontend App
//!
//! Root component: resolves the signed-in session and mounts the task page.

use leptos::prelude::*;

use crate::auth::load_session;
use crate::components::TaskListView;
use crate::config::AppConfig;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();

    let page = match load_session(&config) {
        Ok(session) => view! { <TaskListView session=session config=config /> }.into_any(),
        Err(e) => {
            // Without a token every request would fail; don't issue any
            log::warn!("[APP] Not signed in: {}", e);
            view! { <div class="signed-out">"Please sign in to see your tasks"</div> }.into_any()
        }
    };

    view! {
        <main class="container">
            {page}
        </main>
    }
}
