//! Loader Component
//!
//! Placeholder shown while a request is outstanding.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader" role="progressbar" aria-busy="true">
            <div class="spinner"></div>
        </div>
    }
}
