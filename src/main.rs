//! Task List Frontend Entry Point

mod app;
mod auth;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod logging;
mod models;
mod progress;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging();
    mount_to_body(App);
}
