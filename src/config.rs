//! Application Configuration
//!
//! Values baked in at build time through `TASKS_*` environment variables.

use std::str::FromStr;

use crate::error::TaskError;

/// Task collection endpoint (GET / PATCH / DELETE)
pub const TASKS_PATH: &str = "/api/tasks";
/// Task creation endpoint (POST)
pub const ADD_TASK_PATH: &str = "/api/tasks/add";

const NATIVE_API_BASE: &str = "http://localhost:5000";

/// What happens to the draft when "Add task" is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftResetPolicy {
    /// Clear the input even when the create request fails
    Always,
    /// Keep the input so a failed submission can be retried
    #[default]
    OnSuccess,
}

impl FromStr for DraftResetPolicy {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "on-success" | "on_success" => Ok(Self::OnSuccess),
            other => Err(TaskError::Config(format!("unknown draft reset policy '{}'", other))),
        }
    }
}

/// How request failures reach the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Show a transient notice
    #[default]
    Notify,
    /// Log only
    Silent,
}

impl FromStr for ErrorPolicy {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "notify" => Ok(Self::Notify),
            "silent" => Ok(Self::Silent),
            other => Err(TaskError::Config(format!("unknown error policy '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin the REST paths are resolved against
    pub api_base: String,
    /// localStorage key holding the signed-in session
    pub auth_storage_key: String,
    /// How long a notice stays on screen
    pub notice_timeout_ms: u32,
    pub draft_reset: DraftResetPolicy,
    pub error_policy: ErrorPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: NATIVE_API_BASE.to_string(),
            auth_storage_key: "userData".to_string(),
            notice_timeout_ms: 4000,
            draft_reset: DraftResetPolicy::default(),
            error_policy: ErrorPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Configuration for this build, falling back to the page origin for the API base.
    pub fn load() -> Self {
        let mut config = Self::from_vars(|key| match key {
            "TASKS_API_BASE" => option_env!("TASKS_API_BASE"),
            "TASKS_AUTH_KEY" => option_env!("TASKS_AUTH_KEY"),
            "TASKS_NOTICE_MS" => option_env!("TASKS_NOTICE_MS"),
            "TASKS_DRAFT_RESET" => option_env!("TASKS_DRAFT_RESET"),
            "TASKS_ERROR_POLICY" => option_env!("TASKS_ERROR_POLICY"),
            _ => None,
        });

        #[cfg(target_arch = "wasm32")]
        if option_env!("TASKS_API_BASE").is_none() {
            match leptos::prelude::window().location().origin() {
                Ok(origin) => config.api_base = origin,
                Err(e) => log::warn!("[CONFIG] Cannot read page origin: {:?}", e),
            }
        }

        config.api_base = config.api_base.trim_end_matches('/').to_string();
        config
    }

    /// Build a config from a variable lookup; bad values are logged and ignored.
    pub fn from_vars<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let mut config = Self::default();

        if let Some(base) = lookup("TASKS_API_BASE").filter(|v| !v.trim().is_empty()) {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(key) = lookup("TASKS_AUTH_KEY").filter(|v| !v.trim().is_empty()) {
            config.auth_storage_key = key.trim().to_string();
        }
        if let Some(raw) = lookup("TASKS_NOTICE_MS") {
            match raw.trim().parse() {
                Ok(ms) => config.notice_timeout_ms = ms,
                Err(_) => log::warn!("[CONFIG] Ignoring TASKS_NOTICE_MS={:?}", raw),
            }
        }
        if let Some(raw) = lookup("TASKS_DRAFT_RESET") {
            match raw.parse() {
                Ok(policy) => config.draft_reset = policy,
                Err(e) => log::warn!("[CONFIG] {}", e),
            }
        }
        if let Some(raw) = lookup("TASKS_ERROR_POLICY") {
            match raw.parse() {
                Ok(policy) => config.error_policy = policy,
                Err(e) => log::warn!("[CONFIG] {}", e),
            }
        }

        config
    }
}
