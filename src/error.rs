//! Error Types
//!
//! Failures of task requests, classified so the view can decide how loudly to report them.

use serde_json::Value;
use thiserror::Error;

pub type TaskResult<T> = Result<T, TaskError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not authorized: {0}")]
    Auth(String),

    #[error("rejected by server: {0}")]
    Validation(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("no signed-in session")]
    MissingSession,

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TaskError {
    /// Classify a non-2xx response.
    ///
    /// The backend answers errors with `{ "message": ... }`; that text is used as
    /// the detail when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
            .unwrap_or_else(|| format!("HTTP {}", status));

        match status {
            401 | 403 => TaskError::Auth(detail),
            400 | 409 | 422 => TaskError::Validation(detail),
            _ => TaskError::Network(detail),
        }
    }

    /// Errors that retrying or waiting will not fix
    pub fn is_fatal(&self) -> bool {
        matches!(self, TaskError::Auth(_) | TaskError::MissingSession)
    }

    /// Short text for the notification toast
    pub fn user_message(&self) -> String {
        match self {
            TaskError::Network(_) => "Could not reach the server, please try again".to_string(),
            TaskError::Auth(_) | TaskError::MissingSession => {
                "Your session has expired, please sign in again".to_string()
            }
            TaskError::Validation(msg) => format!("Task rejected: {}", msg),
            TaskError::Decode(_) => "The server sent an unexpected response".to_string(),
            TaskError::Config(msg) => format!("Configuration error: {}", msg),
        }
    }
}

impl From<reqwest::Error> for TaskError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TaskError::Decode(err.to_string())
        } else {
            TaskError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(err: serde_json::Error) -> Self {
        TaskError::Decode(err.to_string())
    }
}
