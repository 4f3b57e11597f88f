//! Frontend Models
//!
//! Data structures matching the task backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque task identifier as issued by the backend
pub type TaskId = String;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTask")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: TaskId,
    pub description: String,
    pub done: bool,
    /// Backend fields this client does not interpret, echoed back on update
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    #[cfg(test)]
    pub fn new(id: impl Into<TaskId>, description: impl Into<String>, done: bool) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            done,
            extra: Map::new(),
        }
    }

    /// Copy of this task with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// Ids arrive as ObjectId strings from the real backend and as numbers from fixtures
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for TaskId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Task as sent by the backend, which may carry `_id`, `id` or both
#[derive(Deserialize)]
struct RawTask {
    #[serde(rename = "_id", default)]
    mongo_id: Option<RawId>,
    #[serde(default)]
    id: Option<RawId>,
    description: String,
    #[serde(default)]
    done: bool,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawTask> for Task {
    type Error = String;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        let id = raw
            .mongo_id
            .or(raw.id)
            .ok_or_else(|| "missing field `_id`".to_string())?;
        Ok(Self {
            id: id.into(),
            description: raw.description,
            done: raw.done,
            extra: raw.extra,
        })
    }
}

/// Uncommitted input of the "add task" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftTask {
    pub description: String,
}

impl DraftTask {
    pub fn clear(&mut self) {
        self.description.clear();
    }
}

/// Signed-in user as persisted by the login page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default)]
    pub admin: bool,
}

impl AuthSession {
    #[cfg(test)]
    pub fn new(token: impl Into<String>, admin: bool) -> Self {
        Self {
            token: token.into(),
            admin,
        }
    }

    /// Value of the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn role_label(&self) -> &'static str {
        if self.admin { "Admin" } else { "User" }
    }
}
