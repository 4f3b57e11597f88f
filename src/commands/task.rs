//! Task Commands
//!
//! Bindings for the task endpoints. Every request carries the session's bearer token.

use serde::Serialize;
use serde_json::Value;

use super::{Headers, HttpClient, Method};
use crate::config::{ADD_TASK_PATH, TASKS_PATH};
use crate::error::TaskResult;
use crate::models::{AuthSession, DraftTask, Task};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreateTaskArgs<'a> {
    description: &'a str,
}

#[derive(Serialize)]
struct DeleteTaskArgs<'a> {
    #[serde(rename = "_id")]
    id: &'a str,
}

// ========================
// Commands
// ========================

/// Task endpoints bound to one HTTP client and one signed-in session
#[derive(Clone)]
pub struct TaskApi<H> {
    http: H,
    session: AuthSession,
}

impl<H: HttpClient> TaskApi<H> {
    pub fn new(http: H, session: AuthSession) -> Self {
        Self { http, session }
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), self.session.bearer());
        headers
    }

    async fn send(&self, path: &str, method: Method, body: Option<Value>) -> TaskResult<Value> {
        self.http.request(path, method, body, &self.headers()).await
    }

    /// `GET /api/tasks`, in server order
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        let value = self.send(TASKS_PATH, Method::Get, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// `POST /api/tasks/add`. The description is sent as typed, even when empty.
    pub async fn create_task(&self, draft: &DraftTask) -> TaskResult<()> {
        let body = serde_json::to_value(CreateTaskArgs { description: &draft.description })?;
        self.send(ADD_TASK_PATH, Method::Post, Some(body)).await?;
        Ok(())
    }

    /// `PATCH /api/tasks` with the task exactly as given
    pub async fn update_task(&self, task: &Task) -> TaskResult<()> {
        let body = serde_json::to_value(task)?;
        self.send(TASKS_PATH, Method::Patch, Some(body)).await?;
        Ok(())
    }

    /// `DELETE /api/tasks` with `{ _id }`
    pub async fn delete_task(&self, task: &Task) -> TaskResult<()> {
        let body = serde_json::to_value(DeleteTaskArgs { id: &task.id })?;
        self.send(TASKS_PATH, Method::Delete, Some(body)).await?;
        Ok(())
    }
}
