//! Backend Command Wrappers
//!
//! Frontend bindings to the task REST API, organized by concern.

mod http;
mod task;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TaskResult;

// Re-export all public items
pub use http::*;
pub use task::*;

/// Request headers by name
pub type Headers = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Generic JSON-over-HTTP request function.
///
/// Resolves to the parsed response body (`Value::Null` when the body is empty) and
/// fails on transport errors or non-2xx responses.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
        headers: &Headers,
    ) -> TaskResult<Value>;
}
