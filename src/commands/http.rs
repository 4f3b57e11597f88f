//! HTTP Transport
//!
//! `HttpClient` over reqwest; uses `fetch` in the browser.

use async_trait::async_trait;
use serde_json::Value;

use super::{Headers, HttpClient, Method};
use crate::error::{TaskError, TaskResult};

/// reqwest-backed client resolving paths against a fixed API origin
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

#[async_trait(?Send)]
impl HttpClient for ReqwestClient {
    async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<Value>,
        headers: &Headers,
    ) -> TaskResult<Value> {
        let url = self.url(path);
        log::debug!("[HTTP] {} {}", method.as_str(), url);

        let mut req = self.client.request(Self::method(method), &url);
        for (name, value) in headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            log::warn!("[HTTP] {} {} -> {}", method.as_str(), url, status);
            return Err(TaskError::from_status(status.as_u16(), &text));
        }
        parse_body(&text)
    }
}

/// Empty bodies (e.g. 204) resolve to `Null`
fn parse_body(text: &str) -> TaskResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(TaskError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body(" \n").unwrap(), Value::Null);
        assert_eq!(parse_body(r#"{"message":"ok"}"#).unwrap(), json!({ "message": "ok" }));
        assert!(matches!(parse_body("<html>"), Err(TaskError::Decode(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ReqwestClient::new("http://localhost:5000/");
        assert_eq!(client.url(crate::config::TASKS_PATH), "http://localhost:5000/api/tasks");
        assert_eq!(client.url(crate::config::ADD_TASK_PATH), "http://localhost:5000/api/tasks/add");
    }
}
