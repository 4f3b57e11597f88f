//! Session Loading
//!
//! The login page persists `{ token, userId, admin }` in localStorage; this module
//! turns that record into an explicit `AuthSession` handed to the task list.

use crate::config::AppConfig;
use crate::error::{TaskError, TaskResult};
use crate::models::AuthSession;

/// Parse the persisted session record. An empty token counts as signed out.
pub fn parse_session(raw: &str) -> TaskResult<AuthSession> {
    let session: AuthSession = serde_json::from_str(raw)?;
    if session.token.trim().is_empty() {
        return Err(TaskError::MissingSession);
    }
    Ok(session)
}

/// Read the session saved by the login page.
pub fn load_session(config: &AppConfig) -> TaskResult<AuthSession> {
    let raw = read_storage(&config.auth_storage_key).ok_or(TaskError::MissingSession)?;
    let session = parse_session(&raw)?;
    log::debug!("[AUTH] Loaded session (admin={})", session.admin);
    Ok(session)
}

#[cfg(target_arch = "wasm32")]
fn read_storage(key: &str) -> Option<String> {
    let storage = leptos::prelude::window().local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_storage(_key: &str) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_record() {
        let session =
            parse_session(r#"{"userId":"u1","token":"eyJhbGciOi","admin":true}"#).unwrap();
        assert_eq!(session, AuthSession::new("eyJhbGciOi", true));
    }

    #[test]
    fn test_admin_defaults_to_false() {
        let session = parse_session(r#"{"token":"abc"}"#).unwrap();
        assert!(!session.admin);
    }

    #[test]
    fn test_empty_token_is_signed_out() {
        assert_eq!(parse_session(r#"{"token":"  "}"#), Err(TaskError::MissingSession));
    }

    #[test]
    fn test_missing_token_is_decode_error() {
        assert!(matches!(parse_session(r#"{"userId":"u1"}"#), Err(TaskError::Decode(_))));
        assert!(matches!(parse_session("not json"), Err(TaskError::Decode(_))));
    }

    #[test]
    fn test_native_build_has_no_stored_session() {
        assert_eq!(load_session(&AppConfig::default()), Err(TaskError::MissingSession));
    }
}
