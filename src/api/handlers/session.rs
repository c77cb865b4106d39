//! Session cookie handling and request authentication.

use axum::http::{
    HeaderMap, HeaderValue,
    header::{COOKIE, InvalidHeaderValue},
};

use super::state::SessionConfig;
use crate::account::Authentication;
use crate::store::{self, SessionStore};

pub(crate) const SESSION_COOKIE_NAME: &str = "doorman_session";

/// Resolve the session cookie into the request's authentication state.
///
/// Missing, unknown and expired sessions are all anonymous.
pub(crate) async fn authenticate(
    headers: &HeaderMap,
    sessions: &dyn SessionStore,
) -> Result<Authentication, store::Error> {
    let Some(token) = extract_session_token(headers) else {
        return Ok(Authentication::Anonymous);
    };
    Ok(sessions
        .lookup_session(&token)
        .await?
        .map_or(Authentication::Anonymous, Authentication::Authenticated))
}

/// Build a secure `HttpOnly` cookie for the session token.
pub(crate) fn session_cookie(
    config: &SessionConfig,
    token: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let ttl_seconds = config.ttl_seconds();
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_seconds}"
    );
    if config.cookie_secure() {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

pub(crate) fn clear_session_cookie(
    config: &SessionConfig,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if config.cookie_secure() {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

pub(crate) fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(value) = header.to_str() else {
            continue;
        };
        for pair in value.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            let (Some(key), Some(val)) = (parts.next(), parts.next()) else {
                continue;
            };
            let val = val.trim();
            if key.trim() == SESSION_COOKIE_NAME && !val.is_empty() {
                return Some(val.to_string());
            }
        }
    }
    None
}
