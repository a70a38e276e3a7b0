//! Session cookie handling and the logged-in user extractor.

use crate::error::AppError;
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::{DateTime, Utc};
use daypath_core::auth::{session_user, User};

pub const COOKIE_NAME: &str = "session";

/// Session token from the `Cookie` header, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|part| {
        part.trim()
            .strip_prefix("session=")
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    })
}

pub fn session_cookie(token: &str, expires_at: DateTime<Utc>) -> String {
    format!(
        "{COOKIE_NAME}={token}; HttpOnly; SameSite=Lax; Path=/; Expires={}",
        expires_at.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

pub fn clear_session_cookie() -> String {
    format!(
        "{COOKIE_NAME}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0; \
         Expires=Thu, 01 Jan 1970 00:00:00 GMT"
    )
}

/// Resolve the cookie to a live session, if there is one.
pub async fn lookup_user(state: &AppState, headers: &HeaderMap) -> Result<Option<User>, AppError> {
    let Some(token) = session_token(headers) else {
        return Ok(None);
    };
    state
        .with_conn(move |conn, _| session_user(conn, &token, Utc::now()))
        .await
}

/// The logged-in user. Requests without a live session are sent to `/login`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match lookup_user(state, &parts.headers).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => Err(Redirect::to("/login").into_response()),
            Err(e) => Err(e.into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::TimeZone;

    #[test]
    fn token_is_found_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; session=abc123; lang=en"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn empty_or_missing_cookie_is_none() {
        let mut headers = HeaderMap::new();
        assert!(session_token(&headers).is_none());
        headers.insert(header::COOKIE, HeaderValue::from_static("session="));
        assert!(session_token(&headers).is_none());
    }

    #[test]
    fn cookie_carries_http_date() {
        let at = Utc.with_ymd_and_hms(2026, 3, 8, 9, 5, 0).unwrap();
        assert_eq!(
            session_cookie("tok", at),
            "session=tok; HttpOnly; SameSite=Lax; Path=/; Expires=Sun, 08 Mar 2026 09:05:00 GMT"
        );
        let cleared = clear_session_cookie();
        assert!(cleared.contains("Max-Age=0"));
        assert!(cleared.contains("1970"));
    }
}
