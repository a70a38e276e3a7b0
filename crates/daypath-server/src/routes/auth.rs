use crate::error::AppError;
use crate::session::{clear_session_cookie, lookup_user, session_cookie, session_token};
use crate::state::AppState;
use crate::views::auth::{login_page, register_page};
use crate::views::encode_component;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Utc;
use daypath_core::auth::{create_session, create_user, delete_session, verify_user, NewSession};
use daypath_core::CoreError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `?error=` and the e-mail to refill after a rejected submission.
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
    pub email: Option<String>,
}

fn signed_in(session: &NewSession) -> Response {
    (
        [(header::SET_COOKIE, session_cookie(&session.token, session.expires_at))],
        Redirect::to("/dashboard"),
    )
        .into_response()
}

/// Back to the form at `path` with the message and the typed e-mail.
fn rejected(path: &str, message: &str, email: &str) -> Response {
    let mut to = format!("{path}?error={}", encode_component(message));
    let email = email.trim();
    if !email.is_empty() {
        to.push_str(&format!("&email={}", encode_component(email)));
    }
    Redirect::to(&to).into_response()
}

/// GET /login
pub async fn login_form(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AuthQuery>,
) -> Result<Response, AppError> {
    if lookup_user(&app, &headers).await?.is_some() {
        return Ok(Redirect::to("/dashboard").into_response());
    }
    Ok(Html(login_page(
        query.email.as_deref().unwrap_or(""),
        query.error.as_deref(),
    ))
    .into_response())
}

/// POST /login
pub async fn login(
    State(app): State<AppState>,
    Form(form): Form<Credentials>,
) -> Result<Response, AppError> {
    let email = form.email.clone();
    let result = app
        .with_conn(move |conn, cfg| match verify_user(conn, &form.email, &form.password) {
            Ok(Some(user)) => create_session(conn, cfg, user.id, Utc::now()).map(Ok),
            Ok(None) => Ok(Err("Invalid email or password.".to_string())),
            Err(CoreError::InvalidInput(msg)) => Ok(Err(msg)),
            Err(e) => Err(e),
        })
        .await?;
    match result {
        Ok(session) => Ok(signed_in(&session)),
        Err(msg) => {
            tracing::warn!("rejected login: {msg}");
            Ok(rejected("/login", &msg, &email))
        }
    }
}

/// GET /register
pub async fn register_form(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AuthQuery>,
) -> Result<Response, AppError> {
    if lookup_user(&app, &headers).await?.is_some() {
        return Ok(Redirect::to("/dashboard").into_response());
    }
    Ok(Html(register_page(
        query.email.as_deref().unwrap_or(""),
        query.error.as_deref(),
    ))
    .into_response())
}

/// POST /register
pub async fn register(
    State(app): State<AppState>,
    Form(form): Form<Credentials>,
) -> Result<Response, AppError> {
    let email = form.email.clone();
    let result = app
        .with_conn(move |conn, cfg| {
            match create_user(conn, cfg, &form.email, &form.password) {
                Ok(user) => create_session(conn, cfg, user.id, Utc::now()).map(Ok),
                Err(e @ (CoreError::InvalidInput(_) | CoreError::EmailTaken)) => Ok(Err(e)),
                Err(e) => Err(e),
            }
        })
        .await?;
    match result {
        Ok(session) => Ok(signed_in(&session)),
        Err(e) => {
            tracing::warn!("rejected registration: {e}");
            Ok(rejected("/register", &e.to_string(), &email))
        }
    }
}

/// POST /logout
pub async fn logout(State(app): State<AppState>, headers: HeaderMap) -> Result<Response, AppError> {
    if let Some(token) = session_token(&headers) {
        app.with_conn(move |conn, _| delete_session(conn, &token)).await?;
    }
    Ok((
        [(header::SET_COOKIE, clear_session_cookie())],
        Redirect::to("/login"),
    )
        .into_response())
}
