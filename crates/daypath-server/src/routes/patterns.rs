use super::Outcome;
use crate::error::AppError;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::encode_component;
use crate::views::patterns::pattern_page;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use daypath_core::patterns::{mark_pattern_completed, pattern, Pattern};
use daypath_core::progress::{dashboard_state, today};
use rusqlite::Connection;
use serde::Deserialize;

/// The pattern if it exists and its day is unlocked, else where to go.
fn readable_pattern(
    conn: &Connection,
    user_id: i64,
    id: &str,
    today: NaiveDate,
) -> daypath_core::Result<Result<Pattern, Outcome>> {
    let Some(found) = pattern(conn, user_id, id)? else {
        return Ok(Err(Outcome::with_error("/dashboard", "Pattern missing for today.")));
    };
    let state = dashboard_state(conn, user_id, today)?;
    if found.day_number > state.day {
        return Ok(Err(Outcome::with_error(
            "/dashboard",
            "Pattern locked for a future day.",
        )));
    }
    Ok(Ok(found))
}

#[derive(Debug, Deserialize)]
pub struct DoneQuery {
    pub done: Option<String>,
}

/// GET /patterns/{id}
pub async fn show(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Query(query): Query<DoneQuery>,
) -> Result<Response, AppError> {
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            Ok(match readable_pattern(conn, user.id, &id, today)? {
                Ok(p) => Outcome::Page(pattern_page(&p, query.done.as_deref() == Some("1"))),
                Err(redirect) => redirect,
            })
        })
        .await?;
    Ok(outcome.into_response())
}

/// POST /patterns/{id}/finish
pub async fn finish(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            Ok(match readable_pattern(conn, user.id, &id, today)? {
                Ok(p) => {
                    mark_pattern_completed(conn, user.id, &p.id)?;
                    Outcome::to(format!("/patterns/{}?done=1", encode_component(&p.id)))
                }
                Err(_) => Outcome::to("/dashboard"),
            })
        })
        .await?;
    Ok(outcome.into_response())
}
