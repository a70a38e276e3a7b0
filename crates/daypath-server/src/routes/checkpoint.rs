use super::{parse_num, Outcome};
use crate::error::AppError;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::checkpoint::{checkpoint_page, CheckpointView};
use crate::views::encode_component;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use chrono::NaiveDate;
use daypath_core::checkpoints::{
    checkpoint_answers, checkpoint_for_day, finalize_checkpoint, has_passed, latest_attempt,
    record_checkpoint_answer, reset_checkpoint, CheckpointTest,
};
use daypath_core::progress::{dashboard_state, is_lesson_ready_for_checkpoint, today};
use daypath_core::CoreError;
use rusqlite::Connection;
use serde::Deserialize;

/// The day's test if the user may take it, else where to send them.
fn open_checkpoint(
    conn: &Connection,
    user_id: i64,
    day: u32,
    today: NaiveDate,
) -> daypath_core::Result<Result<CheckpointTest, Outcome>> {
    let state = dashboard_state(conn, user_id, today)?;
    if day == 0 || day > state.day {
        return Ok(Err(Outcome::with_error(
            "/dashboard",
            "Checkpoint locked until you reach this day.",
        )));
    }
    if !is_lesson_ready_for_checkpoint(conn, user_id, day)? {
        return Ok(Err(Outcome::with_error(
            "/dashboard?view=lesson",
            "Finish the lesson first.",
        )));
    }
    match checkpoint_for_day(conn, day)? {
        Some(test) => Ok(Ok(test)),
        None => Ok(Err(Outcome::with_error(
            "/dashboard",
            "Checkpoint missing for this day.",
        ))),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CheckpointQuery {
    pub show: Option<String>,
    pub error: Option<String>,
    pub result: Option<String>,
}

/// GET /checkpoint/{day}
pub async fn show(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(day): Path<String>,
    Query(query): Query<CheckpointQuery>,
) -> Result<Response, AppError> {
    let Some(day) = parse_num::<u32>(Some(day.as_str())) else {
        return Ok(Outcome::to("/dashboard").into_response());
    };
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            let test = match open_checkpoint(conn, user.id, day, today)? {
                Ok(test) => test,
                Err(redirect) => return Ok(redirect),
            };
            let answers = checkpoint_answers(conn, user.id, &test.id)?;
            let attempt = latest_attempt(conn, user.id, &test.id)?;
            let passed_already = has_passed(conn, user.id, &test.id)?;
            Ok(Outcome::Page(checkpoint_page(&CheckpointView {
                test: &test,
                answers: &answers,
                show: query.show.as_deref(),
                error: query.error.as_deref(),
                result_done: query.result.as_deref() == Some("done"),
                latest_attempt: attempt.as_ref(),
                passed_already,
            })))
        })
        .await?;
    Ok(outcome.into_response())
}

#[derive(Debug, Deserialize)]
pub struct AnswerForm {
    pub question_id: Option<String>,
    pub choice_index: Option<String>,
}

/// POST /checkpoint/{day}/answer
pub async fn answer(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(day): Path<String>,
    Form(form): Form<AnswerForm>,
) -> Result<Response, AppError> {
    let (Some(day), Some(question_id), Some(selected)) = (
        parse_num::<u32>(Some(day.as_str())),
        form.question_id.filter(|q| !q.is_empty()),
        parse_num::<usize>(form.choice_index.as_deref()),
    ) else {
        return Ok(Outcome::to("/dashboard").into_response());
    };
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            let test = match open_checkpoint(conn, user.id, day, today)? {
                Ok(test) => test,
                Err(redirect) => return Ok(redirect),
            };
            let here = format!("/checkpoint/{day}");
            if !test.questions.iter().any(|q| q.id == question_id) {
                tracing::warn!(user_id = user.id, day, "answer for a question outside the test");
                return Ok(Outcome::to(here));
            }
            Ok(match record_checkpoint_answer(conn, user.id, &question_id, selected)? {
                Some(_) => Outcome::to(format!("{here}?show={}", encode_component(&question_id))),
                None => Outcome::to(here),
            })
        })
        .await?;
    Ok(outcome.into_response())
}

/// POST /checkpoint/{day}/continue
pub async fn continue_checkpoint(
    CurrentUser(_user): CurrentUser,
    Path(day): Path<String>,
) -> Response {
    match parse_num::<u32>(Some(day.as_str())) {
        Some(day) => Outcome::to(format!("/checkpoint/{day}")).into_response(),
        None => Outcome::to("/dashboard").into_response(),
    }
}

/// POST /checkpoint/{day}/finalize
pub async fn finalize(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(day): Path<String>,
) -> Result<Response, AppError> {
    let Some(day) = parse_num::<u32>(Some(day.as_str())) else {
        return Ok(Outcome::to("/dashboard").into_response());
    };
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            let test = match open_checkpoint(conn, user.id, day, today)? {
                Ok(test) => test,
                Err(redirect) => return Ok(redirect),
            };
            let here = format!("/checkpoint/{day}");
            match finalize_checkpoint(conn, user.id, &test, today) {
                Ok(_) => Ok(Outcome::to(format!("{here}?result=done"))),
                Err(CoreError::InvalidInput(msg)) => Ok(Outcome::with_error(&here, &msg)),
                Err(e) => Err(e),
            }
        })
        .await?;
    Ok(outcome.into_response())
}

/// POST /checkpoint/{day}/reset
pub async fn reset(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(day): Path<String>,
) -> Result<Response, AppError> {
    let Some(day) = parse_num::<u32>(Some(day.as_str())) else {
        return Ok(Outcome::to("/dashboard").into_response());
    };
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            let test = match open_checkpoint(conn, user.id, day, today)? {
                Ok(test) => test,
                Err(redirect) => return Ok(redirect),
            };
            reset_checkpoint(conn, user.id, &test.id)?;
            Ok(Outcome::to(format!("/checkpoint/{day}")))
        })
        .await?;
    Ok(outcome.into_response())
}
