use super::{parse_num, Outcome};
use crate::error::AppError;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::encode_component;
use crate::views::skill_check::{skill_check_page, CheckResult};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use daypath_core::progress::{dashboard_state, today};
use daypath_core::skill_checks::{record_skill_check_answer, skill_check};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResultQuery {
    pub result: Option<String>,
}

/// GET /skill-check/{id}
pub async fn show(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Query(query): Query<ResultQuery>,
) -> Result<Response, AppError> {
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            let Some(check) = skill_check(conn, user.id, &id)? else {
                return Ok(Outcome::with_error("/dashboard", "Skill check missing for today."));
            };
            let state = dashboard_state(conn, user.id, today)?;
            if check.day_number > state.day {
                return Ok(Outcome::with_error(
                    "/dashboard",
                    "Skill check locked for a future day.",
                ));
            }
            let read_only = check.day_number < state.day;
            let result = CheckResult::parse(query.result.as_deref());
            Ok(Outcome::Page(skill_check_page(&check, result, read_only)))
        })
        .await?;
    Ok(outcome.into_response())
}

#[derive(Debug, Deserialize)]
pub struct ChoiceForm {
    pub choice_index: Option<String>,
}

/// POST /skill-check/{id}
pub async fn submit(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Form(form): Form<ChoiceForm>,
) -> Result<Response, AppError> {
    let Some(selected) = parse_num::<usize>(form.choice_index.as_deref()) else {
        return Ok(Outcome::to("/dashboard").into_response());
    };
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            let Some(check) = skill_check(conn, user.id, &id)? else {
                return Ok(Outcome::to("/dashboard"));
            };
            let state = dashboard_state(conn, user.id, today)?;
            if check.day_number > state.day {
                return Ok(Outcome::to("/dashboard"));
            }
            let here = format!("/skill-check/{}", encode_component(&check.id));
            if check.day_number < state.day {
                tracing::warn!(user_id = user.id, check = %check.id, "answer for a past day ignored");
                return Ok(Outcome::to(here));
            }
            Ok(match record_skill_check_answer(conn, user.id, &check.id, selected, today)? {
                Some(o) => {
                    let result = if o.is_correct { CheckResult::Correct } else { CheckResult::Wrong };
                    Outcome::to(format!("{here}?result={}", result.as_str()))
                }
                None => Outcome::to("/dashboard"),
            })
        })
        .await?;
    Ok(outcome.into_response())
}
