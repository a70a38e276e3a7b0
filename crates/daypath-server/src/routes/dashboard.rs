use super::{parse_num, Outcome};
use crate::error::AppError;
use crate::session::CurrentUser;
use crate::state::AppState;
use crate::views::dashboard::{
    example_page, home_page, lesson_page, review_page, skill_page, HomeView, LessonView,
};
use crate::views::encode_component;
use crate::views::skill_check::CheckResult;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use chrono::NaiveDate;
use daypath_core::lessons::{get_lesson, get_step, record_step_answer, record_step_view, step_progress};
use daypath_core::library::{library_card, library_cards};
use daypath_core::patterns::patterns_for_day;
use daypath_core::progress::{complete_today, dashboard_state, today};
use daypath_core::skill_checks::{record_skill_check_answer, skill_check, skill_checks_for_day};
use daypath_core::CoreError;
use rusqlite::Connection;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub view: Option<String>,
    pub show: Option<String>,
    pub day: Option<String>,
    pub step: Option<String>,
    pub check: Option<String>,
    pub result: Option<String>,
    pub example: Option<String>,
    pub error: Option<String>,
}

impl DashboardQuery {
    /// An explicit `view`, else the lesson when feedback or an error is
    /// pending, else home.
    fn view(&self) -> &str {
        match self.view.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ if self.show.is_some() || self.error.is_some() => "lesson",
            _ => "home",
        }
    }
}

/// GET /dashboard
pub async fn dashboard(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, AppError> {
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            let view = query.view().to_string();
            match view.as_str() {
                "lesson" => lesson_view(conn, user.id, today, &query),
                "review" => review_view(conn, user.id, today, &query),
                "skill" => skill_view(conn, user.id, today, &query),
                "example" => Ok(match query.example.as_deref().and_then(library_card) {
                    Some(card) => Outcome::Page(example_page(&card)),
                    None => Outcome::to("/dashboard"),
                }),
                _ => home_view(conn, user.id, today, &query),
            }
        })
        .await?;
    Ok(outcome.into_response())
}

fn home_view(
    conn: &Connection,
    user_id: i64,
    today: NaiveDate,
    query: &DashboardQuery,
) -> daypath_core::Result<Outcome> {
    let state = dashboard_state(conn, user_id, today)?;
    let lesson = get_lesson(conn, state.day)?;
    let skill_checks = skill_checks_for_day(conn, user_id, state.day)?;
    let patterns = patterns_for_day(conn, user_id, state.day)?;
    let cards = library_cards();
    Ok(Outcome::Page(home_page(&HomeView {
        state: &state,
        lesson_title: lesson.as_ref().map(|l| l.title.as_str()),
        skill_checks: &skill_checks,
        patterns: &patterns,
        cards: &cards,
        error: query.error.as_deref(),
    })))
}

fn lesson_view(
    conn: &Connection,
    user_id: i64,
    today: NaiveDate,
    query: &DashboardQuery,
) -> daypath_core::Result<Outcome> {
    let state = dashboard_state(conn, user_id, today)?;
    let Some(lesson) = get_lesson(conn, state.day)? else {
        return Ok(Outcome::to("/dashboard"));
    };
    let progress = step_progress(conn, user_id, lesson.day)?;
    Ok(Outcome::Page(lesson_page(&LessonView {
        state: &state,
        lesson: &lesson,
        progress: &progress,
        show: parse_num(query.show.as_deref()),
        error: query.error.as_deref(),
    })))
}

fn review_view(
    conn: &Connection,
    user_id: i64,
    today: NaiveDate,
    query: &DashboardQuery,
) -> daypath_core::Result<Outcome> {
    let state = dashboard_state(conn, user_id, today)?;
    let Some(day) = parse_num::<u32>(query.day.as_deref()) else {
        return Ok(Outcome::to("/dashboard"));
    };
    if !state.completed_days.contains(&day) {
        return Ok(Outcome::to("/dashboard"));
    }
    let Some(lesson) = get_lesson(conn, day)? else {
        return Ok(Outcome::to("/dashboard"));
    };
    let progress = step_progress(conn, user_id, day)?;
    let step = parse_num(query.step.as_deref()).unwrap_or(1);
    Ok(Outcome::Page(review_page(&lesson, &progress, step)))
}

fn skill_view(
    conn: &Connection,
    user_id: i64,
    today: NaiveDate,
    query: &DashboardQuery,
) -> daypath_core::Result<Outcome> {
    let state = dashboard_state(conn, user_id, today)?;
    let check = match query.check.as_deref().filter(|c| !c.is_empty()) {
        Some(id) => skill_check(conn, user_id, id)?,
        None => skill_checks_for_day(conn, user_id, state.day)?.into_iter().next(),
    };
    let Some(check) = check else {
        return Ok(Outcome::with_error("/dashboard", "Skill check missing for today."));
    };
    if check.day_number > state.day {
        return Ok(Outcome::with_error("/dashboard", "Skill check locked for a future day."));
    }
    let read_only = check.day_number < state.day;
    let result = CheckResult::parse(query.result.as_deref());
    Ok(Outcome::Page(skill_page(&check, result, read_only)))
}

// ---------------------------------------------------------------------------
// Form posts
// ---------------------------------------------------------------------------

/// POST /dashboard/complete
pub async fn complete(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response, AppError> {
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| match complete_today(conn, user.id, today) {
            Ok(_) => Ok(Outcome::to("/dashboard")),
            Err(CoreError::InvalidInput(msg)) => {
                tracing::warn!(user_id = user.id, "completion rejected: {msg}");
                Ok(Outcome::with_error("/dashboard", &msg))
            }
            Err(e) => Err(e),
        })
        .await?;
    Ok(outcome.into_response())
}

#[derive(Debug, Deserialize)]
pub struct StepForm {
    pub step_id: Option<String>,
    pub answer_index: Option<String>,
}

/// POST /dashboard/answer
pub async fn answer(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<StepForm>,
) -> Result<Response, AppError> {
    let (Some(step_id), Some(selected)) = (
        parse_num::<i64>(form.step_id.as_deref()),
        parse_num::<usize>(form.answer_index.as_deref()),
    ) else {
        return Ok(Outcome::to("/dashboard").into_response());
    };
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            let Some(step) = get_step(conn, step_id)? else {
                return Ok(Outcome::to("/dashboard"));
            };
            if !step.kind.is_question() {
                return Ok(Outcome::to("/dashboard"));
            }
            let state = dashboard_state(conn, user.id, today)?;
            if state.completed_all || step.lesson_day != state.day {
                tracing::warn!(user_id = user.id, step_id, "answer for a day that is not today");
                return Ok(Outcome::to("/dashboard"));
            }
            Ok(match record_step_answer(conn, user.id, step_id, selected)? {
                Some(_) => Outcome::to(format!("/dashboard?view=lesson&show={step_id}")),
                None => Outcome::to("/dashboard"),
            })
        })
        .await?;
    Ok(outcome.into_response())
}

/// POST /dashboard/continue
pub async fn continue_lesson(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<StepForm>,
) -> Result<Response, AppError> {
    let Some(step_id) = parse_num::<i64>(form.step_id.as_deref()) else {
        return Ok(Outcome::to("/dashboard").into_response());
    };
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            let Some(step) = get_step(conn, step_id)? else {
                return Ok(Outcome::to("/dashboard"));
            };
            let state = dashboard_state(conn, user.id, today)?;
            if state.completed_all || step.lesson_day != state.day {
                return Ok(Outcome::to("/dashboard"));
            }
            if !step.kind.is_question() {
                record_step_view(conn, user.id, step_id)?;
            }
            Ok(Outcome::to("/dashboard?view=lesson"))
        })
        .await?;
    Ok(outcome.into_response())
}

#[derive(Debug, Deserialize)]
pub struct SkillForm {
    pub check_id: Option<String>,
    pub choice_index: Option<String>,
}

/// POST /dashboard/skill
pub async fn answer_skill(
    State(app): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<SkillForm>,
) -> Result<Response, AppError> {
    let (Some(check_id), Some(selected)) = (
        form.check_id.filter(|c| !c.is_empty()),
        parse_num::<usize>(form.choice_index.as_deref()),
    ) else {
        return Ok(Outcome::to("/dashboard").into_response());
    };
    let today = today();
    let outcome = app
        .with_conn(move |conn, _| {
            let Some(check) = skill_check(conn, user.id, &check_id)? else {
                return Ok(Outcome::to("/dashboard"));
            };
            let state = dashboard_state(conn, user.id, today)?;
            if check.day_number > state.day {
                return Ok(Outcome::to("/dashboard"));
            }
            let page = format!("/dashboard?view=skill&check={}", encode_component(&check.id));
            if check.day_number < state.day {
                return Ok(Outcome::to(page));
            }
            Ok(match record_skill_check_answer(conn, user.id, &check.id, selected, today)? {
                Some(o) => {
                    let result = if o.is_correct { CheckResult::Correct } else { CheckResult::Wrong };
                    Outcome::to(format!("{page}&result={}", result.as_str()))
                }
                None => Outcome::to("/dashboard"),
            })
        })
        .await?;
    Ok(outcome.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_defaults() {
        let q = DashboardQuery::default();
        assert_eq!(q.view(), "home");
        let q = DashboardQuery {
            show: Some("12".into()),
            ..Default::default()
        };
        assert_eq!(q.view(), "lesson");
        let q = DashboardQuery {
            error: Some("x".into()),
            view: Some("review".into()),
            ..Default::default()
        };
        assert_eq!(q.view(), "review");
    }
}
