pub mod auth;
pub mod checkpoint;
pub mod dashboard;
pub mod patterns;
pub mod skill_check;

use crate::error::AppError;
use crate::views::encode_component;
use axum::response::{Html, IntoResponse, Redirect, Response};

/// What a blocking handler body decided to do.
pub(crate) enum Outcome {
    Page(String),
    Redirect(String),
}

impl Outcome {
    pub(crate) fn to(path: impl Into<String>) -> Self {
        Outcome::Redirect(path.into())
    }

    /// Redirect to `path` with `?error=` (or `&error=`) carrying `message`.
    pub(crate) fn with_error(path: &str, message: &str) -> Self {
        let sep = if path.contains('?') { '&' } else { '?' };
        Outcome::Redirect(format!("{path}{sep}error={}", encode_component(message)))
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Page(html) => Html(html).into_response(),
            Outcome::Redirect(to) => Redirect::to(&to).into_response(),
        }
    }
}

/// Parse a numeric form or query field. Blank and malformed values are `None`.
pub(crate) fn parse_num<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.map(str::trim).filter(|s| !s.is_empty())?.parse().ok()
}

/// GET /
pub async fn root() -> Redirect {
    Redirect::to("/dashboard")
}

pub async fn not_found() -> AppError {
    AppError::not_found("Page not found.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_redirect_picks_separator() {
        let Outcome::Redirect(a) = Outcome::with_error("/dashboard", "Finish all steps first.") else {
            panic!("expected redirect");
        };
        assert_eq!(a, "/dashboard?error=Finish%20all%20steps%20first.");
        let Outcome::Redirect(b) = Outcome::with_error("/dashboard?view=lesson", "Finish the lesson first.") else {
            panic!("expected redirect");
        };
        assert_eq!(b, "/dashboard?view=lesson&error=Finish%20the%20lesson%20first.");
    }

    #[test]
    fn parse_num_is_lenient() {
        assert_eq!(parse_num::<u32>(Some(" 3 ")), Some(3));
        assert_eq!(parse_num::<u32>(Some("")), None);
        assert_eq!(parse_num::<u32>(Some("x")), None);
        assert_eq!(parse_num::<i64>(None), None);
    }
}
