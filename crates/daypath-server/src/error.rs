use crate::views;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use daypath_core::CoreError;

// ---------------------------------------------------------------------------
// Sentinel for explicit 404s that have no CoreError counterpart
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct NotFoundError(String);

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for NotFoundError {}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Handler failure, rendered as a small HTML error page.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(NotFoundError(msg.into()).into())
    }

    fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<NotFoundError>().is_some() {
            return StatusCode::NOT_FOUND;
        }
        match self.0.downcast_ref::<CoreError>() {
            Some(CoreError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Some(CoreError::EmailTaken) => StatusCode::CONFLICT,
            Some(
                CoreError::ContentCheckFailed(_)
                | CoreError::UnsupportedSchemaVersion { .. }
                | CoreError::PasswordHash(_)
                | CoreError::Db(_)
                | CoreError::Io(_)
                | CoreError::Yaml(_)
                | CoreError::Json(_),
            )
            | None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!("request failed: {:#}", self.0);
            "Something went wrong. Please try again.".to_string()
        } else {
            self.0.to_string()
        };
        (status, Html(views::error_page(status, &message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
