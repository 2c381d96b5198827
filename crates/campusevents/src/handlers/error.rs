use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use campusevents_core::event::EventError;
use campusevents_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler error that renders as `{"error": "..."}` with a status code
/// derived from the underlying error type.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.downcast_ref::<EventError>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::warn!(status = %status_code, error = %self.0, "API error");

        (
            status_code,
            Json(serde_json::json!({ "error": self.0.to_string() })),
        )
            .into_response()
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
