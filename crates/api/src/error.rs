use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use todo_core::error::CoreError;

use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "success": false, "message" }`
/// envelopes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A request that could not be served. `message` is shown to the client,
    /// `detail` is only logged.
    #[error("{message}: {detail}")]
    OperationFailed {
        message: &'static str,
        detail: String,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::OperationFailed { message, detail } => {
                tracing::error!(error = %detail, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, (*message).to_string())
            }
        };

        (status, axum::Json(ApiResponse::failure(message))).into_response()
    }
}

/// Classify a JSON body rejection.
///
/// - Well-formed JSON of the wrong shape (wrong field type, missing required
///   key) is the client's fault and maps to 400.
/// - A missing `Content-Type: application/json` header maps to 400.
/// - A body that cannot be parsed at all maps to 500 with `failure_message`,
///   the same way any other unexpected failure of the operation does.
pub fn map_json_rejection(rejection: JsonRejection, failure_message: &'static str) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => AppError::BadRequest(err.body_text()),
        JsonRejection::MissingJsonContentType(err) => AppError::BadRequest(err.body_text()),
        other => AppError::OperationFailed {
            message: failure_message,
            detail: other.body_text(),
        },
    }
}
