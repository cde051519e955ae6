use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use drive_domain::shared::{DomainError, ErrorCode, ErrorSeverity};

/// Structured error payload, sent as `{ "error": { ... } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Numeric error code (1xxx-6xxx range)
    pub code: u16,
    pub message: String,
    pub severity: ErrorSeverity,
    /// Whether the request can be retried as-is
    pub recoverable: bool,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a ErrorBody,
}

/// Error returned by every HTTP handler
#[derive(Debug, Error)]
#[error("[{}] {}", .body.code, .body.message)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: status_for(error_code),
            body: ErrorBody {
                code: error_code.code(),
                message: message.into(),
                severity: error_code.severity(),
                recoverable: error_code.is_recoverable(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InvalidInput, message)
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationError | ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::HabitNotFound
        | ErrorCode::CompletionNotFound
        | ErrorCode::SleepEntryNotFound
        | ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::RepositoryError
        | ErrorCode::DataIntegrityError
        | ErrorCode::SerializationError
        | ErrorCode::InfrastructureError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::from_code(err.code(), err.message())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(code = self.body.code, "{}", self.body.message);
        } else {
            tracing::debug!(code = self.body.code, status = %self.status, "{}", self.body.message);
        }

        (self.status, Json(ErrorEnvelope { error: &self.body })).into_response()
    }
}
