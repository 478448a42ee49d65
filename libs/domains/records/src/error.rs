use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_helpers::Envelope;
use thiserror::Error;

/// Failure taxonomy for the record controllers.
///
/// The status code is chosen where the failure is detected, never inferred
/// from error shape: every constructor site knows whether it is reporting a
/// caller error or a store error.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Write request without the exact `application/json` content type
    #[error("Invalid Content-Type. Expected application/json.")]
    InvalidContentType,

    /// Request body that does not parse as a JSON object
    #[error("{0}")]
    InvalidBody(String),

    /// Lookup miss or empty listing; carries the operation-specific message
    #[error("{0}")]
    NotFound(String),

    /// Failure surfaced by the persistence layer; the raw description is
    /// passed through to the caller unredacted
    #[error("{0}")]
    Store(String),
}

pub type RecordResult<T> = Result<T, RecordError>;

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::Store(err.to_string())
    }
}

impl RecordError {
    pub fn store(err: sea_orm::DbErr) -> Self {
        RecordError::Store(err.to_string())
    }

    fn status(&self) -> StatusCode {
        match self {
            RecordError::InvalidContentType | RecordError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            RecordError::NotFound(_) => StatusCode::NOT_FOUND,
            RecordError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        match &self {
            RecordError::Store(msg) => tracing::error!("Store failure: {}", msg),
            other => tracing::info!("Request rejected: {}", other),
        }

        (self.status(), Json(Envelope::msg(self.to_string()))).into_response()
    }
}
