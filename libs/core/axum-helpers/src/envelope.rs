//! The uniform response body shared by every endpoint.
//!
//! Success and failure alike serialize to `{msg?, data?}`; a field that is
//! not set for a given outcome is omitted from the JSON entirely. Status
//! codes are decided by the caller at the point of detection, never derived
//! here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope: `{msg?, data?}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    /// Human-readable outcome description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Operation payload (a record, or a list of records)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl Envelope {
    /// Message-only body, used for errors and for delete confirmations.
    pub fn msg(msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
            data: None,
        }
    }

    /// Data-only body, used for reads.
    pub fn data(data: serde_json::Value) -> Self {
        Self {
            msg: None,
            data: Some(data),
        }
    }

    /// Message plus payload, used for create and update confirmations.
    pub fn with_data(msg: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            msg: Some(msg.into()),
            data: Some(data),
        }
    }
}

/// Fallback handler for unmatched paths.
///
/// Registered with `Router::fallback`, so it answers any method on any
/// route the API does not define.
pub async fn endpoint_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::msg("Endpoint does not exist")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_msg_only_omits_data() {
        let body = serde_json::to_value(Envelope::msg("gone")).unwrap();
        assert_eq!(body, json!({"msg": "gone"}));
    }

    #[test]
    fn test_data_only_omits_msg() {
        let body = serde_json::to_value(Envelope::data(json!([1, 2]))).unwrap();
        assert_eq!(body, json!({"data": [1, 2]}));
    }

    #[test]
    fn test_msg_with_data_keeps_both() {
        let body =
            serde_json::to_value(Envelope::with_data("saved", json!({"id": 1}))).unwrap();
        assert_eq!(body, json!({"msg": "saved", "data": {"id": 1}}));
    }
}
