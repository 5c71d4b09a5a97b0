//! Normalized error responses.
//!
//! Every failure leaves the relay as JSON with an `error` field; the
//! validator route additionally sets `valid: false`, and epic creation
//! attaches the raw upstream body under `details`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::http::request::InvalidEpicRequest;
use crate::jira::{InvalidConnection, JiraError};

/// Wire shape of an error response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// An error on its way to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                valid: None,
                error: error.into(),
                details: None,
            },
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// Upstream status (500 when Jira never answered) and the normalized message.
    pub fn forwarded(err: &JiraError) -> Self {
        Self::new(
            err.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            err.to_string(),
        )
    }

    /// Mark the body as a failed validation (`valid: false`).
    pub fn invalid(mut self) -> Self {
        self.body.valid = Some(false);
        self
    }

    pub fn with_details(mut self, details: Option<Value>) -> Self {
        self.body.details = details;
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<InvalidConnection> for ApiError {
    fn from(err: InvalidConnection) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<InvalidEpicRequest> for ApiError {
    fn from(err: InvalidEpicRequest) -> Self {
        Self::bad_request(err.to_string())
    }
}
