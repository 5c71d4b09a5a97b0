//! Inbound request bodies and request identification.
//!
//! # Responsibilities
//! - Typed request bodies for every relay route
//! - Reject incomplete bodies before any outbound call is made
//! - Generate a unique request ID (UUID v4) for tracing

use axum::http::{HeaderValue, Request};
use serde::Deserialize;
use serde_json::Value;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

use crate::jira::{ConnectionConfig, InvalidConnection};

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Body of the project-scoped routes: validate, users, issues.
#[derive(Debug, Deserialize)]
pub struct ProjectRequest {
    pub config: ConnectionConfig,
}

impl ProjectRequest {
    /// Checks the connection settings and returns the required project key.
    pub fn project_key(&self) -> Result<&str, InvalidConnection> {
        self.config.check()?;
        self.config.require_project_key()
    }
}

/// Body of the epic-creation route.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEpicRequest {
    pub config: ConnectionConfig,
    pub epic_data: Value,
}

/// Problems with a [`CreateEpicRequest`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEpicRequest {
    #[error(transparent)]
    Connection(#[from] InvalidConnection),

    #[error("epicData must be a JSON object")]
    EpicDataNotObject,
}

impl CreateEpicRequest {
    /// The payload itself is opaque; only its outer shape is checked.
    pub fn check(&self) -> Result<(), InvalidEpicRequest> {
        self.config.check()?;
        if !self.epic_data.is_object() {
            return Err(InvalidEpicRequest::EpicDataNotObject);
        }
        Ok(())
    }
}

/// Generates `x-request-id` values for requests that arrive without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}
