//! Route handlers.
//!
//! Each handler parses its typed body, talks to Jira through
//! [`crate::jira::JiraClient`], and turns the outcome into either the
//! upstream JSON or an [`ApiError`]. Failures are logged here, at the route
//! boundary, and nowhere else.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::http::response::ApiError;
use crate::observability::metrics;

pub mod epic;
pub mod health;
pub mod issues;
pub mod users;
pub mod validate;

pub use epic::create_epic;
pub use health::health;
pub use issues::list_epics;
pub use users::list_assignable_users;
pub use validate::validate;

fn finish<T: Serialize>(route: &'static str, result: Result<T, ApiError>) -> Response {
    let response = match result {
        Ok(body) => Json(body).into_response(),
        Err(err) => err.into_response(),
    };
    metrics::record_response(route, response.status());
    response
}
