//! `POST /api/jira/validate`
//!
//! Credentials alone are not enough: the caller must also be able to
//! create issues in the project, so three lookups run in order
//!
//! ```text
//! myself → project/{key} → issue/createmeta?projectKeys={key}
//! ```
//!
//! and the first failure decides the response.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::http::request::ProjectRequest;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::jira::{JiraClient, JiraError};

const ROUTE: &str = "validate";

pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Check your email and API token.";
pub const NOT_FOUND: &str = "Jira domain or project not found.";
pub const NO_CREATE_PERMISSION: &str = "No permission to create issues. Contact your Jira admin.";

#[derive(Debug, Serialize)]
pub struct Validated {
    pub valid: bool,
    pub user: Value,
    pub project: Value,
}

pub async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<ProjectRequest>, JsonRejection>,
) -> Response {
    super::finish(ROUTE, run(&state, payload).await)
}

async fn run(
    state: &AppState,
    payload: Result<Json<ProjectRequest>, JsonRejection>,
) -> Result<Validated, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::from(e).invalid())?;
    let project_key = request
        .project_key()
        .map_err(|e| ApiError::from(e).invalid())?;

    let lookups = match state.jira.connect(&request.config) {
        Ok(client) => lookup(&client, project_key).await,
        Err(e) => Err(e),
    };

    let (user, project, create_meta) = lookups.map_err(|err| {
        tracing::error!(
            route = ROUTE,
            upstream_status = ?err.status(),
            upstream_body = ?err.body(),
            error = %err,
            "Jira validation error"
        );
        validation_failure(&err)
    })?;

    if !has_creatable_project(&create_meta) {
        tracing::warn!(
            route = ROUTE,
            project_key,
            "Credentials valid but no creatable project returned"
        );
        return Err(ApiError::new(StatusCode::FORBIDDEN, NO_CREATE_PERMISSION).invalid());
    }

    Ok(Validated {
        valid: true,
        user,
        project,
    })
}

async fn lookup(client: &JiraClient, project_key: &str) -> Result<(Value, Value, Value), JiraError> {
    let user = client.myself().await?;
    let project = client.project(project_key).await?;
    let create_meta = client.create_meta(project_key).await?;
    Ok((user, project, create_meta))
}

/// 401 and 404 get fixed messages; anything else is a 500 carrying the
/// upstream or transport message.
pub fn validation_failure(err: &JiraError) -> ApiError {
    let failure = match err.status() {
        Some(StatusCode::UNAUTHORIZED) => ApiError::new(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS),
        Some(StatusCode::NOT_FOUND) => ApiError::new(StatusCode::NOT_FOUND, NOT_FOUND),
        _ => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };
    failure.invalid()
}

/// True when createmeta lists at least one project.
pub fn has_creatable_project(create_meta: &Value) -> bool {
    create_meta
        .get("projects")
        .and_then(Value::as_array)
        .is_some_and(|projects| !projects.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_has_creatable_project() {
        assert!(has_creatable_project(&json!({"projects": [{"key": "PROJ"}]})));
        assert!(!has_creatable_project(&json!({"projects": []})));
        assert!(!has_creatable_project(&json!({})));
        assert!(!has_creatable_project(&Value::Null));
    }

    #[test]
    fn test_failure_mapping() {
        let unauthorized = JiraError::from_response(StatusCode::UNAUTHORIZED, b"");
        let api = validation_failure(&unauthorized);
        assert_eq!(api.status, StatusCode::UNAUTHORIZED);
        assert_eq!(api.body.error, INVALID_CREDENTIALS);
        assert_eq!(api.body.valid, Some(false));

        let missing = JiraError::from_response(StatusCode::NOT_FOUND, br#"{"errorMessages":["No project"]}"#);
        let api = validation_failure(&missing);
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.body.error, NOT_FOUND);
    }

    #[test]
    fn test_other_failures_become_500() {
        let throttled = JiraError::from_response(
            StatusCode::TOO_MANY_REQUESTS,
            br#"{"errorMessages":["Rate limit exceeded"]}"#,
        );
        let api = validation_failure(&throttled);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body.error, "Rate limit exceeded");
        assert!(api.body.details.is_none());
    }
}
