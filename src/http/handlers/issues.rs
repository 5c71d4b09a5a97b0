//! `POST /api/jira/issues`: the project's epics, upstream search result verbatim.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::http::request::ProjectRequest;
use crate::http::response::ApiError;
use crate::http::server::AppState;

const ROUTE: &str = "issues";

pub async fn list_epics(
    State(state): State<AppState>,
    payload: Result<Json<ProjectRequest>, JsonRejection>,
) -> Response {
    super::finish(ROUTE, run(&state, payload).await)
}

async fn run(
    state: &AppState,
    payload: Result<Json<ProjectRequest>, JsonRejection>,
) -> Result<Value, ApiError> {
    let Json(request) = payload?;
    let project_key = request.project_key()?;

    let result = match state.jira.connect(&request.config) {
        Ok(client) => client.search_epics(project_key).await,
        Err(e) => Err(e),
    };

    result.map_err(|err| {
        tracing::error!(
            route = ROUTE,
            upstream_status = ?err.status(),
            upstream_body = ?err.body(),
            error = %err,
            "Error fetching Jira issues"
        );
        ApiError::forwarded(&err)
    })
}
