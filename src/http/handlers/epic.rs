//! `POST /api/jira/epic`
//!
//! Forwards `epicData` to `POST /rest/api/3/issue` untouched. On success the
//! created issue (`{id, key, self}`) comes back exactly as Jira sent it; on
//! failure the raw upstream body rides along under `details`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use crate::http::request::CreateEpicRequest;
use crate::http::response::ApiError;
use crate::http::server::AppState;

const ROUTE: &str = "epic";

pub async fn create_epic(
    State(state): State<AppState>,
    payload: Result<Json<CreateEpicRequest>, JsonRejection>,
) -> Response {
    super::finish(ROUTE, run(&state, payload).await)
}

async fn run(
    state: &AppState,
    payload: Result<Json<CreateEpicRequest>, JsonRejection>,
) -> Result<Value, ApiError> {
    let Json(request) = payload?;
    request.check()?;

    let result = match state.jira.connect(&request.config) {
        Ok(client) => client.create_issue(&request.epic_data).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(created) => {
            let key = created.get("key").and_then(Value::as_str).unwrap_or("<none>");
            tracing::info!(route = ROUTE, key, "Jira epic created");
            Ok(created)
        }
        Err(err) => {
            tracing::error!(
                route = ROUTE,
                upstream_status = ?err.status(),
                upstream_body = ?err.body(),
                error = %err,
                "Error creating Jira epic"
            );
            Err(ApiError::forwarded(&err).with_details(err.body().cloned()))
        }
    }
}
