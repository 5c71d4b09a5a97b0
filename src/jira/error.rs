//! Upstream error taxonomy and message selection.

use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors from a single outbound Jira call.
#[derive(Debug, Error)]
pub enum JiraError {
    /// Jira answered with a non-2xx status.
    #[error("{message}")]
    Status {
        status: StatusCode,
        message: String,
        body: Option<Value>,
    },

    /// DNS, connect, TLS, or body read failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body was not JSON.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// The caller's domain did not form a usable URL.
    #[error("invalid Jira URL: {0}")]
    Url(#[from] url::ParseError),

    /// The credential could not be encoded as a header.
    #[error("invalid credential header: {0}")]
    Credential(#[from] InvalidHeaderValue),
}

/// Result type for outbound Jira operations.
pub type JiraResult<T> = Result<T, JiraError>;

impl JiraError {
    /// Build a status error from a failed response's raw body.
    ///
    /// The message is Jira's first `errorMessages` entry when present,
    /// otherwise the generic "Request failed with status code N".
    pub fn from_response(status: StatusCode, raw: &[u8]) -> Self {
        let body = parse_error_body(raw);
        let message = body
            .as_ref()
            .and_then(first_error_message)
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

        JiraError::Status {
            status,
            message,
            body,
        }
    }

    /// Upstream HTTP status, if Jira answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            JiraError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw upstream error body, if any.
    pub fn body(&self) -> Option<&Value> {
        match self {
            JiraError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

fn parse_error_body(raw: &[u8]) -> Option<Value> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice(raw) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(String::from_utf8_lossy(raw).into_owned())),
    }
}

fn first_error_message(body: &Value) -> Option<String> {
    body.get("errorMessages")?
        .as_array()?
        .first()?
        .as_str()
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_error_message_wins() {
        let raw = br#"{"errorMessages":["Project 'XYZ' does not exist.","second"],"errors":{}}"#;
        let err = JiraError::from_response(StatusCode::BAD_REQUEST, raw);

        assert_eq!(err.to_string(), "Project 'XYZ' does not exist.");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.body().unwrap()["errorMessages"][1], "second");
    }

    #[test]
    fn test_falls_back_to_status_message() {
        let raw = br#"{"errorMessages":[],"errors":{"summary":"You must specify a summary."}}"#;
        let err = JiraError::from_response(StatusCode::BAD_REQUEST, raw);

        assert_eq!(err.to_string(), "Request failed with status code 400");
        assert_eq!(
            err.body(),
            Some(&json!({"errorMessages": [], "errors": {"summary": "You must specify a summary."}}))
        );
    }

    #[test]
    fn test_non_json_body_kept_as_string() {
        let err = JiraError::from_response(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");

        assert_eq!(err.to_string(), "Request failed with status code 502");
        assert_eq!(err.body(), Some(&json!("<html>bad gateway</html>")));
    }

    #[test]
    fn test_empty_body_has_no_details() {
        let err = JiraError::from_response(StatusCode::UNAUTHORIZED, b"");
        assert!(err.body().is_none());
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_non_string_error_message_ignored() {
        let err = JiraError::from_response(StatusCode::INTERNAL_SERVER_ERROR, br#"{"errorMessages":[42]}"#);
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }
}
