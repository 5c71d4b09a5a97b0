//! Caller-supplied connection settings.

use serde::Deserialize;
use thiserror::Error;

/// Per-request Jira connection settings. Never stored.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    /// Jira Cloud host, e.g. `acme.atlassian.net`. No scheme, no path.
    pub domain: String,
    pub email: String,
    pub api_token: String,
    #[serde(default)]
    pub project_key: Option<String>,
}

/// Why a [`ConnectionConfig`] was rejected before any outbound call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConnection {
    #[error("config.{0} is required")]
    Missing(&'static str),

    #[error("config.domain must be a bare hostname such as your-team.atlassian.net")]
    MalformedDomain,
}

impl ConnectionConfig {
    /// Check the fields every route needs.
    pub fn check(&self) -> Result<(), InvalidConnection> {
        if self.domain.trim().is_empty() {
            return Err(InvalidConnection::Missing("domain"));
        }
        if self.email.trim().is_empty() {
            return Err(InvalidConnection::Missing("email"));
        }
        if self.api_token.is_empty() {
            return Err(InvalidConnection::Missing("apiToken"));
        }
        if !is_bare_host(&self.domain) {
            return Err(InvalidConnection::MalformedDomain);
        }
        Ok(())
    }

    /// The project key, for routes scoped to a project.
    pub fn require_project_key(&self) -> Result<&str, InvalidConnection> {
        match self.project_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(InvalidConnection::Missing("projectKey")),
        }
    }
}

// host or host:port; rejects schemes, paths, userinfo, queries and whitespace.
fn is_bare_host(domain: &str) -> bool {
    let (host, port) = match domain.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (domain, None),
    };

    let host_ok = !host.is_empty()
        && !host.starts_with(['.', '-'])
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    let port_ok = port.map_or(true, |p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));

    host_ok && port_ok
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("domain", &self.domain)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .field("project_key", &self.project_key)
            .finish()
    }
}
