//! Outbound Jira REST v3 client.
//!
//! # Responsibilities
//! - Build `{scheme}://{domain}/rest/api/3/...` URLs with proper encoding
//! - Attach Basic auth, `Accept` and `Content-Type` headers to every call
//! - Map non-2xx responses and transport failures onto [`JiraError`]
//!
//! Every call is made exactly once. There is no retry and, unless
//! configured, no timeout.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::jira::credential::BasicCredential;
use crate::jira::error::{JiraError, JiraResult};
use crate::jira::types::ConnectionConfig;
use crate::observability::metrics;

/// Page size for user and issue searches.
pub const MAX_RESULTS: u32 = 100;

fn application_json() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

/// Process-wide factory for per-request [`JiraClient`]s.
///
/// Holds the shared connection pool; everything caller-specific lives in
/// the client it hands out.
#[derive(Clone)]
pub struct JiraConnector {
    http: Client,
    scheme: String,
}

impl JiraConnector {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build()?,
            scheme: config.scheme.clone(),
        })
    }

    /// A client bound to one caller's domain and credential.
    pub fn connect(&self, conn: &ConnectionConfig) -> JiraResult<JiraClient> {
        let base = Url::parse(&format!("{}://{}/rest/api/3/", self.scheme, conn.domain))?;
        let credential = BasicCredential::new(&conn.email, &conn.api_token)?;

        Ok(JiraClient {
            http: self.http.clone(),
            base,
            credential,
        })
    }
}

/// Jira client scoped to a single inbound request.
#[derive(Debug)]
pub struct JiraClient {
    http: Client,
    base: Url,
    credential: BasicCredential,
}

impl JiraClient {
    /// `GET /myself`: the authenticated user.
    pub async fn myself(&self) -> JiraResult<Value> {
        let url = self.endpoint(&["myself"])?;
        self.execute("myself", self.http.get(url)).await
    }

    /// `GET /project/{key}`: project metadata.
    pub async fn project(&self, project_key: &str) -> JiraResult<Value> {
        let url = self.endpoint(&["project", project_key])?;
        self.execute("project", self.http.get(url)).await
    }

    /// `GET /issue/createmeta?projectKeys={key}`: projects the caller may create issues in.
    pub async fn create_meta(&self, project_key: &str) -> JiraResult<Value> {
        let mut url = self.endpoint(&["issue", "createmeta"])?;
        url.query_pairs_mut().append_pair("projectKeys", project_key);
        self.execute("createmeta", self.http.get(url)).await
    }

    /// `GET /user/assignable/search?project={key}&maxResults=100`.
    pub async fn assignable_users(&self, project_key: &str) -> JiraResult<Value> {
        let mut url = self.endpoint(&["user", "assignable", "search"])?;
        url.query_pairs_mut()
            .append_pair("project", project_key)
            .append_pair("maxResults", &MAX_RESULTS.to_string());
        self.execute("assignable_users", self.http.get(url)).await
    }

    /// `GET /search` for the project's epics.
    pub async fn search_epics(&self, project_key: &str) -> JiraResult<Value> {
        let mut url = self.endpoint(&["search"])?;
        url.query_pairs_mut()
            .append_pair("jql", &epic_jql(project_key))
            .append_pair("maxResults", &MAX_RESULTS.to_string());
        self.execute("search_epics", self.http.get(url)).await
    }

    /// `POST /issue` with the caller's payload, forwarded untouched.
    pub async fn create_issue(&self, payload: &Value) -> JiraResult<Value> {
        let url = self.endpoint(&["issue"])?;
        // Raw body: `execute` owns the Content-Type header.
        let body = serde_json::to_vec(payload)?;
        self.execute("create_issue", self.http.post(url).body(body)).await
    }

    fn endpoint(&self, segments: &[&str]) -> JiraResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn execute(&self, operation: &'static str, request: RequestBuilder) -> JiraResult<Value> {
        let start = Instant::now();
        let sent = request
            .header(AUTHORIZATION, self.credential.header_value().clone())
            .header(ACCEPT, application_json())
            .header(CONTENT_TYPE, application_json())
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                metrics::record_upstream_call(operation, None, start);
                return Err(e.into());
            }
        };

        let status = response.status();
        let raw = response.bytes().await?;
        metrics::record_upstream_call(operation, Some(status), start);

        tracing::debug!(
            operation,
            status = %status,
            bytes = raw.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Jira call completed"
        );

        if !status.is_success() {
            return Err(JiraError::from_response(status, &raw));
        }
        if raw.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&raw)?)
    }
}

fn epic_jql(project_key: &str) -> String {
    format!("project={project_key} AND issuetype=Epic")
}
