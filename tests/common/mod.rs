//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::net::SocketAddr;

use jira_relay::config::RelayConfig;
use jira_relay::http::HttpServer;
use jira_relay::lifecycle::Shutdown;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use wiremock::MockServer;

pub const EMAIL: &str = "me@corp.io";
pub const API_TOKEN: &str = "tok";
pub const PROJECT: &str = "PROJ";

/// `Basic base64("me@corp.io:tok")`
pub const AUTH_HEADER: &str = "Basic bWVAY29ycC5pbzp0b2s=";

/// A relay bound to an ephemeral port, talking plain HTTP to mock upstreams.
pub struct TestRelay {
    pub addr: SocketAddr,
    client: reqwest::Client,
    shutdown: Shutdown,
}

pub async fn spawn_relay() -> TestRelay {
    spawn_relay_with(|_| {}).await
}

/// Like [`spawn_relay`], with a hook to adjust the config before boot.
pub async fn spawn_relay_with(configure: impl FnOnce(&mut RelayConfig)) -> TestRelay {
    let mut config = RelayConfig::default();
    config.upstream.scheme = "http".into();
    config.upstream.use_system_proxy = false;
    configure(&mut config);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    TestRelay {
        addr,
        client,
        shutdown,
    }
}

impl TestRelay {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.get(self.url(path)).send().await.expect("relay unreachable");
        let status = res.status();
        (status, res.json().await.expect("non-JSON response"))
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("relay unreachable");
        let status = res.status();
        (status, res.json().await.expect("non-JSON response"))
    }
}

impl Drop for TestRelay {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Connection settings pointing at `upstream`.
pub fn connection(upstream: &MockServer) -> Value {
    connection_to(&upstream.address().to_string())
}

pub fn connection_to(domain: &str) -> Value {
    json!({
        "domain": domain,
        "email": EMAIL,
        "apiToken": API_TOKEN,
        "projectKey": PROJECT,
    })
}
