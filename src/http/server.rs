//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the relay routes
//! - Wire up middleware (request ID, tracing, CORS, body limit)
//! - Serve on a listener until the shutdown signal fires
//!
//! The body limit is enforced by the `Json` extractor, so oversized bodies
//! come back through [`crate::http::ApiError`] like any other bad body.

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Request};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::handlers;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::jira::JiraConnector;
use crate::security::cors_layer;

/// Application state injected into handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub jira: JiraConnector,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let state = AppState {
            jira: JiraConnector::new(&config.upstream)?,
        };
        let router = build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(config: &RelayConfig, state: AppState) -> Router {
    let request_id_header = HeaderName::from_static(X_REQUEST_ID);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/jira/validate", post(handlers::validate))
        .route("/api/jira/users", post(handlers::list_assignable_users))
        .route("/api/jira/epic", post(handlers::create_epic))
        .route("/api/jira/issues", post(handlers::list_epics))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.security.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id_header.clone(), UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id
                    )
                }))
                .layer(PropagateRequestIdLayer::new(request_id_header))
                .layer(cors_layer()),
        )
}
