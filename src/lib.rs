//! Jira relay library.
//!
//! A stateless HTTP relay that lets browser apps reach the Jira Cloud REST
//! API with caller-supplied Basic credentials.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser                ┌──────────────────────── RELAY ───────────────────────┐
//!     ───────────────────────┼─▶ security::cors ─▶ http::server ─▶ http::handlers   │
//!                            │                                        │              │
//!                            │                                        ▼              │
//!     ◀──────────────────────┼── http::response ◀──────────── jira::JiraClient ─────┼──▶ https://{domain}/rest/api/3
//!                            │                                                      │
//!                            │   config · observability · lifecycle                 │
//!                            └──────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod jira;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
