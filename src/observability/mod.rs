//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers / jira client
//!     → logging.rs (structured tracing events, request-id spans)
//!     → metrics.rs (counters, histograms)
//! ```
//!
//! Credentials never reach either sink.

pub mod logging;
pub mod metrics;
