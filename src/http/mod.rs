//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (request ID, trace span, CORS gate, body limit)
//!     → request.rs (typed body, field checks)
//!     → handlers/ (one outbound Jira conversation per route)
//!     → response.rs (normalized JSON errors)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{ApiError, ErrorBody};
pub use server::{build_router, AppState, HttpServer};
