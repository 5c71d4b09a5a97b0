//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (origin allow-list, preflight answers)
//!     → body size limit (http::server)
//!     → route handler
//! ```

pub mod cors;

pub use cors::{cors_layer, is_allowed_origin};
