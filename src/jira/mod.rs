//! Jira Cloud REST v3 access.
//!
//! # Data Flow
//! ```text
//! ConnectionConfig (from the request body)
//!     → JiraConnector::connect (URL base + BasicCredential)
//!     → JiraClient::{myself, project, create_meta, ...}
//!     → Ok(upstream JSON) | Err(JiraError)
//! ```
//!
//! Every route handler goes through this module, so header construction
//! and error normalization exist in exactly one place.

pub mod client;
pub mod credential;
pub mod error;
pub mod types;

pub use client::{JiraClient, JiraConnector, MAX_RESULTS};
pub use credential::BasicCredential;
pub use error::{JiraError, JiraResult};
pub use types::{ConnectionConfig, InvalidConnection};
