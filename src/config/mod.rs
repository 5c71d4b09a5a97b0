//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → loader.rs (optional TOML file)
//!     → command line / PORT override (main.rs)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (immutable for the process lifetime)
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    ListenerConfig, LogFormat, ObservabilityConfig, RelayConfig, SecurityConfig, UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
