//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges. Every problem is
//! reported, not just the first.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::RelayConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.port must be non-zero")]
    ZeroPort,

    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("upstream.scheme must be \"http\" or \"https\", got {0:?}")]
    UnsupportedScheme(String),

    #[error("upstream.request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),

    #[error("observability.metrics_address {0:?} is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    if !matches!(config.upstream.scheme.as_str(), "http" | "https") {
        errors.push(ValidationError::UnsupportedScheme(config.upstream.scheme.clone()));
    }
    if config.upstream.request_timeout_secs == Some(0) {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RelayConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = RelayConfig::default();
        config.listener.port = 0;
        config.upstream.scheme = "ftp".into();
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::ZeroPort,
                ValidationError::UnsupportedScheme("ftp".into()),
                ValidationError::UnknownLogLevel("loud".into()),
            ]
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = RelayConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidMetricsAddress("nowhere".into())]
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = RelayConfig::default();
        config.upstream.request_timeout_secs = Some(0);
        assert_eq!(validate_config(&config).unwrap_err(), vec![ValidationError::ZeroTimeout]);
    }
}
