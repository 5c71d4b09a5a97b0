//! Cross-origin gate.
//!
//! Browsers only forward credentialed cross-origin calls when the response
//! echoes the caller's origin. Allowed origins are the local dev servers and
//! any HTTPS subdomain of the Figma hosting domains. Everything else gets no
//! CORS headers and the browser blocks it.

use axum::http::{request::Parts, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Exact-match development origins.
pub const LOCAL_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "http://localhost:5174",
    "http://localhost:8080",
];

/// Hosting domains whose HTTPS subdomains are trusted.
pub const TRUSTED_DOMAIN_SUFFIXES: &[&str] = &[".figma.com", ".figma.dev", ".figma.site"];

/// Whether `origin` may make credentialed calls to the relay.
pub fn is_allowed_origin(origin: &str) -> bool {
    if LOCAL_ORIGINS.contains(&origin) {
        return true;
    }

    let Some(host) = origin.strip_prefix("https://") else {
        return false;
    };

    TRUSTED_DOMAIN_SUFFIXES.iter().any(|suffix| {
        host.strip_suffix(suffix).is_some_and(is_subdomain_labels)
    })
}

// one or more DNS labels separated by dots
fn is_subdomain_labels(sub: &str) -> bool {
    !sub.is_empty()
        && sub.split('.').all(|label| {
            !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// CORS layer enforcing [`is_allowed_origin`] with credentials enabled.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _: &Parts| {
            origin.to_str().is_ok_and(is_allowed_origin)
        }))
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_origins() {
        for origin in LOCAL_ORIGINS {
            assert!(is_allowed_origin(origin), "{origin}");
        }
        assert!(!is_allowed_origin("http://localhost:3001"));
        assert!(!is_allowed_origin("https://localhost:3000"));
        assert!(!is_allowed_origin("http://127.0.0.1:3000"));
    }

    #[test]
    fn test_platform_subdomains() {
        assert!(is_allowed_origin("https://www.figma.com"));
        assert!(is_allowed_origin("https://abc-123.figma.dev"));
        assert!(is_allowed_origin("https://deep.nested.figma.site"));
    }

    #[test]
    fn test_platform_requires_https_and_subdomain() {
        assert!(!is_allowed_origin("http://www.figma.com"));
        assert!(!is_allowed_origin("https://figma.com"));
        assert!(!is_allowed_origin("https://.figma.com"));
        assert!(!is_allowed_origin("https://www.figma.com.evil.io"));
        assert!(!is_allowed_origin("https://evilfigma.com"));
        assert!(!is_allowed_origin("https://evil.io/x.figma.com"));
        assert!(!is_allowed_origin("https://www.figma.org"));
    }

    #[test]
    fn test_cors_layer_creation() {
        let _layer = cors_layer();
    }
}
