//! Basic-auth credential derived from a caller's email and API token.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::header::{HeaderValue, InvalidHeaderValue};

/// `Authorization: Basic base64(email:apiToken)` for one outbound request.
///
/// Lives only as long as the handler that built it. The header value is
/// flagged sensitive so it never appears in `Debug` output of requests.
#[derive(Clone)]
pub struct BasicCredential {
    header: HeaderValue,
}

impl BasicCredential {
    pub fn new(email: &str, api_token: &str) -> Result<Self, InvalidHeaderValue> {
        let encoded = STANDARD.encode(format!("{email}:{api_token}"));
        let mut header = HeaderValue::from_str(&format!("Basic {encoded}"))?;
        header.set_sensitive(true);
        Ok(Self { header })
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.header
    }
}

impl std::fmt::Debug for BasicCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BasicCredential(<redacted>)")
    }
}
