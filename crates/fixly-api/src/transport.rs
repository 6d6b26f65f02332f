// Shared transport configuration for building reqwest::Client instances.
//
// Every WorkshopClient shares timeout and auth-header settings through
// this module, keeping builder logic out of the client itself.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Header carrying the static workshop-server API token.
const API_TOKEN_HEADER: &str = "X-API-TOKEN";

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Per-request timeout. A hung server fails the request instead of
    /// blocking the caller forever.
    pub timeout: Option<Duration>,
    /// Optional static API token, injected on every request.
    pub api_token: Option<SecretString>,
}

impl TransportConfig {
    /// Default request timeout when none is configured.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Build a `reqwest::Client` from this config.
    ///
    /// The API token (if any) becomes a sensitive default header, so it
    /// is present on every request without per-call plumbing.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        if let Some(ref token) = self.api_token {
            let mut value = HeaderValue::from_str(token.expose_secret())
                .map_err(|e| Error::InvalidToken(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(API_TOKEN_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(Self::DEFAULT_TIMEOUT))
            .user_agent(concat!("fixly/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(client)
    }
}
