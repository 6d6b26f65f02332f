use thiserror::Error;

/// Top-level error type for the `fixly-api` crate.
///
/// Covers every failure mode of a workshop-server exchange. `fixly-core`
/// maps these into domain-level errors; consumers of the core crate never
/// see HTTP status codes or JSON parse failures directly.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured API token cannot be sent as a header value.
    #[error("Invalid API token: {0}")]
    InvalidToken(String),

    // ── Server ──────────────────────────────────────────────────────
    /// The server reported a failure (non-success HTTP status, or an
    /// envelope with `ok: false`).
    #[error("Server error (HTTP {status}): {message}")]
    Api { message: String, status: u16 },

    /// The response body is not the expected structured format.
    ///
    /// Guards against reverse proxies and captive portals that answer
    /// with a generic HTML error page and HTTP 200.
    #[error("Unexpected response content type: {content_type:?}")]
    UnexpectedContentType { content_type: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with a body preview for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the server never produced a
    /// usable response (as opposed to an explicit rejection).
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::UnexpectedContentType { .. } | Self::Deserialization { .. } => true,
            _ => false,
        }
    }

    /// The HTTP status reported by the server, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
