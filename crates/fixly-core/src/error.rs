// ── Core error types ──
//
// User-facing errors from fixly-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<fixly_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach workshop server at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    /// The remote store rejected or mangled an operation after the
    /// session already committed to Remote mode.
    #[error("Workshop server error: {message}")]
    Remote {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Validation failed for {field}: {reason}")]
    ValidationFailed { field: String, reason: String },

    /// The local slot file could not be read, parsed, or written.
    #[error("Local store error in {slot}: {message}")]
    Storage { slot: String, message: String },

    // ── Lifecycle errors ─────────────────────────────────────────────
    /// A store operation was issued before `connect()` fixed the mode.
    #[error("Workshop is not connected -- call connect() first")]
    NotConnected,

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Shorthand for a validation failure.
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<fixly_api::Error> for CoreError {
    fn from(err: fixly_api::Error) -> Self {
        match err {
            fixly_api::Error::Transport(ref e) => {
                if e.is_connect() || e.is_timeout() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Remote {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            fixly_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            fixly_api::Error::InvalidToken(reason) => CoreError::Config {
                message: format!("Invalid API token: {reason}"),
            },
            fixly_api::Error::Api { message, status } => CoreError::Remote {
                message,
                status: Some(status),
            },
            fixly_api::Error::UnexpectedContentType { content_type } => CoreError::Remote {
                message: format!("server answered with {content_type:?} instead of JSON"),
                status: None,
            },
            fixly_api::Error::Deserialization { message, body: _ } => CoreError::Remote {
                message: format!("malformed server response: {message}"),
                status: None,
            },
        }
    }
}
