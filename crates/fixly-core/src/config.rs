// ── Workshop configuration ──
//
// Resolved configuration handed to `Workshop::new`. Built by the
// `fixly-config` crate from TOML + environment, or assembled directly
// by tests.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Connection details for the remote workshop server.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Server root, e.g. `http://192.168.1.50:8700`.
    pub url: Url,
    /// Optional static API token sent on every request.
    pub api_token: Option<SecretString>,
}

/// Everything a [`Workshop`](crate::Workshop) needs to operate.
#[derive(Debug, Clone)]
pub struct WorkshopConfig {
    /// Remote server to probe at connect time. `None` means the session
    /// runs against the local store from the start.
    pub remote: Option<RemoteConfig>,
    /// Directory holding the local slot files.
    pub data_dir: PathBuf,
    /// Per-request timeout for remote calls.
    pub timeout: Duration,
}

impl WorkshopConfig {
    /// Offline-only config: no server, local slots in `data_dir`.
    pub fn local_only(data_dir: PathBuf) -> Self {
        Self {
            remote: None,
            data_dir,
            timeout: Duration::from_secs(30),
        }
    }
}
