//! Bridge between CLI flags and the `fixly-config` crate.
//!
//! Loads the config file, then applies `GlobalOpts` overrides in flag
//! precedence order: `--offline` beats `--server` beats the file.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use fixly_core::{RemoteConfig, WorkshopConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Build a `WorkshopConfig` from the config file plus CLI overrides.
pub fn build_workshop_config(global: &GlobalOpts) -> Result<WorkshopConfig, CliError> {
    let cfg = fixly_config::load_config_or_default();
    let mut ws = fixly_config::workshop_config(&cfg)?;

    if let Some(ref dir) = global.data_dir {
        ws.data_dir.clone_from(dir);
    }
    if let Some(secs) = global.timeout {
        ws.timeout = Duration::from_secs(secs);
    }

    if global.offline {
        ws.remote = None;
        return Ok(ws);
    }

    if let Some(ref raw) = global.server {
        let url: Url = raw.parse().map_err(|_| CliError::Validation {
            field: "server".into(),
            reason: format!("invalid URL: {raw}"),
        })?;
        let api_token = global
            .api_token
            .clone()
            .map(SecretString::from)
            .or_else(|| ws.remote.as_ref().and_then(|r| r.api_token.clone()));
        ws.remote = Some(RemoteConfig { url, api_token });
    } else if let Some(ref token) = global.api_token {
        if let Some(remote) = ws.remote.as_mut() {
            remote.api_token = Some(SecretString::from(token.clone()));
        }
    }

    Ok(ws)
}
