//! Shared configuration for the fixly CLI.
//!
//! TOML config file, `FIXLY_*` environment overrides, platform paths,
//! API-token resolution (env + keyring + plaintext), and translation to
//! `fixly_core::WorkshopConfig`.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fixly_core::{RemoteConfig, WorkshopConfig};

/// Keyring service name for the stored API token.
const KEYRING_SERVICE: &str = "fixly";
/// Keyring entry name for the stored API token.
const KEYRING_TOKEN_USER: &str = "api-token";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Workshop server connection. Absent means the tool runs offline
    /// against the local store only.
    pub server: Option<ServerProfile>,

    /// Override for the local data directory (slot files).
    pub data_dir: Option<PathBuf>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// Workshop server connection profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerProfile {
    /// Server base URL (e.g., "http://192.168.1.50:8700").
    pub url: String,

    /// API token (plaintext — prefer keyring or env var).
    pub api_token: Option<String>,

    /// Environment variable name containing the API token.
    pub api_token_env: Option<String>,

    /// Override request timeout in seconds.
    pub timeout: Option<u64>,
}

// ── Paths ───────────────────────────────────────────────────────────

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "fixly", "fixly")
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    project_dirs().map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default data directory for the local slot files.
pub fn default_data_dir() -> PathBuf {
    project_dirs().map_or_else(dirs_fallback, |dirs| dirs.data_dir().to_path_buf())
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".local");
    p.push("share");
    p.push("fixly");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from defaults + file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("FIXLY_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is broken.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── API-token resolution ────────────────────────────────────────────

/// Resolve the API token from the credential chain.
///
/// Order: profile's `api_token_env` → system keyring → plaintext in the
/// config file. A missing token is not an error -- LAN servers commonly
/// run without one.
pub fn resolve_api_token(profile: &ServerProfile) -> Option<SecretString> {
    // 1. Named env var
    if let Some(ref env_name) = profile.api_token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Some(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, KEYRING_TOKEN_USER) {
        if let Ok(secret) = entry.get_password() {
            return Some(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    profile
        .api_token
        .as_ref()
        .map(|t| SecretString::from(t.clone()))
}

/// Store the API token in the system keyring.
pub fn store_api_token(token: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_TOKEN_USER)
        .map_err(|e| ConfigError::Keyring(e.to_string()))?;
    entry
        .set_password(token)
        .map_err(|e| ConfigError::Keyring(e.to_string()))
}

// ── Translation to core config ──────────────────────────────────────

/// Build a `WorkshopConfig` from the loaded configuration.
pub fn workshop_config(cfg: &Config) -> Result<WorkshopConfig, ConfigError> {
    let remote = match &cfg.server {
        Some(profile) => {
            let url: url::Url = profile.url.parse().map_err(|_| ConfigError::Validation {
                field: "server.url".into(),
                reason: format!("invalid URL: {}", profile.url),
            })?;
            Some(RemoteConfig {
                url,
                api_token: resolve_api_token(profile),
            })
        }
        None => None,
    };

    let timeout = cfg
        .server
        .as_ref()
        .and_then(|p| p.timeout)
        .unwrap_or(cfg.defaults.timeout);

    Ok(WorkshopConfig {
        remote,
        data_dir: cfg.data_dir.clone().unwrap_or_else(default_data_dir),
        timeout: Duration::from_secs(timeout),
    })
}
