//! Config command handlers: init, path, show, set-token.
//!
//! These run before any `Workshop` exists -- no connection is needed to
//! manage configuration.

use dialoguer::Input;

use fixly_config::{Config, ServerProfile};

use crate::cli::{ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(command: ConfigCommand, global: &GlobalOpts) -> Result<(), CliError> {
    match command {
        ConfigCommand::Path => {
            output::print_output(
                &fixly_config::config_path().display().to_string(),
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::Show => {
            let mut cfg = fixly_config::load_config_or_default();
            // Never echo a plaintext token back to the terminal.
            if let Some(ref mut server) = cfg.server {
                if server.api_token.is_some() {
                    server.api_token = Some("<redacted>".into());
                }
            }
            let rendered = toml::to_string_pretty(&cfg)
                .map_err(|e| CliError::Config { message: e.to_string() })?;
            output::print_output(rendered.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init => init(global),

        ConfigCommand::SetToken => {
            let token = rpassword::prompt_password("API token: ")?;
            if token.trim().is_empty() {
                return Err(CliError::Validation {
                    field: "api-token".into(),
                    reason: "must not be empty".into(),
                });
            }
            fixly_config::store_api_token(token.trim())?;
            output::print_output("Token stored in the system keyring.", global.quiet);
            Ok(())
        }
    }
}

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = fixly_config::load_config_or_default();

    let current_url = cfg
        .server
        .as_ref()
        .map(|s| s.url.clone())
        .unwrap_or_default();
    let url: String = Input::new()
        .with_prompt("Workshop server URL (empty for offline-only)")
        .with_initial_text(current_url)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CliError::Internal(e.to_string()))?;

    cfg.server = if url.trim().is_empty() {
        None
    } else {
        // Validate before persisting.
        url.trim()
            .parse::<url::Url>()
            .map_err(|_| CliError::Validation {
                field: "server.url".into(),
                reason: format!("invalid URL: {url}"),
            })?;
        Some(ServerProfile {
            url: url.trim().to_owned(),
            api_token: None,
            api_token_env: Some("FIXLY_API_TOKEN".into()),
            timeout: cfg.server.as_ref().and_then(|s| s.timeout),
        })
    };

    write_config(&cfg)?;
    output::print_output(
        &format!("Wrote {}", fixly_config::config_path().display()),
        global.quiet,
    );
    if cfg.server.is_some() {
        output::print_output(
            "Store the API token with: fixly config set-token",
            global.quiet,
        );
    }
    Ok(())
}

fn write_config(cfg: &Config) -> Result<(), CliError> {
    fixly_config::save_config(cfg).map_err(CliError::from)
}
