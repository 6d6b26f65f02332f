//! Session-mode indicator.
//!
//! The Online/Offline signal is derived once at connect time and stays
//! fixed for the session; this command just reports it.

use owo_colors::OwoColorize;
use serde::Serialize;

use fixly_core::{StoreMode, Workshop};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct StatusInfo {
    mode: StoreMode,
    server: Option<String>,
    data_dir: String,
}

pub fn handle(workshop: &Workshop, global: &GlobalOpts) -> Result<(), CliError> {
    let mode = workshop
        .mode()
        .ok_or_else(|| CliError::Internal("status requested before connect()".into()))?;

    let info = StatusInfo {
        mode,
        server: workshop
            .config()
            .remote
            .as_ref()
            .map(|r| r.url.to_string()),
        data_dir: workshop.config().data_dir.display().to_string(),
    };

    let colored = output::should_color(&global.color);
    let out = output::render_single(
        &global.output,
        &info,
        |info| detail(info, colored),
        |info| {
            if info.mode.is_remote() {
                "online".into()
            } else {
                "offline".into()
            }
        },
    );
    output::print_output(&out, global.quiet);
    Ok(())
}

fn detail(info: &StatusInfo, colored: bool) -> String {
    match info.mode {
        StoreMode::Remote => {
            let label = if colored {
                "Online".green().to_string()
            } else {
                "Online".to_owned()
            };
            format!(
                "{label} -- using workshop server at {}",
                info.server.as_deref().unwrap_or("?")
            )
        }
        StoreMode::Local => {
            let label = if colored {
                "Offline".yellow().to_string()
            } else {
                "Offline".to_owned()
            };
            format!("{label} -- using local store at {}", info.data_dir)
        }
    }
}
