//! Subcommand handlers.

pub mod advice;
pub mod config_cmd;
pub mod devices;
pub mod parts;
pub mod status;
pub mod util;

use fixly_core::Workshop;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a data command to its handler. `config` and `completions`
/// never reach this point -- they are handled before a `Workshop` is
/// built.
pub async fn dispatch(
    cmd: Command,
    workshop: &Workshop,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Devices(args) => devices::handle(workshop, args, global).await,
        Command::Parts(args) => parts::handle(workshop, args, global).await,
        Command::Advice(args) => advice::handle(workshop, args, global).await,
        Command::Status => status::handle(workshop, global),
        Command::Config(_) | Command::Completions(_) => {
            Err(CliError::Internal("command handled before dispatch".into()))
        }
    }
}
