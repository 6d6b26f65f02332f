//! Diagnostic-advice command handler.
//!
//! The advice boundary never fails: an offline session or a broken relay
//! produces a fallback message, so this handler has no error paths of
//! its own.

use fixly_core::Workshop;

use crate::cli::{AdviceArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    workshop: &Workshop,
    args: AdviceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let text = workshop.advice(&args.prompt).await;
    output::print_output(&text, global.quiet);
    Ok(())
}
