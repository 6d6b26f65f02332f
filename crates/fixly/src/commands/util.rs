//! Shared helpers for command handlers.

use std::io::IsTerminal;

use uuid::Uuid;

use crate::error::CliError;

/// Resolve an id argument against a collection.
///
/// Accepts a full UUID or a unique lowercase prefix of one. Zero matches
/// is a not-found error, more than one is an ambiguity error.
pub fn resolve<'a, T>(
    items: &'a [T],
    id_of: impl Fn(&T) -> Uuid,
    raw: &str,
    resource_type: &str,
    list_command: &str,
) -> Result<&'a T, CliError> {
    if let Ok(id) = raw.parse::<Uuid>() {
        return items.iter().find(|item| id_of(item) == id).ok_or_else(|| {
            CliError::NotFound {
                resource_type: resource_type.into(),
                identifier: raw.into(),
                list_command: list_command.into(),
            }
        });
    }

    let prefix = raw.to_lowercase();
    let mut matches = items
        .iter()
        .filter(|item| id_of(item).to_string().starts_with(&prefix));

    match (matches.next(), matches.next()) {
        (Some(only), None) => Ok(only),
        (None, _) => Err(CliError::NotFound {
            resource_type: resource_type.into(),
            identifier: raw.into(),
            list_command: list_command.into(),
        }),
        (Some(_), Some(_)) => Err(CliError::AmbiguousId {
            resource_type: resource_type.into(),
            identifier: raw.into(),
        }),
    }
}

/// Confirm a destructive action.
///
/// `--yes` skips the prompt; a non-interactive stdin without `--yes` is
/// an error rather than a hang.
pub fn confirm(action: &str, yes: bool) -> Result<bool, CliError> {
    if yes {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    dialoguer::Confirm::new()
        .with_prompt(format!("{action}?"))
        .default(false)
        .interact()
        .map_err(|e| CliError::Internal(e.to_string()))
}

/// First 8 hex characters of a UUID, for compact table columns.
pub fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}
