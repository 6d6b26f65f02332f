// ── Device domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::error::CoreError;

/// Repair workflow status.
///
/// Advanced only by explicit user action; there are no automatic
/// transitions and no ordering constraint between the states.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    #[default]
    Received,
    InProgress,
    WaitingParts,
    Ready,
    Issued,
}

impl DeviceStatus {
    /// `true` while the item is still the workshop's problem.
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Issued)
    }
}

/// How urgently the customer needs the item back.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    #[default]
    Normal,
    High,
    Critical,
}

/// One customer item currently or previously in the shop.
///
/// Created by [`intake`](Device::intake), mutated in place by status /
/// urgency / notes edits, removed by explicit delete. `id` is the sole
/// upsert and delete key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: Uuid,
    pub client_name: String,
    pub device_model: String,
    #[serde(default)]
    pub issue_description: String,
    /// Fixed at intake, immutable thereafter.
    pub date_received: DateTime<Utc>,
    #[serde(default)]
    pub status: DeviceStatus,
    /// Bumped on every real status change; display/ordering only.
    pub status_changed_at: DateTime<Utc>,
    #[serde(default)]
    pub urgency: Urgency,
    /// Inclusion in the work-planning view; independent of `status`.
    #[serde(default)]
    pub is_planned: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Device {
    /// Register a new item at the intake desk.
    ///
    /// Trims the free-text fields and rejects empty client name or
    /// device model. Stamps `date_received` and `status_changed_at` with
    /// the same instant and starts at [`DeviceStatus::Received`].
    pub fn intake(
        client_name: &str,
        device_model: &str,
        issue_description: &str,
        urgency: Urgency,
    ) -> Result<Self, CoreError> {
        let client_name = non_empty("clientName", client_name)?;
        let device_model = non_empty("deviceModel", device_model)?;
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            client_name,
            device_model,
            issue_description: issue_description.trim().to_owned(),
            date_received: now,
            status: DeviceStatus::Received,
            status_changed_at: now,
            urgency,
            is_planned: false,
            notes: None,
        })
    }

    /// Move the item to a new workflow status.
    ///
    /// Bumps `status_changed_at` only when the status actually changes;
    /// re-applying the current status is a no-op. Returns whether
    /// anything changed.
    pub fn set_status(&mut self, status: DeviceStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.status_changed_at = Utc::now();
        true
    }

    /// Check the record before it is handed to either store.
    pub fn validate(&self) -> Result<(), CoreError> {
        non_empty("clientName", &self.client_name)?;
        non_empty("deviceModel", &self.device_model)?;
        Ok(())
    }
}

fn non_empty(field: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    Ok(trimmed.to_owned())
}
