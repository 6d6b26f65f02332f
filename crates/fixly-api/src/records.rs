//! Wire-format records exchanged with the workshop server.
//!
//! Field names are camelCase (the server contract) and enum-like fields
//! travel as plain strings -- `fixly-core` parses them into its closed
//! domain enums and rejects values it does not know.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the `devices` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRecord {
    pub id: Uuid,
    pub client_name: String,
    pub device_model: String,
    #[serde(default)]
    pub issue_description: String,
    pub date_received: DateTime<Utc>,
    /// Status tag, e.g. `"RECEIVED"`, `"IN_PROGRESS"`.
    pub status: String,
    pub status_changed_at: DateTime<Utc>,
    /// Urgency tag, e.g. `"NORMAL"`, `"CRITICAL"`.
    pub urgency: String,
    #[serde(default)]
    pub is_planned: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One row of the `parts` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    pub id: Uuid,
    pub name: String,
    /// Component category tag, e.g. `"CAPACITOR"`, `"RESISTOR"`.
    #[serde(rename = "type")]
    pub part_type: String,
    #[serde(default)]
    pub subtype: Option<String>,
    pub quantity: u32,
    pub in_stock: bool,
}
