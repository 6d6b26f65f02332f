// ── API-to-domain type conversions ──
//
// Bridges raw `fixly_api` wire records into canonical `fixly_core::model`
// domain types and back. Enum-like wire fields are plain string tags;
// parsing is strict -- an unknown tag from the server is surfaced as a
// remote error, never coerced.

use fixly_api::{DeviceRecord, PartRecord};

use crate::error::CoreError;
use crate::model::{Device, SparePart};

// ── Device ─────────────────────────────────────────────────────────

impl From<&Device> for DeviceRecord {
    fn from(d: &Device) -> Self {
        Self {
            id: d.id,
            client_name: d.client_name.clone(),
            device_model: d.device_model.clone(),
            issue_description: d.issue_description.clone(),
            date_received: d.date_received,
            status: d.status.to_string(),
            status_changed_at: d.status_changed_at,
            urgency: d.urgency.to_string(),
            is_planned: d.is_planned,
            notes: d.notes.clone(),
        }
    }
}

impl TryFrom<DeviceRecord> for Device {
    type Error = CoreError;

    fn try_from(r: DeviceRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: r.id,
            status: parse_tag("status", &r.status)?,
            urgency: parse_tag("urgency", &r.urgency)?,
            client_name: r.client_name,
            device_model: r.device_model,
            issue_description: r.issue_description,
            date_received: r.date_received,
            status_changed_at: r.status_changed_at,
            is_planned: r.is_planned,
            notes: r.notes,
        })
    }
}

// ── SparePart ──────────────────────────────────────────────────────

impl From<&SparePart> for PartRecord {
    fn from(p: &SparePart) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            part_type: p.part_type.to_string(),
            subtype: p.subtype.clone(),
            quantity: p.quantity,
            in_stock: p.in_stock,
        }
    }
}

impl TryFrom<PartRecord> for SparePart {
    type Error = CoreError;

    fn try_from(r: PartRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: r.id,
            part_type: parse_tag("type", &r.part_type)?,
            name: r.name,
            subtype: r.subtype,
            quantity: r.quantity,
            in_stock: r.in_stock,
        })
    }
}

// ── Helpers ────────────────────────────────────────────────────────

fn parse_tag<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, CoreError> {
    raw.parse().map_err(|_| CoreError::Remote {
        message: format!("server returned unknown {field} tag {raw:?}"),
        status: None,
    })
}
