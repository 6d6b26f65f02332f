//! Canonical domain types for the workshop.
//!
//! Two record kinds, no relations between them: [`Device`] (one customer
//! item in repair) and [`SparePart`] (one inventory line). `id` uniqueness
//! within a collection is the only integrity constraint either store
//! enforces.

pub mod device;
pub mod part;

pub use device::{Device, DeviceStatus, Urgency};
pub use part::{PartType, SparePart};
