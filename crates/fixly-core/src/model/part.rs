// ── Spare part domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::error::CoreError;

/// Component category for an inventory line.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PartType {
    Capacitor,
    Resistor,
    Diode,
    Transistor,
    Led,
    Chip,
    Connector,
    Switch,
    Fuse,
    Module,
    #[default]
    Other,
}

impl PartType {
    /// Suggested subcategories for this component type.
    ///
    /// Reference data for pickers and completion; the storage layer
    /// accepts any free-text subtype.
    pub fn subtypes(self) -> &'static [&'static str] {
        match self {
            Self::Capacitor => &["electrolytic", "ceramic", "tantalum", "film", "polymer"],
            Self::Resistor => &["carbon film", "metal film", "wirewound", "smd", "variable"],
            Self::Diode => &["rectifier", "schottky", "zener", "bridge", "tvs"],
            Self::Transistor => &["npn", "pnp", "n-mosfet", "p-mosfet", "igbt"],
            Self::Led => &["indicator", "backlight strip", "power", "seven-segment"],
            Self::Chip => &["microcontroller", "eeprom", "pwm controller", "opamp", "regulator"],
            Self::Connector => &["usb", "power jack", "header", "terminal block", "fpc"],
            Self::Switch => &["tactile", "toggle", "slide", "micro", "rotary"],
            Self::Fuse => &["glass", "ceramic", "thermal", "polyfuse", "smd"],
            Self::Module => &["power supply", "relay", "display", "wifi", "motor driver"],
            Self::Other => &[],
        }
    }
}

/// One inventory line: a kind of component, not a serialized unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePart {
    pub id: Uuid,
    /// Label or value, e.g. a component rating like `"10uF 25V"`.
    pub name: String,
    #[serde(rename = "type")]
    pub part_type: PartType,
    /// Free text; [`PartType::subtypes`] suggests values, the store does
    /// not enforce them.
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// `false` flags the line for purchase.
    pub in_stock: bool,
}

fn default_quantity() -> u32 {
    1
}

impl SparePart {
    /// Add a new line to the inventory.
    ///
    /// Rejects an empty name; quantity defaults to 1 when not given.
    pub fn intake(
        name: &str,
        part_type: PartType,
        subtype: Option<String>,
        quantity: Option<u32>,
    ) -> Result<Self, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("name", "must not be empty"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            part_type,
            subtype: subtype.filter(|s| !s.trim().is_empty()),
            quantity: quantity.unwrap_or_else(default_quantity),
            in_stock: true,
        })
    }

    /// Check the record before it is handed to either store.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name", "must not be empty"));
        }
        Ok(())
    }

    /// `true` when the line is flagged to purchase.
    pub fn needs_purchase(&self) -> bool {
        !self.in_stock
    }
}
