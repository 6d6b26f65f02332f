//! Data layer between `fixly-api` and UI consumers (currently the CLI).
//!
//! This crate owns the business logic and the dual-mode persistence
//! strategy for the fixly workspace:
//!
//! - **[`Workshop`]** — the data-access facade every consumer calls.
//!   [`connect()`](Workshop::connect) probes the remote workshop server
//!   exactly once and fixes the session's [`StoreMode`]: Remote when the
//!   probe returns a well-formed success, Local (durable JSON slots on
//!   disk) otherwise. The decision is sticky; every later read/write is
//!   dispatched to the active store without the caller knowing which.
//!
//! - **Domain model** ([`model`]) — [`Device`] and [`SparePart`] with
//!   closed enumerations ([`DeviceStatus`], [`Urgency`], [`PartType`]),
//!   validating intake constructors, and the static subtype catalog.
//!
//! - **[`LocalStore`]** — whole-collection JSON persistence under two
//!   fixed slots, the offline fallback store.
//!
//! - **Advice boundary** — [`Workshop::advice`] relays a prompt to the
//!   server's language-model endpoint and absorbs every failure into a
//!   fallback message; it never returns an error.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod store;
pub mod workshop;

pub use config::{RemoteConfig, WorkshopConfig};
pub use error::CoreError;
pub use model::{Device, DeviceStatus, PartType, SparePart, Urgency};
pub use store::local::LocalStore;
pub use workshop::{StoreMode, Workshop};
