//! Async HTTP client for the fixly workshop server.
//!
//! The server keeps one relational table per collection (devices, spare
//! parts) and wraps every response in a `{ ok, error, data }` envelope.
//! This crate owns the transport mechanics only:
//!
//! - **[`WorkshopClient`]** — list / upsert / delete per collection, the
//!   readiness probe ([`ensure_schema`](WorkshopClient::ensure_schema)),
//!   and the diagnostic-advice endpoint.
//! - **Wire records** ([`records`]) — loosely-typed request/response
//!   shapes. Enum-like fields travel as strings; `fixly-core` parses them
//!   into closed domain enums.
//! - **[`TransportConfig`]** — shared `reqwest::Client` construction
//!   (timeout, API token header).
//!
//! Mode selection (remote vs local fallback) is not decided here;
//! `fixly-core` probes through this client and owns that policy.

pub mod client;
pub mod error;
pub mod records;
pub mod transport;

pub use client::WorkshopClient;
pub use error::Error;
pub use records::{DeviceRecord, PartRecord};
pub use transport::TransportConfig;
