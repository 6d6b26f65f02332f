//! Persistence backends behind the [`Workshop`](crate::Workshop) facade.
//!
//! The remote backend lives in `fixly-api`; this module owns the local
//! fallback store and the key trait both dispatch on.

pub mod local;

use uuid::Uuid;

/// Anything addressable by its stable record id.
///
/// `id` uniqueness within a collection is the only integrity constraint
/// either store enforces; both upsert and delete key on it.
pub trait Keyed {
    fn key(&self) -> Uuid;
}

impl Keyed for crate::model::Device {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for crate::model::SparePart {
    fn key(&self) -> Uuid {
        self.id
    }
}
