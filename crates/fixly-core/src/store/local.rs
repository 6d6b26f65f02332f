// ── Local fallback store ──
//
// Durable JSON-file persistence of entire collections under two fixed
// slots in a data directory. Every operation reads or writes the full
// collection snapshot: with a single workshop's volumes the O(n) rewrite
// per mutation is an accepted cost.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::error::CoreError;
use crate::store::Keyed;

/// Slot file holding the serialized Device collection.
pub const DEVICES_SLOT: &str = "devices.json";
/// Slot file holding the serialized SparePart collection.
pub const PARTS_SLOT: &str = "parts.json";

/// Whole-collection JSON persistence in a data directory.
///
/// A missing slot file reads as an empty collection, never an error.
/// Writes go through a temp file + rename so a crashed write cannot
/// truncate a slot.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory holding the slot files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the data directory and write empty collections into any
    /// slot that does not exist yet. Existing data is left untouched.
    pub fn seed_if_absent(&self) -> Result<(), CoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| storage_err("<data dir>", &e))?;
        for slot in [DEVICES_SLOT, PARTS_SLOT] {
            if !self.dir.join(slot).exists() {
                debug!(slot, "seeding empty collection");
                self.write_slot(slot, b"[]")?;
            }
        }
        Ok(())
    }

    /// Read the full collection stored in `slot`, in insertion order.
    pub fn list<T: DeserializeOwned>(&self, slot: &str) -> Result<Vec<T>, CoreError> {
        let raw = match fs::read(self.dir.join(slot)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_err(slot, &e)),
        };
        serde_json::from_slice(&raw).map_err(|e| storage_err(slot, &e))
    }

    /// Insert or replace the record whose id matches `item`.
    ///
    /// Linear scan: replace in place when the id is present, append
    /// otherwise, then rewrite the whole slot.
    pub fn upsert<T>(&self, slot: &str, item: &T) -> Result<(), CoreError>
    where
        T: Serialize + DeserializeOwned + Keyed + Clone,
    {
        let mut all: Vec<T> = self.list(slot)?;
        match all.iter_mut().find(|existing| existing.key() == item.key()) {
            Some(existing) => *existing = item.clone(),
            None => all.push(item.clone()),
        }
        self.write_collection(slot, &all)
    }

    /// Remove the record with the given id. A no-op when absent.
    pub fn delete<T>(&self, slot: &str, id: Uuid) -> Result<(), CoreError>
    where
        T: Serialize + DeserializeOwned + Keyed,
    {
        let mut all: Vec<T> = self.list(slot)?;
        let before = all.len();
        all.retain(|existing| existing.key() != id);
        if all.len() == before {
            return Ok(());
        }
        self.write_collection(slot, &all)
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn write_collection<T: Serialize>(&self, slot: &str, all: &[T]) -> Result<(), CoreError> {
        let json = serde_json::to_vec_pretty(all).map_err(|e| storage_err(slot, &e))?;
        self.write_slot(slot, &json)
    }

    fn write_slot(&self, slot: &str, bytes: &[u8]) -> Result<(), CoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| storage_err(slot, &e))?;
        let tmp = self.dir.join(format!("{slot}.tmp"));
        fs::write(&tmp, bytes).map_err(|e| storage_err(slot, &e))?;
        fs::rename(&tmp, self.dir.join(slot)).map_err(|e| storage_err(slot, &e))
    }
}

fn storage_err(slot: &str, source: &dyn std::fmt::Display) -> CoreError {
    CoreError::Storage {
        slot: slot.to_owned(),
        message: source.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Device, PartType, SparePart, Urgency};

    fn store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn missing_slot_reads_as_empty() {
        let (_dir, store) = store();
        let devices: Vec<Device> = store.list(DEVICES_SLOT).unwrap();
        assert!(devices.is_empty());
    }

    #[test]
    fn seed_creates_empty_slots_once() {
        let (_dir, store) = store();
        store.seed_if_absent().unwrap();
        assert!(store.dir().join(DEVICES_SLOT).exists());
        assert!(store.dir().join(PARTS_SLOT).exists());

        // Seeding again must not clobber data written in between.
        let part = SparePart::intake("5x20 2A", PartType::Fuse, None, None).unwrap();
        store.upsert(PARTS_SLOT, &part).unwrap();
        store.seed_if_absent().unwrap();

        let parts: Vec<SparePart> = store.list(PARTS_SLOT).unwrap();
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn upsert_appends_then_replaces() {
        let (_dir, store) = store();
        let mut device = Device::intake("Ivanov", "Vacuum X1", "", Urgency::Normal).unwrap();

        store.upsert(DEVICES_SLOT, &device).unwrap();
        store.upsert(DEVICES_SLOT, &device).unwrap();

        let devices: Vec<Device> = store.list(DEVICES_SLOT).unwrap();
        assert_eq!(devices.len(), 1, "saving twice must not duplicate");

        device.set_status(crate::model::DeviceStatus::Ready);
        store.upsert(DEVICES_SLOT, &device).unwrap();

        let devices: Vec<Device> = store.list(DEVICES_SLOT).unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].status, crate::model::DeviceStatus::Ready);
    }

    #[test]
    fn upsert_preserves_insertion_order() {
        let (_dir, store) = store();
        let names = ["R1", "R2", "R3", "R4"];
        let parts: Vec<SparePart> = names
            .iter()
            .map(|n| SparePart::intake(n, PartType::Resistor, None, None).unwrap())
            .collect();
        for p in &parts {
            store.upsert(PARTS_SLOT, p).unwrap();
        }

        // Replacing the second record must keep its position.
        let mut updated = parts[1].clone();
        updated.quantity = 99;
        store.upsert(PARTS_SLOT, &updated).unwrap();

        let stored: Vec<SparePart> = store.list(PARTS_SLOT).unwrap();
        let stored_names: Vec<&str> = stored.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(stored_names, names);
        assert_eq!(stored[1].quantity, 99);
    }

    #[test]
    fn delete_is_noop_on_absent_id() {
        let (_dir, store) = store();
        let device = Device::intake("Ivanov", "Vacuum X1", "", Urgency::Normal).unwrap();
        store.upsert(DEVICES_SLOT, &device).unwrap();

        store
            .delete::<Device>(DEVICES_SLOT, Uuid::new_v4())
            .unwrap();

        let devices: Vec<Device> = store.list(DEVICES_SLOT).unwrap();
        assert_eq!(devices.len(), 1);
    }

    #[test]
    fn delete_removes_matching_record() {
        let (_dir, store) = store();
        let keep = Device::intake("Ivanov", "Vacuum X1", "", Urgency::Normal).unwrap();
        let gone = Device::intake("Petrov", "Amp A2", "", Urgency::High).unwrap();
        store.upsert(DEVICES_SLOT, &keep).unwrap();
        store.upsert(DEVICES_SLOT, &gone).unwrap();

        store.delete::<Device>(DEVICES_SLOT, gone.id).unwrap();

        let devices: Vec<Device> = store.list(DEVICES_SLOT).unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, keep.id);
    }

    #[test]
    fn collection_round_trip_is_deep_equal() {
        let (_dir, store) = store();
        let originals: Vec<Device> = (0..5)
            .map(|i| {
                Device::intake(
                    &format!("Client {i}"),
                    &format!("Model {i}"),
                    "hum on startup",
                    Urgency::Normal,
                )
                .unwrap()
            })
            .collect();
        for d in &originals {
            store.upsert(DEVICES_SLOT, d).unwrap();
        }

        let stored: Vec<Device> = store.list(DEVICES_SLOT).unwrap();
        assert_eq!(stored, originals);
    }
}
