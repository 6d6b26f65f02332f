// ── Workshop facade ──
//
// The single component application logic calls. Probes the remote store
// once per session, fixes the mode, and dispatches every read/write to
// whichever store is active. Callers never know which one answered.

use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use fixly_api::{DeviceRecord, PartRecord, TransportConfig, WorkshopClient};

use crate::config::WorkshopConfig;
use crate::error::CoreError;
use crate::model::{Device, SparePart};
use crate::store::local::{DEVICES_SLOT, PARTS_SLOT, LocalStore};

/// Fallback answer when the advice relay cannot be reached.
const ADVICE_FALLBACK: &str = "The assistant is not available right now. Start with the basics: \
     check the power supply rails, fuses, and visible solder joints, then work toward the \
     failing stage.";

// ── StoreMode ────────────────────────────────────────────────────────

/// The sticky choice of backing store, made once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreMode {
    /// The workshop server answered the readiness probe; all operations
    /// go over HTTP.
    Remote,
    /// No server, or the probe failed; all operations hit the local
    /// slot files.
    Local,
}

impl StoreMode {
    pub fn is_remote(self) -> bool {
        matches!(self, Self::Remote)
    }
}

// ── Workshop ─────────────────────────────────────────────────────────

/// The data-access facade.
///
/// The mode flag is a field of this instance, not ambient global state:
/// independent `Workshop` instances (a second process, a test) never
/// interfere with each other's mode decision.
pub struct Workshop {
    config: WorkshopConfig,
    local: LocalStore,
    remote: Option<WorkshopClient>,
    mode: OnceLock<StoreMode>,
}

impl Workshop {
    /// Create a facade from configuration. Does NOT touch the network --
    /// call [`connect()`](Self::connect) to probe the server and fix the
    /// session mode.
    pub fn new(config: WorkshopConfig) -> Result<Self, CoreError> {
        let remote = match &config.remote {
            Some(rc) => {
                let transport = TransportConfig {
                    timeout: Some(config.timeout),
                    api_token: rc.api_token.clone(),
                };
                Some(WorkshopClient::new(rc.url.clone(), &transport)?)
            }
            None => None,
        };
        let local = LocalStore::new(config.data_dir.clone());

        Ok(Self {
            config,
            local,
            remote,
            mode: OnceLock::new(),
        })
    }

    /// Access the facade configuration.
    pub fn config(&self) -> &WorkshopConfig {
        &self.config
    }

    /// The mode fixed by `connect()`, if it ran already.
    pub fn mode(&self) -> Option<StoreMode> {
        self.mode.get().copied()
    }

    // ── Connection lifecycle ─────────────────────────────────────

    /// Probe the remote store and fix the session mode.
    ///
    /// A well-formed success from the readiness/schema endpoint selects
    /// Remote mode. Anything else -- no server configured, network
    /// failure, non-success status, an HTML error page, a malformed
    /// envelope -- selects Local mode and seeds the local slots with
    /// empty collections if absent. The probe failure itself is logged,
    /// never surfaced: it is an expected condition that drives the mode
    /// decision.
    ///
    /// The decision is sticky. Calling `connect()` again returns the
    /// already-fixed mode without re-probing; a server that comes back
    /// later in the session is ignored.
    pub async fn connect(&self) -> Result<StoreMode, CoreError> {
        if let Some(mode) = self.mode() {
            debug!(?mode, "already connected, mode is sticky");
            return Ok(mode);
        }

        let mode = match &self.remote {
            None => {
                info!("no workshop server configured; running offline");
                self.local.seed_if_absent()?;
                StoreMode::Local
            }
            Some(client) => match client.ensure_schema().await {
                Ok(()) => {
                    info!(url = %client.base_url(), "workshop server ready, using remote store");
                    StoreMode::Remote
                }
                Err(e) => {
                    warn!(error = %e, "workshop server unavailable, falling back to local store");
                    self.local.seed_if_absent()?;
                    StoreMode::Local
                }
            },
        };

        Ok(*self.mode.get_or_init(|| mode))
    }

    // ── Devices ──────────────────────────────────────────────────

    /// The full device collection, in insertion order. Never partial,
    /// never paginated.
    pub async fn list_devices(&self) -> Result<Vec<Device>, CoreError> {
        match self.active_mode()? {
            StoreMode::Remote => self
                .remote_client()?
                .list_devices()
                .await?
                .into_iter()
                .map(Device::try_from)
                .collect(),
            StoreMode::Local => self.local.list(DEVICES_SLOT),
        }
    }

    /// Upsert one device by id. Validates at this boundary before either
    /// store is touched; idempotent; last write wins; the whole record
    /// is replaced in both modes.
    pub async fn save_device(&self, device: &Device) -> Result<(), CoreError> {
        device.validate()?;
        match self.active_mode()? {
            StoreMode::Remote => {
                let record = DeviceRecord::from(device);
                self.remote_client()?.upsert_device(&record).await?;
            }
            StoreMode::Local => self.local.upsert(DEVICES_SLOT, device)?,
        }
        Ok(())
    }

    /// Delete a device by id. A no-op when the id is absent.
    pub async fn delete_device(&self, id: Uuid) -> Result<(), CoreError> {
        match self.active_mode()? {
            StoreMode::Remote => Ok(self.remote_client()?.delete_device(id).await?),
            StoreMode::Local => self.local.delete::<Device>(DEVICES_SLOT, id),
        }
    }

    /// Devices flagged for the work-planning view.
    pub async fn planned_devices(&self) -> Result<Vec<Device>, CoreError> {
        let mut devices = self.list_devices().await?;
        devices.retain(|d| d.is_planned);
        Ok(devices)
    }

    // ── Parts ────────────────────────────────────────────────────

    /// The full parts collection, in insertion order.
    pub async fn list_parts(&self) -> Result<Vec<SparePart>, CoreError> {
        match self.active_mode()? {
            StoreMode::Remote => self
                .remote_client()?
                .list_parts()
                .await?
                .into_iter()
                .map(SparePart::try_from)
                .collect(),
            StoreMode::Local => self.local.list(PARTS_SLOT),
        }
    }

    /// Upsert one part by id, with the same contract as
    /// [`save_device`](Self::save_device).
    pub async fn save_part(&self, part: &SparePart) -> Result<(), CoreError> {
        part.validate()?;
        match self.active_mode()? {
            StoreMode::Remote => {
                let record = PartRecord::from(part);
                self.remote_client()?.upsert_part(&record).await?;
            }
            StoreMode::Local => self.local.upsert(PARTS_SLOT, part)?,
        }
        Ok(())
    }

    /// Delete a part by id. A no-op when the id is absent.
    pub async fn delete_part(&self, id: Uuid) -> Result<(), CoreError> {
        match self.active_mode()? {
            StoreMode::Remote => Ok(self.remote_client()?.delete_part(id).await?),
            StoreMode::Local => self.local.delete::<SparePart>(PARTS_SLOT, id),
        }
    }

    /// Inventory lines flagged to purchase.
    pub async fn parts_to_buy(&self) -> Result<Vec<SparePart>, CoreError> {
        let mut parts = self.list_parts().await?;
        parts.retain(SparePart::needs_purchase);
        Ok(parts)
    }

    // ── Advice ───────────────────────────────────────────────────

    /// Ask the diagnostic assistant for a suggestion.
    ///
    /// Never fails: any internal problem (offline session, transport
    /// error, bad payload) degrades to a human-readable fallback
    /// message.
    pub async fn advice(&self, prompt: &str) -> String {
        if self.mode() == Some(StoreMode::Remote) {
            if let Some(client) = &self.remote {
                match client.advice(prompt).await {
                    Ok(text) => return text,
                    Err(e) => warn!(error = %e, "advice request failed, using fallback"),
                }
            }
        }
        ADVICE_FALLBACK.to_owned()
    }

    // ── Private helpers ──────────────────────────────────────────

    fn active_mode(&self) -> Result<StoreMode, CoreError> {
        self.mode().ok_or(CoreError::NotConnected)
    }

    fn remote_client(&self) -> Result<&WorkshopClient, CoreError> {
        // Mode can only be Remote when a client was built, so this is a
        // config-corruption guard, not a reachable path.
        self.remote.as_ref().ok_or_else(|| CoreError::Config {
            message: "remote mode active without a configured server".into(),
        })
    }
}
