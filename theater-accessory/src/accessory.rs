//! The theater-mode accessory facade
//!
//! Fully synchronous surface the host bridge talks to. All device I/O lives
//! on the background worker; the facade only mirrors the toggle, caches the
//! service list, and hands out the switch-event iterator.

use std::sync::{mpsc, Arc, Mutex, OnceLock, RwLock};
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use atv_client::AppleTvClient;
use theater_state::SwitchEvent;

use crate::iter::SwitchEventIterator;
use crate::service::{theater_mode_services, Service};
use crate::worker::{spawn_device_worker, Command};
use crate::AccessoryConfig;

/// How long a toggle write waits for the worker to apply it
const TOGGLE_ACK_TIMEOUT: Duration = Duration::from_secs(5);

/// One Apple TV exposed as a theater-mode accessory
///
/// Construction never fails: a bad credential string or an unreachable
/// device is logged by the worker and leaves the accessory inert, matching
/// the host bridge's expectation that a misconfigured accessory simply never
/// fires. The toggle still accepts writes in that state; they go nowhere.
///
/// # Example
///
/// ```rust,ignore
/// let accessory = TheaterModeAccessory::new(client, config);
///
/// accessory.set_enabled(true);
/// for event in accessory.iter() {
///     println!("fired {} trigger", event);
/// }
/// ```
pub struct TheaterModeAccessory {
    name: String,

    /// Mirror of the toggle for characteristic reads
    enabled: RwLock<bool>,

    /// Service list, built lazily once
    services: OnceLock<Arc<Vec<Service>>>,

    /// Send commands to the device worker
    command_tx: UnboundedSender<Command>,

    /// Receive fired switch events from the worker
    event_rx: Arc<Mutex<mpsc::Receiver<SwitchEvent>>>,

    /// Device worker handle (kept alive)
    _worker: JoinHandle<()>,
}

impl TheaterModeAccessory {
    /// Create an accessory and start its device worker
    pub fn new(client: Box<dyn AppleTvClient>, config: AccessoryConfig) -> Self {
        let (command_tx, command_rx) = tokio::sync::mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel();

        let name = config.name.clone();
        let worker = spawn_device_worker(client, config, command_rx, event_tx);

        Self {
            name,
            enabled: RwLock::new(false),
            services: OnceLock::new(),
            command_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            _worker: worker,
        }
    }

    /// Display name of the accessory
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Acknowledge an identify request
    ///
    /// Always succeeds; there is nothing on an Apple TV to blink.
    pub fn identify(&self) {
        tracing::info!("identify requested for {}", self.name);
    }

    /// The accessory's service list
    ///
    /// Built on first call and cached; every call returns the same list.
    pub fn services(&self) -> Arc<Vec<Service>> {
        Arc::clone(
            self.services
                .get_or_init(|| Arc::new(theater_mode_services())),
        )
    }

    /// Current toggle state
    pub fn is_enabled(&self) -> bool {
        self.enabled.read().map(|flag| *flag).unwrap_or(false)
    }

    /// Write the toggle
    ///
    /// Updates the mirrored flag, forwards the change to the worker, and
    /// waits for the worker to apply it: by the time this returns the bridge
    /// gate and the device subscriptions have moved. Disabling also discards
    /// switch events that were already queued for delivery, so nothing fires
    /// at the surface after the write. When the worker is gone (bootstrap
    /// failed), the flag still updates but the device side is inert.
    pub fn set_enabled(&self, enabled: bool) {
        if let Ok(mut flag) = self.enabled.write() {
            *flag = enabled;
        }

        let (ack_tx, ack_rx) = mpsc::channel();
        let command = Command::SetEnabled {
            enabled,
            ack: ack_tx,
        };
        if self.command_tx.send(command).is_err() {
            tracing::debug!("device worker for {} is gone, toggle is inert", self.name);
            return;
        }
        if ack_rx.recv_timeout(TOGGLE_ACK_TIMEOUT).is_err() {
            tracing::debug!("device worker for {} did not confirm the toggle", self.name);
            return;
        }

        if !enabled {
            // Events forwarded before the disable landed must not surface
            // after it.
            self.discard_pending_events();
        }
    }

    fn discard_pending_events(&self) {
        if let Ok(rx) = self.event_rx.lock() {
            while rx.try_recv().is_ok() {}
        }
    }

    /// Blocking iterator over fired switch events
    pub fn iter(&self) -> SwitchEventIterator {
        SwitchEventIterator::new(Arc::clone(&self.event_rx))
    }
}

impl Drop for TheaterModeAccessory {
    fn drop(&mut self) {
        let _ = self.command_tx.send(Command::Shutdown);
    }
}
