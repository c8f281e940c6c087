//! Scripted in-memory Apple TV for tests
//!
//! `FakeAppleTv` implements the client contract without any network. Tests
//! drive the device side through a [`FakeController`], which delivers events
//! only for streams that currently have a listener, mirroring the real
//! library's remove-all-listeners semantics. Runtime errors are always
//! delivered.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::{
    AppleTvClient, AppleTvConnection, ClientError, Command, Credentials, DeviceEvent,
    DeviceEvents, DeviceHandle, EventStream, NowPlayingInfo, Result,
};

struct Shared {
    subscriptions: Mutex<HashSet<EventStream>>,
    tx: mpsc::UnboundedSender<DeviceEvent>,
    connected_device: Mutex<Option<String>>,
}

/// In-memory stand-in for the external device-control library
pub struct FakeAppleTv {
    devices: Vec<DeviceHandle>,
    scan_failure: Option<String>,
    connection_failure: Option<String>,
    shared: Arc<Shared>,
    receiver: Mutex<Option<mpsc::UnboundedReceiver<DeviceEvent>>>,
}

impl FakeAppleTv {
    /// Create a fake with no scannable devices
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            devices: Vec::new(),
            scan_failure: None,
            connection_failure: None,
            shared: Arc::new(Shared {
                subscriptions: Mutex::new(HashSet::new()),
                tx,
                connected_device: Mutex::new(None),
            }),
            receiver: Mutex::new(Some(rx)),
        }
    }

    /// Add a device the scan will report
    pub fn with_device(mut self, device: DeviceHandle) -> Self {
        self.devices.push(device);
        self
    }

    /// Make every scan fail with the given reason
    pub fn with_scan_failure(mut self, reason: impl Into<String>) -> Self {
        self.scan_failure = Some(reason.into());
        self
    }

    /// Make every connection attempt fail with the given reason
    pub fn with_connection_failure(mut self, reason: impl Into<String>) -> Self {
        self.connection_failure = Some(reason.into());
        self
    }

    /// Get a controller for scripting the device side
    pub fn controller(&self) -> FakeController {
        FakeController {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Default for FakeAppleTv {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppleTvClient for FakeAppleTv {
    async fn scan(&self, unique_identifier: &str) -> Result<Vec<DeviceHandle>> {
        if let Some(reason) = &self.scan_failure {
            return Err(ClientError::ScanFailed(reason.clone()));
        }
        Ok(self
            .devices
            .iter()
            .filter(|d| d.unique_identifier == unique_identifier)
            .cloned()
            .collect())
    }

    async fn open_connection(
        &self,
        device: &DeviceHandle,
        _credentials: &Credentials,
    ) -> Result<(Box<dyn AppleTvConnection>, DeviceEvents)> {
        if let Some(reason) = &self.connection_failure {
            return Err(ClientError::ConnectionFailed {
                device: device.name.clone(),
                reason: reason.clone(),
            });
        }

        let rx = self
            .receiver
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .ok_or(ClientError::AlreadyConnected)?;

        if let Ok(mut connected) = self.shared.connected_device.lock() {
            *connected = Some(device.name.clone());
        }
        let connection = FakeConnection {
            shared: Arc::clone(&self.shared),
        };
        Ok((Box::new(connection), DeviceEvents::new(rx)))
    }
}

struct FakeConnection {
    shared: Arc<Shared>,
}

impl AppleTvConnection for FakeConnection {
    fn subscribe(&mut self, stream: EventStream) {
        if let Ok(mut subscriptions) = self.shared.subscriptions.lock() {
            subscriptions.insert(stream);
        }
    }

    fn remove_listeners(&mut self, stream: EventStream) {
        if let Ok(mut subscriptions) = self.shared.subscriptions.lock() {
            subscriptions.remove(&stream);
        }
    }

    fn is_subscribed(&self, stream: EventStream) -> bool {
        self.shared
            .subscriptions
            .lock()
            .map(|s| s.contains(&stream))
            .unwrap_or(false)
    }
}

/// Scripting handle for the device side of a [`FakeAppleTv`]
#[derive(Clone)]
pub struct FakeController {
    shared: Arc<Shared>,
}

impl FakeController {
    /// Announce the currently accepted transport commands
    ///
    /// Dropped silently when the supported-commands stream has no listener.
    pub fn push_supported_commands(&self, commands: Vec<Command>) {
        self.push_gated(
            EventStream::SupportedCommands,
            DeviceEvent::SupportedCommands(commands),
        );
    }

    /// Announce the current now-playing descriptor
    ///
    /// Dropped silently when the now-playing stream has no listener.
    pub fn push_now_playing(&self, info: Option<NowPlayingInfo>) {
        self.push_gated(EventStream::NowPlaying, DeviceEvent::NowPlaying(info));
    }

    /// Raise a runtime error on the connection
    ///
    /// Errors bypass the subscription gate.
    pub fn push_error(&self, message: impl Into<String>, backtrace: Option<String>) {
        let _ = self.shared.tx.send(DeviceEvent::Error {
            message: message.into(),
            backtrace,
        });
    }

    /// Whether a connection has been opened
    pub fn is_connected(&self) -> bool {
        self.connected_device().is_some()
    }

    /// Name of the device the connection was opened against
    pub fn connected_device(&self) -> Option<String> {
        self.shared
            .connected_device
            .lock()
            .ok()
            .and_then(|connected| connected.clone())
    }

    /// Whether the given stream currently has a listener
    pub fn is_subscribed(&self, stream: EventStream) -> bool {
        self.shared
            .subscriptions
            .lock()
            .map(|s| s.contains(&stream))
            .unwrap_or(false)
    }

    /// Block until the given stream gains a listener
    ///
    /// Returns false if the timeout expires first. Intended for tests that
    /// must not race the consumer's subscription handling.
    pub fn wait_subscribed(&self, stream: EventStream, timeout: Duration) -> bool {
        self.wait_for(timeout, || self.is_subscribed(stream))
    }

    /// Block until the given stream loses its listener
    pub fn wait_unsubscribed(&self, stream: EventStream, timeout: Duration) -> bool {
        self.wait_for(timeout, || !self.is_subscribed(stream))
    }

    fn wait_for(&self, timeout: Duration, condition: impl Fn() -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        condition()
    }

    fn push_gated(&self, stream: EventStream, event: DeviceEvent) {
        let subscribed = self
            .shared
            .subscriptions
            .lock()
            .map(|s| s.contains(&stream))
            .unwrap_or(false);
        if subscribed {
            let _ = self.shared.tx.send(event);
        } else {
            tracing::trace!("dropping {:?} event with no listener", stream);
        }
    }
}
