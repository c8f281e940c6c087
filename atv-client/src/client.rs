//! Client and connection traits

use async_trait::async_trait;

use crate::{Credentials, DeviceEvents, EventStream, Result};

/// A device located by a scan
///
/// Opaque beyond its identifying metadata; all control goes through the
/// connection opened from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceHandle {
    /// Unique identifier the device advertises
    pub unique_identifier: String,
    /// Friendly device name
    pub name: String,
    /// Model string, e.g. "Apple TV 4K"
    pub model: String,
}

impl DeviceHandle {
    /// Create a handle from its advertised metadata
    pub fn new(
        unique_identifier: impl Into<String>,
        name: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            unique_identifier: unique_identifier.into(),
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Entry point into the external device-control library
///
/// Implementations wrap whatever discovery and pairing machinery the
/// underlying library provides; this workspace only ever scans for one
/// identifier and opens one connection.
#[async_trait]
pub trait AppleTvClient: Send {
    /// Scan for devices advertising the given unique identifier
    ///
    /// May legitimately return more than one handle; callers take the first.
    async fn scan(&self, unique_identifier: &str) -> Result<Vec<DeviceHandle>>;

    /// Open an authenticated control connection to a scanned device
    ///
    /// Returns the connection and its event stream. The stream can be handed
    /// out only once; a second open fails with
    /// [`ClientError::AlreadyConnected`](crate::ClientError::AlreadyConnected).
    async fn open_connection(
        &self,
        device: &DeviceHandle,
        credentials: &Credentials,
    ) -> Result<(Box<dyn AppleTvConnection>, DeviceEvents)>;
}

/// An open control connection
///
/// Notification streams are off until subscribed. Subscribing replaces any
/// prior listeners for that stream, so repeated subscribes can never cause
/// duplicate deliveries. Errors flow regardless of subscriptions.
pub trait AppleTvConnection: Send {
    /// Start delivering events for the given stream
    fn subscribe(&mut self, stream: EventStream);

    /// Stop delivering events for the given stream
    fn remove_listeners(&mut self, stream: EventStream);

    /// Whether the given stream currently has a listener
    fn is_subscribed(&self, stream: EventStream) -> bool;
}
