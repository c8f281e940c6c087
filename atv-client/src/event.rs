//! Device-originated events and subscription stream kinds

use tokio::sync::mpsc;

use crate::{Command, NowPlayingInfo};

/// Subscribable notification streams on a device connection
///
/// The error stream is not listed here: runtime errors are always delivered
/// regardless of which notification streams have listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventStream {
    /// Announcements of the currently accepted transport commands
    SupportedCommands,
    /// Announcements of the current now-playing descriptor
    NowPlaying,
}

impl EventStream {
    /// Both subscribable streams, in registration order
    pub const ALL: [EventStream; 2] = [EventStream::SupportedCommands, EventStream::NowPlaying];
}

/// A single notification from the device connection
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    /// The device announced which transport commands it currently accepts
    SupportedCommands(Vec<Command>),
    /// The device announced its current playback descriptor
    ///
    /// `None` means no active playback session and is expected, not an error.
    NowPlaying(Option<NowPlayingInfo>),
    /// A runtime error on the control connection
    Error {
        /// Human-readable error message
        message: String,
        /// Backtrace or stack context, when the underlying library provides one
        backtrace: Option<String>,
    },
}

/// Receiving side of a device connection's event stream
///
/// Handed out exactly once per connection by
/// [`AppleTvClient::open_connection`](crate::AppleTvClient::open_connection).
#[derive(Debug)]
pub struct DeviceEvents {
    rx: mpsc::UnboundedReceiver<DeviceEvent>,
}

impl DeviceEvents {
    /// Wrap a raw receiver
    pub fn new(rx: mpsc::UnboundedReceiver<DeviceEvent>) -> Self {
        Self { rx }
    }

    /// Wait for the next device event
    ///
    /// Returns `None` once the connection has gone away. Cancel-safe.
    pub async fn next(&mut self) -> Option<DeviceEvent> {
        self.rx.recv().await
    }

    /// Take an event without waiting, if one is queued
    pub fn try_next(&mut self) -> Option<DeviceEvent> {
        self.rx.try_recv().ok()
    }
}
