//! Apple TV control-channel boundary
//!
//! This crate is the narrow contract against the external device-control
//! library. It defines the credential format, the transport command and
//! now-playing types carried by device notifications, and the
//! [`AppleTvClient`]/[`AppleTvConnection`] traits the rest of the workspace
//! consumes. Discovery, pairing, and the wire protocol itself are out of
//! scope: a production implementation wraps a real control library, and the
//! in-memory [`FakeAppleTv`] (behind the `test-support` feature) scripts the
//! same contract for tests.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use atv_client::{AppleTvClient, Credentials, EventStream};
//!
//! let credentials = Credentials::parse(&config.credentials)?;
//! let devices = client.scan(credentials.unique_identifier()).await?;
//! let device = devices.first().ok_or(ClientError::NoDeviceFound)?;
//!
//! let (mut connection, mut events) = client.open_connection(device, &credentials).await?;
//! connection.subscribe(EventStream::NowPlaying);
//!
//! while let Some(event) = events.next().await {
//!     println!("device event: {:?}", event);
//! }
//! ```

mod client;
mod command;
mod credentials;
mod error;
mod event;
mod now_playing;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use client::{AppleTvClient, AppleTvConnection, DeviceHandle};
pub use command::Command;
pub use credentials::Credentials;
pub use error::{ClientError, CredentialsError, Result};
pub use event::{DeviceEvent, DeviceEvents, EventStream};
pub use now_playing::{MediaState, NowPlayingInfo};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeAppleTv, FakeController};
