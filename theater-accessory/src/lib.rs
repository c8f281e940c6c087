//! Theater Mode accessory
//!
//! Surfaces a single Apple TV's playback state to a home-automation bridge as
//! one read/write "Theater Mode" toggle plus three stateless trigger services
//! (Play, Pause, Stop).
//!
//! # Architecture
//!
//! ```text
//! AppleTvClient ──events──▶ device worker ──SwitchEvent──▶ TheaterModeAccessory
//!      ▲                    (TheaterBridge)                  (services + iter)
//!      └────── subscribe/remove-listeners on toggle ─────────────┘
//! ```
//!
//! The accessory facade is fully synchronous; all device I/O lives on a
//! background worker thread with its own tokio runtime. The worker opens the
//! control connection once at construction — any failure in that chain is
//! logged and swallowed, leaving the accessory permanently inert, which
//! matches the host bridge's expectation that a misconfigured accessory
//! simply never fires.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use theater_accessory::{AccessoryConfig, TheaterModeAccessory};
//!
//! let config = AccessoryConfig::from_json(raw_config)?;
//! let accessory = TheaterModeAccessory::new(client, config);
//!
//! accessory.set_enabled(true);
//! for event in accessory.iter() {
//!     println!("fired {} trigger", event);
//! }
//! ```

mod accessory;
mod config;
mod error;
mod iter;
mod registry;
mod service;
mod worker;

pub use accessory::TheaterModeAccessory;
pub use config::AccessoryConfig;
pub use error::{AccessoryError, Result};
pub use iter::SwitchEventIterator;
pub use registry::{AccessoryRegistry, THEATER_MODE_ACCESSORY};
pub use service::{
    theater_mode_services, Characteristic, CharacteristicKind, CharacteristicValue, Service,
    ServiceKind,
};

// Re-export the event type consumers iterate over.
pub use theater_state::SwitchEvent;
