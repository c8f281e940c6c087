//! Theater Mode state bridge
//!
//! Converts an Apple TV's bursty, unordered notification streams into
//! de-duplicated, edge-triggered switch events, gated by an enable flag.
//!
//! # Architecture
//!
//! ```text
//! Device notifications → TheaterBridge → Option<SwitchEvent>
//!                        (transition      (edge-triggered
//!                         table)           emission)
//! ```
//!
//! The bridge is a pure state machine: it never blocks, never errors, and
//! treats null or unrecognized input as a silent no-op. Subscription
//! side-effects are expressed as [`SubscriptionChange`] values for the caller
//! to apply against its device connection.
//!
//! # Quick Start
//!
//! ```rust
//! use atv_client::{MediaState, NowPlayingInfo};
//! use theater_state::{PlaybackState, SwitchEvent, TheaterBridge};
//!
//! let mut bridge = TheaterBridge::new();
//! bridge.set_enabled(true);
//!
//! let info = NowPlayingInfo::with_state(MediaState::Playing);
//! assert_eq!(bridge.handle_now_playing(Some(&info)), Some(SwitchEvent::Play));
//! assert_eq!(bridge.playback_state(), PlaybackState::Playing);
//!
//! // Steady-state repetition emits nothing.
//! assert_eq!(bridge.handle_now_playing(Some(&info)), None);
//! ```

mod bridge;
pub mod logging;
pub mod model;

pub use bridge::{SubscriptionChange, TheaterBridge};
pub use model::{PlaybackState, SwitchEvent};

pub use logging::{init_logging, init_logging_from_env, init_silent, LoggingError, LoggingMode};
