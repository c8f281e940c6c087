//! Edge-triggered switch events

use std::fmt;

use serde::{Deserialize, Serialize};

use super::PlaybackState;

/// A one-shot trigger fired on a playback-state edge
///
/// Each variant maps to one stateless trigger service on the accessory. These
/// are momentary pulses, not levels: an event is emitted only when the newly
/// computed state differs from the tracked state in the direction the event
/// represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchEvent {
    /// Playback started
    Play,
    /// Playback paused
    Pause,
    /// Playback stopped
    Stop,
}

impl SwitchEvent {
    /// The playback state this event transitions into
    pub fn target_state(&self) -> PlaybackState {
        match self {
            SwitchEvent::Play => PlaybackState::Playing,
            SwitchEvent::Pause => PlaybackState::Paused,
            SwitchEvent::Stop => PlaybackState::Stopped,
        }
    }

    /// Service label index of the trigger service this event fires
    pub fn label_index(&self) -> u8 {
        match self {
            SwitchEvent::Play => 1,
            SwitchEvent::Pause => 2,
            SwitchEvent::Stop => 3,
        }
    }

    /// Display name of the trigger service
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchEvent::Play => "Play",
            SwitchEvent::Pause => "Pause",
            SwitchEvent::Stop => "Stop",
        }
    }
}

impl fmt::Display for SwitchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
