//! Playback state enumeration

use serde::{Deserialize, Serialize};

/// Tracked playback state of the Apple TV
///
/// This is the bridge's local view, not a device-reported value: the device
/// only ever reports Playing or Paused, and the bridge infers Stopped from an
/// empty supported-command set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Playback is active
    Playing,
    /// Playback is paused
    Paused,
    /// No active playback
    Stopped,
}

impl PlaybackState {
    /// Whether this is the Playing state
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    /// Whether this is the Paused state
    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused)
    }

    /// Whether this is the Stopped state
    pub fn is_stopped(&self) -> bool {
        matches!(self, PlaybackState::Stopped)
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState::Stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(PlaybackState::default(), PlaybackState::Stopped);
    }

    #[test]
    fn test_predicates() {
        assert!(PlaybackState::Playing.is_playing());
        assert!(!PlaybackState::Playing.is_paused());
        assert!(PlaybackState::Paused.is_paused());
        assert!(PlaybackState::Stopped.is_stopped());
    }
}
