//! Now-playing descriptor types

use serde::{Deserialize, Serialize};

/// Playback state as reported by the device itself
///
/// The device only ever reports the two active states; the absence of a
/// session is signalled by a null now-playing payload, not a state value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaState {
    /// The current item is playing
    Playing,
    /// The current item is paused
    Paused,
}

/// Snapshot of what the device is currently playing
///
/// Every field other than `playback_state` is metadata carried along for
/// logging and display; none of it drives state transitions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NowPlayingInfo {
    /// Device-reported playback state, if any
    pub playback_state: Option<MediaState>,
    /// Title of the current item
    pub title: Option<String>,
    /// Artist of the current item
    pub artist: Option<String>,
    /// Album of the current item
    pub album: Option<String>,
    /// Display name of the app in control
    pub app: Option<String>,
    /// Bundle identifier of the app in control
    pub app_bundle_identifier: Option<String>,
    /// Seconds elapsed in the current item
    pub elapsed_time: Option<f64>,
    /// Total duration of the current item in seconds
    pub duration: Option<f64>,
}

impl NowPlayingInfo {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor reporting only a playback state
    pub fn with_state(state: MediaState) -> Self {
        Self {
            playback_state: Some(state),
            ..Default::default()
        }
    }

    /// Check whether the descriptor carries any meaningful content
    pub fn is_empty(&self) -> bool {
        self.playback_state.is_none()
            && self.title.is_none()
            && self.artist.is_none()
            && self.app.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        assert!(NowPlayingInfo::new().is_empty());
    }

    #[test]
    fn test_with_state() {
        let info = NowPlayingInfo::with_state(MediaState::Playing);
        assert_eq!(info.playback_state, Some(MediaState::Playing));
        assert!(!info.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let info = NowPlayingInfo {
            playback_state: Some(MediaState::Paused),
            title: Some("Severance".to_string()),
            app: Some("TV".to_string()),
            elapsed_time: Some(421.5),
            ..Default::default()
        };
        let json = serde_json::to_string(&info).unwrap();
        let back: NowPlayingInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
