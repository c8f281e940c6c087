//! The playback-state bridge
//!
//! Maps unordered device notifications onto edge-triggered switch events.
//! Notification order is whatever the device delivers; each notification is
//! evaluated independently against the transition table.

use atv_client::{Command, MediaState, NowPlayingInfo};

use crate::model::{PlaybackState, SwitchEvent};

/// Subscription side-effect requested by a toggle change
///
/// The bridge does not own the device connection; it tells the caller which
/// way to move the subscriptions. `Subscribe` always means replace: clear any
/// prior listeners before re-adding them, so a repeated enable cannot stack
/// duplicate deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionChange {
    /// (Re-)subscribe to both notification streams
    Subscribe,
    /// Remove listeners from both notification streams
    Unsubscribe,
}

/// Edge-triggered playback-state machine with a kill switch
///
/// State is one [`PlaybackState`] plus the enable flag. All handlers are
/// synchronous, infallible, and treat malformed or null input as a silent
/// no-op. While disabled, device notifications are ignored entirely and the
/// tracked state never changes.
///
/// Disabling does not reset the tracked state: a later re-enable resumes
/// comparisons against the last-known state rather than `Stopped`.
#[derive(Debug)]
pub struct TheaterBridge {
    playback_state: PlaybackState,
    enabled: bool,
}

impl TheaterBridge {
    /// Create a bridge in the initial state: `Stopped`, disabled
    pub fn new() -> Self {
        Self {
            playback_state: PlaybackState::Stopped,
            enabled: false,
        }
    }

    /// Current tracked playback state
    pub fn playback_state(&self) -> PlaybackState {
        self.playback_state
    }

    /// Whether theater mode is currently enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the enable flag and report the subscription side-effect
    ///
    /// Enabling requests a (re-)subscription to both streams; disabling
    /// unconditionally requests listener removal. The tracked playback state
    /// is left untouched either way.
    pub fn set_enabled(&mut self, enabled: bool) -> SubscriptionChange {
        tracing::info!("setting theater mode enabled to {}", enabled);
        self.enabled = enabled;
        if enabled {
            SubscriptionChange::Subscribe
        } else {
            SubscriptionChange::Unsubscribe
        }
    }

    /// Handle a supported-commands announcement
    ///
    /// An empty command set while playing or paused means the playback
    /// session went away: transition to `Stopped` and emit a Stop pulse.
    /// Anything else is a no-op.
    pub fn handle_supported_commands(&mut self, commands: &[Command]) -> Option<SwitchEvent> {
        if !self.enabled {
            return None;
        }
        if commands.is_empty()
            && (self.playback_state.is_playing() || self.playback_state.is_paused())
        {
            return self.trigger(SwitchEvent::Stop);
        }
        None
    }

    /// Handle a now-playing announcement
    ///
    /// A null descriptor means no active playback session and is ignored
    /// without error; it is not treated as stopped. A Playing observation
    /// emits Play from any other state. A Paused observation emits Pause only
    /// on the direct Playing→Paused edge, never from Stopped.
    pub fn handle_now_playing(&mut self, info: Option<&NowPlayingInfo>) -> Option<SwitchEvent> {
        if !self.enabled {
            return None;
        }
        let info = info?;

        match info.playback_state {
            Some(MediaState::Playing) if !self.playback_state.is_playing() => {
                self.trigger(SwitchEvent::Play)
            }
            Some(MediaState::Paused) if self.playback_state.is_playing() => {
                self.trigger(SwitchEvent::Pause)
            }
            _ => None,
        }
    }

    /// Commit a transition and emit its pulse
    ///
    /// Re-checks the enable flag immediately before emission so a toggle that
    /// raced a notification cannot leak an event.
    fn trigger(&mut self, event: SwitchEvent) -> Option<SwitchEvent> {
        if !self.enabled {
            return None;
        }
        self.playback_state = event.target_state();
        tracing::debug!("triggering {} switch event", event);
        Some(event)
    }
}

impl Default for TheaterBridge {
    fn default() -> Self {
        Self::new()
    }
}
