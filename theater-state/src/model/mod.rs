//! Model types for theater-state

mod playback_state;
mod switch_event;

pub use playback_state::PlaybackState;
pub use switch_event::SwitchEvent;
