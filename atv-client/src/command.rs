//! Transport command identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A transport command the device currently accepts
///
/// The device announces the set of accepted commands whenever its transport
/// capabilities change; an empty set means no playback session is in control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Start or resume playback
    Play,
    /// Pause playback
    Pause,
    /// Stop playback
    Stop,
    /// Skip to the next item
    Next,
    /// Return to the previous item
    Previous,
    /// Seek forward within the current item
    SkipForward,
    /// Seek backward within the current item
    SkipBackward,
    /// Wake the device
    Wake,
    /// Press the select button
    Select,
    /// Press the menu button
    Menu,
    /// Return to the home screen
    Home,
}

impl Command {
    /// Wire identifier used by the control protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Pause => "pause",
            Command::Stop => "stop",
            Command::Next => "next",
            Command::Previous => "previous",
            Command::SkipForward => "skipForward",
            Command::SkipBackward => "skipBackward",
            Command::Wake => "wake",
            Command::Select => "select",
            Command::Menu => "menu",
            Command::Home => "home",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unknown command identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown transport command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "play" => Ok(Command::Play),
            "pause" => Ok(Command::Pause),
            "stop" => Ok(Command::Stop),
            "next" => Ok(Command::Next),
            "previous" => Ok(Command::Previous),
            "skipForward" => Ok(Command::SkipForward),
            "skipBackward" => Ok(Command::SkipBackward),
            "wake" => Ok(Command::Wake),
            "select" => Ok(Command::Select),
            "menu" => Ok(Command::Menu),
            "home" => Ok(Command::Home),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Command::Play, "play")]
    #[case(Command::Pause, "pause")]
    #[case(Command::SkipForward, "skipForward")]
    #[case(Command::Home, "home")]
    fn test_wire_identifiers(#[case] command: Command, #[case] wire: &str) {
        assert_eq!(command.as_str(), wire);
        assert_eq!(wire.parse::<Command>().unwrap(), command);
    }

    #[test]
    fn test_unknown_identifier() {
        let err = "teleport".parse::<Command>().unwrap_err();
        assert_eq!(err, UnknownCommand("teleport".to_string()));
    }
}
