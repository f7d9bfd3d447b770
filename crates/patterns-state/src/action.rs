use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A button press on the remote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Power on/off
    TogglePower,
    /// Volume up
    IncreaseVolume,
    /// Volume down
    LowerVolume,
    /// Mute on/off
    ToggleMute,
}

impl Action {
    /// Every action
    pub const ALL: [Action; 4] = [
        Action::TogglePower,
        Action::IncreaseVolume,
        Action::LowerVolume,
        Action::ToggleMute,
    ];

    /// Short name used on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::TogglePower => "power",
            Action::IncreaseVolume => "volume-up",
            Action::LowerVolume => "volume-down",
            Action::ToggleMute => "mute",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no action
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: '{0}' (expected power, volume-up, volume-down or mute)")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "power" | "toggle-power" => Ok(Action::TogglePower),
            "volume-up" | "up" | "+" => Ok(Action::IncreaseVolume),
            "volume-down" | "down" | "-" => Ok(Action::LowerVolume),
            "mute" | "toggle-mute" => Ok(Action::ToggleMute),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}
