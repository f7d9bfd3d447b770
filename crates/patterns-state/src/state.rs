//! Television states
//!
//! Each state answers the four user actions by returning the state that
//! should replace it. Answers that keep the current state return a copy of
//! it; nothing here can fail.

use crate::volume::Volume;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which concrete state a television is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateKind {
    /// Powered down
    Off,
    /// Powered and audible
    On,
    /// Powered and muted
    Muted,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Off => write!(f, "off"),
            StateKind::On => write!(f, "on"),
            StateKind::Muted => write!(f, "muted"),
        }
    }
}

/// Current state of a television.
///
/// Muted is `On` with `muted: true`; volume and mute only exist while on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TelevisionState {
    /// No volume, no mute
    #[default]
    Off,
    /// Volume kept within bounds
    On {
        /// Current level
        volume: Volume,
        /// Whether sound is muted
        muted: bool,
    },
}

impl TelevisionState {
    /// Powered-down state
    #[inline]
    #[must_use]
    pub const fn off() -> Self {
        Self::Off
    }

    /// Audible state at the requested volume (clamped, default 2)
    #[must_use]
    pub fn on(volume: Option<i32>) -> Self {
        Self::On {
            volume: Volume::normalize(volume),
            muted: false,
        }
    }

    /// Muted state at the requested volume (clamped, default 2)
    #[must_use]
    pub fn muted_at(volume: Option<i32>) -> Self {
        Self::On {
            volume: Volume::normalize(volume),
            muted: true,
        }
    }

    /// Concrete state identity
    #[must_use]
    pub const fn kind(&self) -> StateKind {
        match self {
            Self::Off => StateKind::Off,
            Self::On { muted: false, .. } => StateKind::On,
            Self::On { muted: true, .. } => StateKind::Muted,
        }
    }

    /// Whether the television is on
    #[inline]
    #[must_use]
    pub const fn powered(&self) -> bool {
        matches!(self, Self::On { .. })
    }

    /// Volume level, `None` while off
    #[must_use]
    pub const fn volume(&self) -> Option<u8> {
        match self {
            Self::Off => None,
            Self::On { volume, .. } => Some(volume.get()),
        }
    }

    /// Mute flag, `None` while off
    #[must_use]
    pub const fn muted(&self) -> Option<bool> {
        match self {
            Self::Off => None,
            Self::On { muted, .. } => Some(*muted),
        }
    }

    /// Answer to the power button
    #[must_use]
    pub fn toggle_power(&self) -> Self {
        match self {
            Self::Off => Self::On {
                volume: Volume::INITIAL,
                muted: false,
            },
            Self::On { .. } => Self::Off,
        }
    }

    /// Answer to volume up. While muted this also unmutes.
    #[must_use]
    pub fn increase_volume(&self) -> Self {
        match *self {
            Self::Off => Self::Off,
            Self::On { volume, .. } => Self::On {
                volume: volume.saturating_up(),
                muted: false,
            },
        }
    }

    /// Answer to volume down. While muted this also unmutes.
    #[must_use]
    pub fn lower_volume(&self) -> Self {
        match *self {
            Self::Off => Self::Off,
            Self::On { volume, .. } => Self::On {
                volume: volume.saturating_down(),
                muted: false,
            },
        }
    }

    /// Answer to the mute button: flips mute, keeps the volume
    #[must_use]
    pub fn toggle_mute(&self) -> Self {
        match *self {
            Self::Off => Self::Off,
            Self::On { volume, muted } => Self::On { volume, muted: !muted },
        }
    }
}

impl fmt::Display for TelevisionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::On { volume, .. } => write!(f, "{} (volume {volume})", self.kind()),
        }
    }
}
