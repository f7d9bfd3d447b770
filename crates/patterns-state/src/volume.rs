use serde::{Deserialize, Serialize};
use std::fmt;

/// Television volume, always within [`Volume::MIN`]..=[`Volume::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Volume(u8);

impl Volume {
    /// Lowest level
    pub const MIN: Volume = Volume(0);
    /// Highest level
    pub const MAX: Volume = Volume(10);
    /// Level a television powers on with
    pub const INITIAL: Volume = Volume(2);

    /// Clamp an arbitrary level into range
    #[must_use]
    pub fn clamped(level: i32) -> Self {
        let level = level.clamp(i32::from(Self::MIN.0), i32::from(Self::MAX.0));
        // In range after the clamp above.
        Self(u8::try_from(level).unwrap_or(Self::MAX.0))
    }

    /// Clamp a requested level, falling back to [`Volume::INITIAL`]
    #[must_use]
    pub fn normalize(requested: Option<i32>) -> Self {
        requested.map_or(Self::INITIAL, Self::clamped)
    }

    /// Numeric level
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// One step louder, stopping at [`Volume::MAX`]
    #[must_use]
    pub fn saturating_up(self) -> Self {
        if self < Self::MAX {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// One step quieter, stopping at [`Volume::MIN`]
    #[must_use]
    pub fn saturating_down(self) -> Self {
        if self > Self::MIN {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl From<Volume> for u8 {
    fn from(value: Volume) -> Self {
        value.0
    }
}

impl TryFrom<i32> for Volume {
    type Error = VolumeOutOfRange;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (i32::from(Self::MIN.0)..=i32::from(Self::MAX.0)).contains(&value) {
            Ok(Self::clamped(value))
        } else {
            Err(VolumeOutOfRange(value))
        }
    }
}

/// Rejected when deserializing a level outside the allowed range
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("volume {0} is outside 0..=10")]
pub struct VolumeOutOfRange(pub i32);

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
