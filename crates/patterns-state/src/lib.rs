//! Patterns State - State pattern
//!
//! A [`Television`] holds exactly one [`TelevisionState`]. Every user action
//! is answered by the current state, which yields the state to install next.
//! Off ignores everything but the power button; muted volume changes unmute
//! in the same step.
//!
//! # Example
//!
//! ```rust
//! use patterns_state::{StateKind, Television};
//!
//! let mut tv = Television::new();
//! tv.toggle_power();
//! tv.toggle_mute();
//! tv.increase_volume();
//!
//! assert_eq!(tv.kind(), StateKind::On);
//! assert_eq!(tv.volume(), Some(3));
//! assert_eq!(tv.muted(), Some(false));
//! ```

#![warn(unreachable_pub)]

pub mod machine;

mod action;
mod state;
mod television;
mod volume;

// Re-exports
pub use action::{Action, ParseActionError};
pub use machine::{allowed_transitions, next_state, Transition};
pub use state::{StateKind, TelevisionState};
pub use television::Television;
pub use volume::{Volume, VolumeOutOfRange};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
