//! The television context
//!
//! Holds the current state and swaps it wholesale when the state answers an
//! action with a different one. The replacement is fully built before it is
//! installed.

use crate::action::Action;
use crate::machine::{next_state, Transition};
use crate::state::{StateKind, TelevisionState};

/// A television driven by its current state
#[derive(Debug, Clone, Default)]
pub struct Television {
    state: TelevisionState,
    history: Vec<Transition>,
}

impl Television {
    /// Initial (default) volume
    pub const INITIAL_VOLUME: u8 = crate::Volume::INITIAL.get();
    /// Highest volume
    pub const MAXIMUM_VOLUME: u8 = crate::Volume::MAX.get();
    /// Lowest volume
    pub const MINIMUM_VOLUME: u8 = crate::Volume::MIN.get();

    /// New television, switched off
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &TelevisionState {
        &self.state
    }

    /// Concrete state identity
    #[inline]
    #[must_use]
    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    /// Whether the television is on
    #[inline]
    #[must_use]
    pub fn powered(&self) -> bool {
        self.state.powered()
    }

    /// Volume, `None` while off
    #[inline]
    #[must_use]
    pub fn volume(&self) -> Option<u8> {
        self.state.volume()
    }

    /// Mute flag, `None` while off
    #[inline]
    #[must_use]
    pub fn muted(&self) -> Option<bool> {
        self.state.muted()
    }

    /// State changes so far, oldest first. Actions that left the state
    /// untouched are not recorded.
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Transition] {
        &self.history
    }

    /// Press the power button
    pub fn toggle_power(&mut self) {
        self.apply(Action::TogglePower);
    }

    /// Press volume up
    pub fn increase_volume(&mut self) {
        self.apply(Action::IncreaseVolume);
    }

    /// Press volume down
    pub fn lower_volume(&mut self) {
        self.apply(Action::LowerVolume);
    }

    /// Press mute
    pub fn toggle_mute(&mut self) {
        self.apply(Action::ToggleMute);
    }

    /// Dispatch `action` to the current state and install its answer
    pub fn apply(&mut self, action: Action) -> &TelevisionState {
        let next = next_state(&self.state, action);
        self.set_state(action, next);
        &self.state
    }

    fn set_state(&mut self, action: Action, next: TelevisionState) {
        if next == self.state {
            tracing::trace!(%action, state = %self.state, "action left state unchanged");
            return;
        }

        let from = std::mem::replace(&mut self.state, next);
        tracing::debug!(%action, %from, to = %next, "television state changed");
        self.history.push(Transition { from, action, to: next });
    }
}
