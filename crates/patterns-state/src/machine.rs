//! Transition table
//!
//! | from  | power | volume up/down      | mute  |
//! |-------|-------|---------------------|-------|
//! | off   | on(2) | off                 | off   |
//! | on    | off   | on (volume ±1)      | muted |
//! | muted | off   | on (volume ±1)      | on    |

use crate::action::Action;
use crate::state::{StateKind, TelevisionState};
use serde::{Deserialize, Serialize};

/// State that replaces `state` when `action` is applied
#[must_use]
pub fn next_state(state: &TelevisionState, action: Action) -> TelevisionState {
    match action {
        Action::TogglePower => state.toggle_power(),
        Action::IncreaseVolume => state.increase_volume(),
        Action::LowerVolume => state.lower_volume(),
        Action::ToggleMute => state.toggle_mute(),
    }
}

/// Kinds reachable from `from` in one action, itself excluded
#[must_use]
pub fn allowed_transitions(from: StateKind) -> Vec<StateKind> {
    use StateKind::*;
    match from {
        Off => vec![On],
        On => vec![Off, Muted],
        Muted => vec![Off, On],
    }
}

/// One recorded state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// State before the action
    pub from: TelevisionState,
    /// The action
    pub action: Action,
    /// State after the action
    pub to: TelevisionState,
}
