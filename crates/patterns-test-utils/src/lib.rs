//! Testing utilities for the patterns workspace
//!
//! Shared fixtures, reference oracles and proptest strategies.

#![allow(missing_docs)]

use patterns_escalation::{Capabilities, EscalationChain, HandlerId, Severity};
use patterns_state::{Action, StateKind, Television};
use proptest::prelude::*;

/// Install a test subscriber once; repeated calls are harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

pub fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::NoProblem),
        Just(Severity::Simple),
        Just(Severity::Troublesome),
        Just(Severity::Urgent),
        Just(Severity::Critical),
    ]
}

pub fn capabilities_strategy() -> impl Strategy<Value = Vec<Severity>> {
    proptest::collection::vec(severity_strategy(), 0..3)
}

/// Capability lists for a chain of 1 to `max_len` handlers
pub fn chain_layout_strategy(max_len: usize) -> impl Strategy<Value = Vec<Vec<Severity>>> {
    proptest::collection::vec(capabilities_strategy(), 1..=max_len)
}

pub fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::TogglePower),
        Just(Action::IncreaseVolume),
        Just(Action::LowerVolume),
        Just(Action::ToggleMute),
    ]
}

pub fn actions_strategy(max_len: usize) -> impl Strategy<Value = Vec<Action>> {
    proptest::collection::vec(action_strategy(), 0..max_len)
}

/// Build a straight chain `h0 -> h1 -> ...` from capability lists.
pub fn linear_chain(layout: &[Vec<Severity>]) -> (EscalationChain, Vec<HandlerId>) {
    let mut chain = EscalationChain::new();
    let ids: Vec<HandlerId> = layout
        .iter()
        .enumerate()
        .map(|(i, caps)| {
            let caps: Capabilities = caps.iter().copied().collect();
            chain.add_handler(format!("h{i}"), caps)
        })
        .collect();
    for pair in ids.windows(2) {
        chain.set_successor(pair[0], pair[1]).unwrap();
    }
    (chain, ids)
}

/// Index of the first handler able to resolve `severity`, if any
pub fn first_capable(layout: &[Vec<Severity>], severity: Severity) -> Option<usize> {
    layout.iter().position(|caps| caps.contains(&severity))
}

/// Television powered on and stepped to `volume`
pub fn television_at(volume: u8) -> Television {
    let mut tv = Television::new();
    tv.toggle_power();
    while tv.volume() < Some(volume) {
        let before = tv.volume();
        tv.increase_volume();
        if tv.volume() == before {
            break;
        }
    }
    while tv.volume() > Some(volume) {
        tv.lower_volume();
    }
    tv
}

#[track_caller]
pub fn assert_television(
    tv: &Television,
    kind: StateKind,
    powered: bool,
    volume: Option<u8>,
    muted: Option<bool>,
) {
    assert_eq!(tv.kind(), kind, "kind");
    assert_eq!(tv.powered(), powered, "powered");
    assert_eq!(tv.volume(), volume, "volume");
    assert_eq!(tv.muted(), muted, "muted");
}
