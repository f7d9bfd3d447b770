//! Television remote control
//!
//! Participants:
//! - Context: the television, holding its current state
//! - State: off, on, muted; each answers the remote's buttons

use crate::demonstration::{Category, Demonstration};
use crate::error::DemoError;
use crate::report::DemoReport;
use patterns_state::{StateKind, Television};

/// State demonstration
#[derive(Debug, Clone, Copy, Default)]
pub struct StateDemo;

type Snapshot = (StateKind, bool, Option<u8>, Option<bool>);

fn snapshot(tv: &Television) -> Snapshot {
    (tv.kind(), tv.powered(), tv.volume(), tv.muted())
}

impl Demonstration for StateDemo {
    fn name(&self) -> &'static str {
        "state"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Let an object change its behavior when its internal state changes."
    }

    fn execute(&self) -> Result<DemoReport, DemoError> {
        const OFF: Snapshot = (StateKind::Off, false, None, None);

        let mut report = DemoReport::new(self.name(), self.category());
        let mut tv = Television::new();
        report.check_eq("starts off", &snapshot(&tv), &OFF);

        tv.lower_volume();
        report.check_eq("volume down does nothing while off", &snapshot(&tv), &OFF);
        tv.increase_volume();
        report.check_eq("volume up does nothing while off", &snapshot(&tv), &OFF);
        tv.toggle_mute();
        report.check_eq("mute does nothing while off", &snapshot(&tv), &OFF);

        tv.toggle_power();
        report.check_eq(
            "powers on at volume 2, unmuted",
            &snapshot(&tv),
            &(StateKind::On, true, Some(2), Some(false)),
        );

        for _ in 0..3 {
            tv.lower_volume();
        }
        report.check_eq(
            "volume stops at 0",
            &snapshot(&tv),
            &(StateKind::On, true, Some(0), Some(false)),
        );

        for _ in 0..3 {
            tv.increase_volume();
        }
        report.check_eq(
            "three steps up reach 3",
            &snapshot(&tv),
            &(StateKind::On, true, Some(3), Some(false)),
        );

        tv.toggle_mute();
        report.check_eq(
            "mute keeps volume",
            &snapshot(&tv),
            &(StateKind::Muted, true, Some(3), Some(true)),
        );

        tv.increase_volume();
        report.check_eq(
            "volume up while muted unmutes",
            &snapshot(&tv),
            &(StateKind::On, true, Some(4), Some(false)),
        );

        tv.toggle_mute();
        tv.toggle_mute();
        report.check_eq(
            "muting twice restores the previous state",
            &snapshot(&tv),
            &(StateKind::On, true, Some(4), Some(false)),
        );

        tv.toggle_power();
        report.check_eq("powers off", &snapshot(&tv), &OFF);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_checks_pass() {
        let report = StateDemo.execute().unwrap();
        assert!(report.passed(), "{}", report.generate_text());
        assert_eq!(report.checks.len(), 11);
    }
}
