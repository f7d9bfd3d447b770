//! Problem severity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a support problem, ordered from harmless to critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Nothing is actually wrong
    NoProblem,
    /// Answerable from the playbook
    Simple,
    /// Needs someone with more context
    Troublesome,
    /// Needs a decision quickly
    Urgent,
    /// Something is broken
    Critical,
}

impl Severity {
    /// Every severity, in ascending order.
    pub const ALL: [Severity; 5] = [
        Severity::NoProblem,
        Severity::Simple,
        Severity::Troublesome,
        Severity::Urgent,
        Severity::Critical,
    ];

    /// Stable lower-case name, also used by serde and [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::NoProblem => "no_problem",
            Severity::Simple => "simple",
            Severity::Troublesome => "troublesome",
            Severity::Urgent => "urgent",
            Severity::Critical => "critical",
        }
    }

    /// Numeric rank (0-4).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Severity::NoProblem => 0,
            Severity::Simple => 1,
            Severity::Troublesome => 2,
            Severity::Urgent => 3,
            Severity::Critical => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no severity
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: '{0}'")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == normalized)
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_rank() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn parse_accepts_display_names() {
        for severity in Severity::ALL {
            assert_eq!(severity.to_string().parse::<Severity>(), Ok(severity));
        }
    }

    #[test]
    fn parse_is_lenient_about_case_and_dashes() {
        assert_eq!("No-Problem".parse::<Severity>(), Ok(Severity::NoProblem));
        assert_eq!(" CRITICAL ".parse::<Severity>(), Ok(Severity::Critical));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "meltdown".parse::<Severity>().unwrap_err();
        assert_eq!(err, ParseSeverityError("meltdown".into()));
    }

    #[test]
    fn serde_uses_snake_case() {
        let yaml = serde_yaml::to_string(&Severity::NoProblem).unwrap();
        assert_eq!(yaml.trim(), "no_problem");

        let parsed: Severity = serde_yaml::from_str("troublesome").unwrap();
        assert_eq!(parsed, Severity::Troublesome);
    }
}
