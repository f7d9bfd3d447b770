//! Demonstration reports

use crate::demonstration::Category;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Write};

/// A single observed expectation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    /// What was expected
    pub description: String,
    /// Whether it held
    pub passed: bool,
    /// Expected/actual values when it did not
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Outcome of executing one demonstration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoReport {
    /// Demonstration name
    pub pattern: String,
    /// Pattern family
    pub category: Category,
    /// Checks in the order they were made
    pub checks: Vec<Check>,
}

impl DemoReport {
    /// Empty report
    pub fn new(pattern: impl Into<String>, category: Category) -> Self {
        Self {
            pattern: pattern.into(),
            category,
            checks: Vec::new(),
        }
    }

    /// Record a boolean expectation
    pub fn check(&mut self, description: impl Into<String>, passed: bool) -> bool {
        self.checks.push(Check {
            description: description.into(),
            passed,
            detail: None,
        });
        passed
    }

    /// Record an equality expectation
    pub fn check_eq<T: PartialEq + Debug>(&mut self, description: impl Into<String>, actual: &T, expected: &T) -> bool {
        let passed = actual == expected;
        self.checks.push(Check {
            description: description.into(),
            passed,
            detail: (!passed).then(|| format!("expected {expected:?}, got {actual:?}")),
        });
        passed
    }

    /// All checks held
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Checks that did not hold
    pub fn failures(&self) -> impl Iterator<Item = &Check> + '_ {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// Human-readable summary
    #[must_use]
    pub fn generate_text(&self) -> String {
        let mut out = String::new();
        let verdict = if self.passed() { "PASS" } else { "FAIL" };
        let _ = writeln!(out, "{} ({}): {verdict}", self.pattern, self.category);
        for check in &self.checks {
            let mark = if check.passed { "ok  " } else { "FAIL" };
            let _ = write!(out, "  [{mark}] {}", check.description);
            if let Some(detail) = &check.detail {
                let _ = write!(out, " - {detail}");
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_passes() {
        let report = DemoReport::new("x", Category::Structural);
        assert!(report.passed());
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn failed_check_carries_detail() {
        let mut report = DemoReport::new("x", Category::Behavioral);
        assert!(report.check_eq("one is one", &1, &1));
        assert!(!report.check_eq("two is three", &2, &3));

        assert!(!report.passed());
        let failure = report.failures().next().unwrap();
        assert_eq!(failure.description, "two is three");
        assert_eq!(failure.detail.as_deref(), Some("expected 3, got 2"));
    }

    #[test]
    fn text_marks_each_check() {
        let mut report = DemoReport::new("demo", Category::Behavioral);
        report.check("holds", true);
        report.check("breaks", false);

        let text = report.generate_text();
        assert!(text.starts_with("demo (behavioral): FAIL\n"));
        assert!(text.contains("[ok  ] holds"));
        assert!(text.contains("[FAIL] breaks"));
    }

    #[test]
    fn serializes_without_empty_detail() {
        let mut report = DemoReport::new("demo", Category::Creational);
        report.check("holds", true);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["category"], "creational");
        assert!(json["checks"][0].get("detail").is_none());
    }
}
