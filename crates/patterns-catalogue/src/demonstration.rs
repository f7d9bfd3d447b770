use crate::error::DemoError;
use crate::report::DemoReport;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gang-of-Four pattern family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// How objects communicate and share responsibility
    Behavioral,
    /// How objects are created
    Creational,
    /// How objects are composed
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Behavioral => write!(f, "behavioral"),
            Category::Creational => write!(f, "creational"),
            Category::Structural => write!(f, "structural"),
        }
    }
}

/// A runnable pattern example
pub trait Demonstration: Send + Sync {
    /// Unique kebab-case name
    fn name(&self) -> &'static str;

    /// Pattern family
    fn category(&self) -> Category;

    /// One-line statement of the pattern's intent
    fn intent(&self) -> &'static str;

    /// Wire up the participants, drive them and record what was observed
    ///
    /// # Errors
    /// Only when the example itself cannot be set up; failed checks are
    /// reported in the returned [`DemoReport`].
    fn execute(&self) -> Result<DemoReport, DemoError>;
}
