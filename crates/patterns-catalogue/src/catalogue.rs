//! Registry of demonstrations
//!
//! Provides [`Catalogue`] for looking up and running demonstrations by name.

use crate::demonstration::Demonstration;
use crate::demos::{ChainOfResponsibility, StateDemo};
use crate::error::DemoError;
use crate::report::DemoReport;
use std::collections::BTreeMap;

/// Demonstrations keyed by name, iterated in name order
#[derive(Default)]
pub struct Catalogue {
    demonstrations: BTreeMap<&'static str, Box<dyn Demonstration>>,
}

impl Catalogue {
    /// Create new empty catalogue
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create catalogue with the built-in demonstrations
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut catalogue = Self::new();
        catalogue.register(Box::new(ChainOfResponsibility));
        catalogue.register(Box::new(StateDemo));
        catalogue
    }

    /// Register a demonstration, returning the one it replaced
    pub fn register(&mut self, demonstration: Box<dyn Demonstration>) -> Option<Box<dyn Demonstration>> {
        self.demonstrations.insert(demonstration.name(), demonstration)
    }

    /// Look up by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Demonstration> {
        self.demonstrations.get(name).map(|d| -> &dyn Demonstration { d.as_ref() })
    }

    /// Check if a demonstration exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.demonstrations.contains_key(name)
    }

    /// Registered names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.demonstrations.keys().copied().collect()
    }

    /// Iterate over demonstrations in name order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Demonstration> + '_ {
        self.demonstrations.values().map(|d| -> &dyn Demonstration { d.as_ref() })
    }

    /// Get number of registered demonstrations
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.demonstrations.len()
    }

    /// Check if catalogue is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.demonstrations.is_empty()
    }

    /// Execute one demonstration
    ///
    /// # Errors
    /// [`DemoError::UnknownDemonstration`] if `name` is not registered, or the
    /// demonstration's own setup error.
    pub fn run(&self, name: &str) -> Result<DemoReport, DemoError> {
        let demonstration = self
            .get(name)
            .ok_or_else(|| DemoError::UnknownDemonstration(name.to_string()))?;
        execute(demonstration)
    }

    /// Execute every demonstration in name order
    ///
    /// # Errors
    /// Stops at the first demonstration that cannot be set up.
    pub fn run_all(&self) -> Result<Vec<DemoReport>, DemoError> {
        self.iter().map(execute).collect()
    }
}

impl std::fmt::Debug for Catalogue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalogue").field("demonstrations", &self.names()).finish()
    }
}

fn execute(demonstration: &dyn Demonstration) -> Result<DemoReport, DemoError> {
    let _span = tracing::info_span!("demonstration", name = demonstration.name()).entered();
    let report = demonstration.execute()?;
    let failed = report.failures().count();
    if failed == 0 {
        tracing::info!(checks = report.checks.len(), "demonstration passed");
    } else {
        tracing::warn!(checks = report.checks.len(), failed, "demonstration failed");
    }
    Ok(report)
}
