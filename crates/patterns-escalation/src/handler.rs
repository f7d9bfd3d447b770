//! Handlers and their capability sets

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use uuid::Uuid;

/// Identity of a handler within an [`EscalationChain`](crate::EscalationChain)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandlerId(pub Uuid);

impl HandlerId {
    /// Generate a fresh id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HandlerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of severities a handler is able to resolve
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(BTreeSet<Severity>);

impl Capabilities {
    /// Empty set: the handler only ever escalates
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    /// Membership test used during dispatch
    #[inline]
    #[must_use]
    pub fn contains(&self, severity: Severity) -> bool {
        self.0.contains(&severity)
    }

    /// Add a severity
    pub fn insert(&mut self, severity: Severity) -> bool {
        self.0.insert(severity)
    }

    /// Severities in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Severity> + '_ {
        self.0.iter().copied()
    }

    /// Number of severities
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Severity> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Severity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Severity; N]> for Capabilities {
    fn from(value: [Severity; N]) -> Self {
        value.into_iter().collect()
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Severity::as_str).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// A support role on the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    id: HandlerId,
    name: String,
    capabilities: Capabilities,
}

impl Handler {
    pub(crate) fn new(name: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            id: HandlerId::new(),
            name: name.into(),
            capabilities,
        }
    }

    /// Handler id
    #[inline]
    #[must_use]
    pub fn id(&self) -> HandlerId {
        self.id
    }

    /// Human-readable name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Severities this handler resolves
    #[inline]
    #[must_use]
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Whether this handler resolves `severity` itself
    #[inline]
    #[must_use]
    pub fn can_resolve(&self, severity: Severity) -> bool {
        self.capabilities.contains(severity)
    }
}
