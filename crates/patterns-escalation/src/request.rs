//! Requests travelling along a chain

use crate::handler::HandlerId;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Correlation id for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Generate a fresh id
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A support problem submitted to an escalation chain.
///
/// Starts unresolved. The resolving handler is recorded exactly once and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    id: RequestId,
    severity: Severity,
    resolved_by: Option<HandlerId>,
}

impl Request {
    /// Create an unresolved request
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            id: RequestId::new(),
            severity,
            resolved_by: None,
        }
    }

    /// Request id
    #[inline]
    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Severity of the problem
    #[inline]
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether some handler has resolved the request
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved_by.is_some()
    }

    /// The handler that resolved the request, if any
    #[inline]
    #[must_use]
    pub fn resolved_by(&self) -> Option<HandlerId> {
        self.resolved_by
    }

    /// Record the resolving handler. Returns `false` if already resolved.
    pub(crate) fn resolve_by(&mut self, handler: HandlerId) -> bool {
        if self.resolved_by.is_some() {
            return false;
        }
        self.resolved_by = Some(handler);
        true
    }
}
