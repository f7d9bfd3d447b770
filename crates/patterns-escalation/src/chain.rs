//! Escalation chain
//!
//! The chain owns every handler. Successor links are plain [`HandlerId`]s, so
//! a handler never owns the next one. Links are checked when set: a link that
//! would make a request come back to a handler it already passed is refused,
//! which keeps every walk along the chain finite.

use crate::error::ChainError;
use crate::handler::{Capabilities, Handler, HandlerId};
use crate::request::Request;
use std::collections::HashMap;

/// Outcome of submitting a request: who looked at it, and who resolved it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Escalation {
    visited: Vec<HandlerId>,
    resolved_by: Option<HandlerId>,
}

impl Escalation {
    /// Handlers that evaluated the request, in chain order
    #[inline]
    #[must_use]
    pub fn visited(&self) -> &[HandlerId] {
        &self.visited
    }

    /// The resolving handler, if any
    #[inline]
    #[must_use]
    pub fn resolved_by(&self) -> Option<HandlerId> {
        self.resolved_by
    }

    /// Whether the request ended up resolved
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved_by.is_some()
    }

    /// Number of times the request was passed on
    #[inline]
    #[must_use]
    pub fn escalations(&self) -> usize {
        self.visited.len().saturating_sub(1)
    }
}

/// Ordered set of handlers with acyclic successor links
#[derive(Debug, Clone, Default)]
pub struct EscalationChain {
    handlers: HashMap<HandlerId, Handler>,
    order: Vec<HandlerId>,
    successors: HashMap<HandlerId, HandlerId>,
}

impl EscalationChain {
    /// Create an empty chain
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler with no successor
    ///
    /// Returns the handler id for use in [`set_successor`](Self::set_successor)
    /// and [`submit`](Self::submit).
    pub fn add_handler(&mut self, name: impl Into<String>, capabilities: impl Into<Capabilities>) -> HandlerId {
        let handler = Handler::new(name, capabilities.into());
        let id = handler.id();
        tracing::debug!(handler = %handler.name(), capabilities = %handler.capabilities(), "handler added");
        self.handlers.insert(id, handler);
        self.order.push(id);
        id
    }

    /// Set the handler `handler` escalates to, replacing any previous link.
    ///
    /// # Errors
    /// - [`ChainError::HandlerNotFound`] if either id is not part of this chain
    /// - [`ChainError::WouldCreateCycle`] if `next` already escalates, directly
    ///   or transitively, back to `handler`. The chain is left unchanged.
    pub fn set_successor(&mut self, handler: HandlerId, next: HandlerId) -> Result<(), ChainError> {
        self.require(handler)?;
        self.require(next)?;

        if self.reaches(next, handler) {
            tracing::warn!(
                from = %self.name_of(handler),
                to = %self.name_of(next),
                "rejected escalation link: would create a cycle"
            );
            return Err(ChainError::WouldCreateCycle {
                from: handler,
                to: next,
            });
        }

        let previous = self.successors.insert(handler, next);
        tracing::debug!(
            from = %self.name_of(handler),
            to = %self.name_of(next),
            replaced = previous.is_some(),
            "escalation link set"
        );
        Ok(())
    }

    /// Remove the successor link of `handler`, returning the old successor
    ///
    /// # Errors
    /// [`ChainError::HandlerNotFound`] if `handler` is not part of this chain.
    pub fn clear_successor(&mut self, handler: HandlerId) -> Result<Option<HandlerId>, ChainError> {
        self.require(handler)?;
        Ok(self.successors.remove(&handler))
    }

    /// Submit `request` to `entry` and let it escalate until resolved
    ///
    /// The first handler, in chain order, whose capabilities contain the
    /// request's severity resolves it. Running off the end of the chain leaves
    /// the request unresolved, which is a normal outcome. A request that is
    /// already resolved is not dispatched again.
    ///
    /// # Errors
    /// [`ChainError::HandlerNotFound`] if `entry` is not part of this chain.
    pub fn submit(&self, entry: HandlerId, request: &mut Request) -> Result<Escalation, ChainError> {
        self.require(entry)?;

        if request.is_resolved() {
            tracing::debug!(request = %request.id(), "request already resolved, not dispatched");
            return Ok(Escalation {
                visited: Vec::new(),
                resolved_by: request.resolved_by(),
            });
        }

        let severity = request.severity();
        let mut visited = Vec::new();
        let mut current = Some(entry);

        while let Some(id) = current {
            let handler = self.handlers.get(&id).ok_or(ChainError::HandlerNotFound(id))?;
            visited.push(id);

            if handler.can_resolve(severity) {
                request.resolve_by(id);
                tracing::info!(
                    request = %request.id(),
                    %severity,
                    handler = %handler.name(),
                    escalations = visited.len() - 1,
                    "request resolved"
                );
                return Ok(Escalation {
                    visited,
                    resolved_by: Some(id),
                });
            }

            current = self.successors.get(&id).copied();
            if let Some(next) = current {
                tracing::debug!(
                    request = %request.id(),
                    %severity,
                    from = %handler.name(),
                    to = %self.name_of(next),
                    "escalating"
                );
            }
        }

        tracing::warn!(
            request = %request.id(),
            %severity,
            visited = visited.len(),
            "request left unresolved: end of chain"
        );
        Ok(Escalation {
            visited,
            resolved_by: None,
        })
    }

    /// Handlers a request entering at `from` would be offered to, in order
    ///
    /// # Errors
    /// [`ChainError::HandlerNotFound`] if `from` is not part of this chain.
    pub fn walk(&self, from: HandlerId) -> Result<Vec<HandlerId>, ChainError> {
        self.require(from)?;
        let mut path = vec![from];
        let mut current = from;
        while let Some(&next) = self.successors.get(&current) {
            path.push(next);
            current = next;
        }
        Ok(path)
    }

    /// Successor of `handler`, if linked
    #[inline]
    #[must_use]
    pub fn successor(&self, handler: HandlerId) -> Option<HandlerId> {
        self.successors.get(&handler).copied()
    }

    /// Look up a handler by id
    #[inline]
    #[must_use]
    pub fn handler(&self, id: HandlerId) -> Option<&Handler> {
        self.handlers.get(&id)
    }

    /// First handler, in insertion order, with the given name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Handler> {
        self.handlers().find(|handler| handler.name() == name)
    }

    /// All handlers in insertion order
    pub fn handlers(&self) -> impl Iterator<Item = &Handler> + '_ {
        self.order.iter().filter_map(|id| self.handlers.get(id))
    }

    /// Number of handlers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the chain has no handlers
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Link handlers that were just added in a straight line, where no cycle
    /// is possible.
    pub(crate) fn link_fresh(&mut self, handler: HandlerId, next: HandlerId) {
        debug_assert!(!self.reaches(next, handler), "link_fresh would close a cycle");
        self.successors.insert(handler, next);
    }

    fn require(&self, id: HandlerId) -> Result<(), ChainError> {
        if self.handlers.contains_key(&id) {
            Ok(())
        } else {
            Err(ChainError::HandlerNotFound(id))
        }
    }

    /// Whether following links from `start` arrives at `target`.
    /// Terminates because existing links are acyclic.
    fn reaches(&self, start: HandlerId, target: HandlerId) -> bool {
        let mut current = Some(start);
        while let Some(id) = current {
            if id == target {
                return true;
            }
            current = self.successors.get(&id).copied();
        }
        false
    }

    fn name_of(&self, id: HandlerId) -> &str {
        self.handlers.get(&id).map_or("<unknown>", Handler::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    fn three_step() -> (EscalationChain, HandlerId, HandlerId, HandlerId) {
        let mut chain = EscalationChain::new();
        let a = chain.add_handler("a", [Severity::Simple]);
        let b = chain.add_handler("b", [Severity::Troublesome]);
        let c = chain.add_handler("c", [Severity::Critical]);
        chain.set_successor(a, b).unwrap();
        chain.set_successor(b, c).unwrap();
        (chain, a, b, c)
    }

    #[test]
    fn resolves_at_entry() {
        let (chain, a, _, _) = three_step();
        let mut request = Request::new(Severity::Simple);
        let trace = chain.submit(a, &mut request).unwrap();

        assert_eq!(request.resolved_by(), Some(a));
        assert_eq!(trace.visited(), &[a]);
        assert_eq!(trace.escalations(), 0);
    }

    #[test]
    fn escalates_to_first_capable() {
        let (chain, a, b, c) = three_step();
        let mut request = Request::new(Severity::Critical);
        let trace = chain.submit(a, &mut request).unwrap();

        assert_eq!(request.resolved_by(), Some(c));
        assert_eq!(trace.visited(), &[a, b, c]);
        assert_eq!(trace.escalations(), 2);
    }

    #[test]
    fn unresolved_at_end_of_chain() {
        let (chain, a, b, c) = three_step();
        let mut request = Request::new(Severity::Urgent);
        let trace = chain.submit(a, &mut request).unwrap();

        assert!(!request.is_resolved());
        assert!(!trace.is_resolved());
        assert_eq!(trace.visited(), &[a, b, c]);
    }

    #[test]
    fn submit_mid_chain_skips_earlier_handlers() {
        let (chain, _, b, _) = three_step();
        let mut request = Request::new(Severity::Simple);
        let trace = chain.submit(b, &mut request).unwrap();

        assert!(!request.is_resolved());
        assert_eq!(trace.visited().len(), 2);
    }

    #[test]
    fn resolved_request_is_not_dispatched_again() {
        let (chain, a, b, _) = three_step();
        let mut request = Request::new(Severity::Troublesome);
        chain.submit(a, &mut request).unwrap();
        assert_eq!(request.resolved_by(), Some(b));

        let trace = chain.submit(a, &mut request).unwrap();
        assert!(trace.visited().is_empty());
        assert_eq!(trace.resolved_by(), Some(b));
        assert_eq!(request.resolved_by(), Some(b));
    }

    #[test]
    fn rejects_self_link() {
        let (mut chain, a, _, _) = three_step();
        let err = chain.set_successor(a, a).unwrap_err();
        assert_eq!(err, ChainError::WouldCreateCycle { from: a, to: a });
    }

    #[test]
    fn rejects_transitive_cycle_and_keeps_links() {
        let (mut chain, a, b, c) = three_step();
        let err = chain.set_successor(c, a).unwrap_err();
        assert!(err.is_configuration_error());
        assert_eq!(chain.successor(c), None);
        assert_eq!(chain.walk(a).unwrap(), vec![a, b, c]);
    }

    #[test]
    fn relinking_replaces_successor() {
        let (mut chain, a, b, c) = three_step();
        chain.set_successor(a, c).unwrap();
        assert_eq!(chain.successor(a), Some(c));
        assert_eq!(chain.walk(a).unwrap(), vec![a, c]);
        assert_eq!(chain.walk(b).unwrap(), vec![b, c]);
    }

    #[test]
    fn relink_that_breaks_old_cycle_path_is_allowed() {
        // b -> c exists; pointing c at b would cycle, but after b is relinked
        // away from c the same link becomes legal
        let (mut chain, a, b, c) = three_step();
        assert!(chain.set_successor(c, b).is_err());
        assert_eq!(chain.clear_successor(b).unwrap(), Some(c));
        chain.set_successor(c, b).unwrap();
        assert_eq!(chain.walk(a).unwrap(), vec![a, b]);
        assert_eq!(chain.walk(c).unwrap(), vec![c, b]);
    }

    #[test]
    fn unknown_handler_is_reported() {
        let (mut chain, a, _, _) = three_step();
        let stranger = HandlerId::new();

        assert_eq!(chain.set_successor(a, stranger), Err(ChainError::HandlerNotFound(stranger)));
        assert_eq!(chain.set_successor(stranger, a), Err(ChainError::HandlerNotFound(stranger)));

        let mut request = Request::new(Severity::Simple);
        assert_eq!(
            chain.submit(stranger, &mut request),
            Err(ChainError::HandlerNotFound(stranger))
        );
        assert!(!request.is_resolved());
    }

    #[test]
    fn lookup_by_name_and_order() {
        let (chain, a, b, c) = three_step();
        assert_eq!(chain.find("b").map(Handler::id), Some(b));
        assert!(chain.find("z").is_none());

        let ids: Vec<HandlerId> = chain.handlers().map(Handler::id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(chain.len(), 3);
        assert!(!chain.is_empty());
    }
}
