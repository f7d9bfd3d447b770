//! Patterns Escalation - Chain of Responsibility
//!
//! A request travels along an ordered chain of handlers until one of them is
//! capable of resolving it, or the chain runs out.
//!
//! # Core Concepts
//!
//! - [`Severity`]: ordered problem severity carried by every request
//! - [`Handler`]: a named support role with a set of [`Capabilities`]
//! - [`EscalationChain`]: owns the handlers and their successor links
//! - [`Request`]: resolved at most once, by the first capable handler
//! - [`ChainConfig`]: declarative chain description loaded from TOML or YAML
//!
//! Successor links are validated when they are set: a link that would close
//! a cycle is rejected, so dispatch always terminates.
//!
//! # Example
//!
//! ```rust
//! use patterns_escalation::{Request, Severity, SupportTeam};
//!
//! let team = SupportTeam::assemble();
//! let mut request = Request::new(Severity::Critical);
//! let trace = team.chain.submit(team.front_desk, &mut request).unwrap();
//!
//! assert_eq!(request.resolved_by(), Some(team.engineer));
//! assert_eq!(trace.visited().len(), 3);
//! ```

#![warn(unreachable_pub)]

mod chain;
mod config;
mod error;
mod handler;
mod request;
mod severity;
mod team;

// Re-exports
pub use chain::{Escalation, EscalationChain};
pub use config::{BuiltChain, ChainConfig, ConfigFormat, HandlerConfig};
pub use error::{ChainError, ConfigError};
pub use handler::{Capabilities, Handler, HandlerId};
pub use request::{Request, RequestId};
pub use severity::{ParseSeverityError, Severity};
pub use team::SupportTeam;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
