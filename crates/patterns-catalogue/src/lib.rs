//! Patterns Catalogue
//!
//! Each pattern ships as a [`Demonstration`]: a small client that wires the
//! pattern's participants together, drives them, and checks the outcome.
//! The [`Catalogue`] collects demonstrations by name.
//!
//! # Example
//!
//! ```rust
//! use patterns_catalogue::Catalogue;
//!
//! let catalogue = Catalogue::with_defaults();
//! let report = catalogue.run("state").unwrap();
//! assert!(report.passed());
//! ```

#![warn(unreachable_pub)]

pub mod demos;

mod catalogue;
mod demonstration;
mod error;
mod report;

// Re-exports
pub use catalogue::Catalogue;
pub use demonstration::{Category, Demonstration};
pub use error::DemoError;
pub use report::{Check, DemoReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
