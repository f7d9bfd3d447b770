//! Error types for escalation chains
//!
//! An unresolved request is a normal outcome and never an error. Errors
//! here describe broken chain wiring or unreadable configuration.

use crate::handler::HandlerId;
use std::path::PathBuf;

/// Errors raised while wiring or dispatching on a chain
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// Id does not belong to this chain
    #[error("handler not found: {0}")]
    HandlerNotFound(HandlerId),

    /// Linking `from -> to` would close a cycle (a self link included)
    #[error("linking {from} -> {to} would create a cycle")]
    WouldCreateCycle {
        /// Handler whose successor was being set
        from: HandlerId,
        /// Proposed successor
        to: HandlerId,
    },
}

impl ChainError {
    /// Whether the error stems from how the chain was wired
    #[inline]
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::WouldCreateCycle { .. })
    }
}

/// Errors while loading or building a chain from configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File extension maps to no known format
    #[error("unsupported configuration format: '{0}'")]
    UnsupportedFormat(String),

    /// Malformed TOML
    #[error("invalid toml: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed YAML
    #[error("invalid yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// No handlers listed
    #[error("chain has no handlers")]
    EmptyChain,

    /// Two handlers share a name
    #[error("duplicate handler name: '{0}'")]
    DuplicateHandler(String),

    /// A name refers to no listed handler
    #[error("unknown handler: '{0}'")]
    UnknownHandler(String),

    /// Wiring rejected by the chain
    #[error("chain wiring rejected: {0}")]
    Chain(#[from] ChainError),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_is_configuration_error() {
        let id = HandlerId::new();
        let err = ChainError::WouldCreateCycle { from: id, to: id };
        assert!(err.is_configuration_error());
        assert!(!ChainError::HandlerNotFound(id).is_configuration_error());
    }

    #[test]
    fn config_error_wraps_chain_error() {
        let id = HandlerId::new();
        let err: ConfigError = ChainError::HandlerNotFound(id).into();
        assert!(matches!(err, ConfigError::Chain(ChainError::HandlerNotFound(_))));
        assert!(err.to_string().starts_with("chain wiring rejected"));
    }
}
