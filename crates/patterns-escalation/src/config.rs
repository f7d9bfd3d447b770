//! Declarative chain configuration
//!
//! A chain can be described in TOML or YAML and built into an
//! [`EscalationChain`]. Links go through [`EscalationChain::set_successor`],
//! so a configuration that loops back on itself is rejected while building.
//!
//! ```toml
//! entry = "front-desk"
//!
//! [[handlers]]
//! name = "front-desk"
//! resolves = ["no_problem", "simple"]
//! escalates_to = "lead"
//!
//! [[handlers]]
//! name = "lead"
//! resolves = ["troublesome"]
//! ```

use crate::chain::EscalationChain;
use crate::error::ConfigError;
use crate::handler::{Capabilities, Handler, HandlerId};
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// One handler entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfig {
    /// Unique name within the chain
    pub name: String,
    /// Severities the handler resolves
    #[serde(default)]
    pub resolves: Vec<Severity>,
    /// Name of the handler to escalate to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalates_to: Option<String>,
}

impl HandlerConfig {
    /// Handler that resolves `resolves` and has no successor
    pub fn new(name: impl Into<String>, resolves: impl IntoIterator<Item = Severity>) -> Self {
        Self {
            name: name.into(),
            resolves: resolves.into_iter().collect(),
            escalates_to: None,
        }
    }

    /// Set the successor by name
    #[must_use]
    pub fn escalates_to(mut self, name: impl Into<String>) -> Self {
        self.escalates_to = Some(name.into());
        self
    }
}

/// Whole-chain description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfig {
    /// Handler requests are submitted to; defaults to the first listed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    /// Handlers in listing order
    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,
}

/// Supported configuration syntaxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from a file extension
    ///
    /// # Errors
    /// [`ConfigError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// A chain built from configuration, with its entry handler
#[derive(Debug, Clone)]
pub struct BuiltChain {
    /// The wired chain
    pub chain: EscalationChain,
    /// Where requests should be submitted
    pub entry: HandlerId,
}

impl ChainConfig {
    /// Parse from TOML text
    ///
    /// # Errors
    /// [`ConfigError::Toml`] on malformed input.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse from YAML text
    ///
    /// # Errors
    /// [`ConfigError::Yaml`] on malformed input.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse text in the given format
    ///
    /// # Errors
    /// Propagates the parser error for `format`.
    pub fn parse(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => Self::from_toml_str(text),
            ConfigFormat::Yaml => Self::from_yaml_str(text),
        }
    }

    /// Read and parse a file, choosing the format by extension
    ///
    /// # Errors
    /// IO, format or parse errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        tracing::debug!(path = %path.display(), ?format, "loading chain configuration");
        Self::parse(&text, format)
    }

    /// Build the chain described by this configuration
    ///
    /// # Errors
    /// - [`ConfigError::EmptyChain`] if no handlers are listed
    /// - [`ConfigError::DuplicateHandler`] if a name repeats
    /// - [`ConfigError::UnknownHandler`] if an escalation target or the entry is not listed
    /// - [`ConfigError::Chain`] if the links would form a cycle
    pub fn build(&self) -> Result<BuiltChain, ConfigError> {
        let Some(first) = self.handlers.first() else {
            return Err(ConfigError::EmptyChain);
        };

        let mut chain = EscalationChain::new();
        let mut ids: HashMap<&str, HandlerId> = HashMap::with_capacity(self.handlers.len());

        for handler in &self.handlers {
            if ids.contains_key(handler.name.as_str()) {
                return Err(ConfigError::DuplicateHandler(handler.name.clone()));
            }
            let capabilities: Capabilities = handler.resolves.iter().copied().collect();
            let id = chain.add_handler(handler.name.clone(), capabilities);
            ids.insert(handler.name.as_str(), id);
        }

        let lookup = |name: &str| {
            ids.get(name)
                .copied()
                .ok_or_else(|| ConfigError::UnknownHandler(name.to_string()))
        };

        for handler in &self.handlers {
            if let Some(target) = &handler.escalates_to {
                chain.set_successor(lookup(handler.name.as_str())?, lookup(target.as_str())?)?;
            }
        }

        let entry = lookup(self.entry.as_deref().unwrap_or(first.name.as_str()))?;
        tracing::info!(
            handlers = chain.len(),
            entry = %chain.handler(entry).map_or("", Handler::name),
            "chain built from configuration"
        );

        Ok(BuiltChain { chain, entry })
    }
}

impl Default for ChainConfig {
    /// The four-level support team
    fn default() -> Self {
        Self {
            entry: Some("front-desk".into()),
            handlers: vec![
                HandlerConfig::new("front-desk", [Severity::NoProblem, Severity::Simple]).escalates_to("lead"),
                HandlerConfig::new("lead", [Severity::Troublesome]).escalates_to("engineer"),
                HandlerConfig::new("engineer", [Severity::Critical]).escalates_to("manager"),
                HandlerConfig::new("manager", [Severity::Urgent]),
            ],
        }
    }
}
