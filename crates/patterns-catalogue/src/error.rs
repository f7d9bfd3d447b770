use patterns_escalation::ChainError;

/// Errors from running demonstrations
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// No demonstration registered under this name
    #[error("unknown demonstration: '{0}'")]
    UnknownDemonstration(String),

    /// Escalation chain could not be wired or dispatched
    #[error("escalation chain error: {0}")]
    Chain(#[from] ChainError),
}

impl DemoError {
    /// Whether the caller asked for something that does not exist
    #[inline]
    #[must_use]
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, Self::UnknownDemonstration(_))
    }
}
