/// Convenience result type used across scrollytell.
pub type NarrativeResult<T> = Result<T, NarrativeError>;

/// Top-level error taxonomy.
///
/// The scroll calculation itself is total and never produces one of these; they come from
/// loading and validating configuration and from the outer surfaces (CLI, adapters).
#[derive(thiserror::Error, Debug)]
pub enum NarrativeError {
    /// Invalid user-provided values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NarrativeError {
    /// Build a [`NarrativeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`NarrativeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
