/// Result alias used across fallible Kinema edges (loading, validation, name parsing).
pub type KinemaResult<T> = Result<T, KinemaError>;

/// Error type for the fallible edges of the crate.
///
/// Evaluation and interpolation never produce this type; they degrade to fallbacks instead.
#[derive(thiserror::Error, Debug)]
pub enum KinemaError {
    /// Document or argument failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A textual name (phase, preset kind) could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error (typically IO at the edges).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinemaError {
    /// Build a [`KinemaError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KinemaError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`KinemaError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
