/// Convenience result type used across the sequence crate.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Error taxonomy for sequence validation and definition loading.
///
/// Building and sampling a [`crate::Sequence`] never fails; errors only surface when checking
/// invariants explicitly or when turning external data into a sequence.
#[derive(thiserror::Error, Debug)]
pub enum SequenceError {
    /// A sequence or phrase violates a structural invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// A phrase was configured with unusable parameters.
    #[error("phrase error: {0}")]
    Phrase(String),

    /// A serialized sequence definition could not be read or parsed.
    #[error("definition error: {0}")]
    Definition(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SequenceError {
    /// Build a [`SequenceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SequenceError::Phrase`] value.
    pub fn phrase(msg: impl Into<String>) -> Self {
        Self::Phrase(msg.into())
    }

    /// Build a [`SequenceError::Definition`] value.
    pub fn definition(msg: impl Into<String>) -> Self {
        Self::Definition(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
