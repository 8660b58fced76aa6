use thiserror::Error;

/// Errors that can occur during Shirushi core operations.
#[derive(Debug, Error)]
pub enum ShirushiError {
    /// The training corpus is empty or contains no tagged tokens, so no
    /// probability tables can be estimated.
    #[error("training corpus is empty or contains no tagged tokens")]
    InsufficientData,

    /// Decoding was requested for an empty observation sequence.
    #[error("cannot decode an empty observation sequence")]
    EmptySequence,

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

/// Result type alias for Shirushi operations.
pub type Result<T> = std::result::Result<T, ShirushiError>;
