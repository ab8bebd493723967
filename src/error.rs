//! Error types.
//!
//! Markup is never an error: malformed input degrades to literal text. The
//! only failures are missing inputs at the call boundary.

/// Errors reported by the conversion entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A top-level call received no input.
    #[error("null input")]
    NullInput,

    /// A batch entry was missing.
    #[error("null input at index {index}")]
    NullInputAt { index: usize },

    /// A batch call received no array, or a non-positive length.
    #[error("invalid input array")]
    InvalidInputArray,

    /// A result could not be serialized.
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result alias for marklite operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Error::NullInput.to_string(), "null input");
        assert_eq!(
            Error::NullInputAt { index: 3 }.to_string(),
            "null input at index 3"
        );
        assert_eq!(Error::InvalidInputArray.to_string(), "invalid input array");
    }
}
