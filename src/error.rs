//! Error types for generation operations.

/// Error type for scalar and string generation.
///
/// All variants are local, recoverable failures: a call that returns an
/// error leaves the generator instance valid and reusable.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// Lower bound exceeds upper bound (scalar range or string length range)
    #[error("Invalid range: low ({low}) exceeds high ({high})")]
    InvalidRange {
        /// Display form of the offending lower bound
        low: String,
        /// Display form of the offending upper bound
        high: String,
    },

    /// Alphabet supplied for string generation contains no characters
    #[error("Invalid alphabet: no characters to sample from")]
    InvalidAlphabet,
}

impl GeneratorError {
    /// Build an `InvalidRange` from any displayable pair of bounds.
    pub(crate) fn invalid_range<T: std::fmt::Display>(low: T, high: T) -> Self {
        GeneratorError::InvalidRange {
            low: low.to_string(),
            high: high.to_string(),
        }
    }
}
