//! Error types for encoding operations.

use thiserror::Error;

/// Result type for encoding operations.
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Errors that can occur during encoding operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    /// A flag requires a sub-structure that was not supplied.
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Value exceeds the maximum allowed for its bit width.
    ///
    /// Only raised when [`EncodeOptions::strict`](super::EncodeOptions) is set;
    /// otherwise the value is masked to the width of its slot.
    #[error("Value too large for field {field}: {actual} > {max} (max)")]
    FieldOverflow {
        /// Name of the field.
        field: &'static str,
        /// Maximum allowed value.
        max: u64,
        /// Actual value provided.
        actual: u64,
    },

    /// Descriptor payload supplied as text was not valid hex.
    #[error("Malformed descriptor data {input:?}: {reason}")]
    MalformedDescriptorData {
        /// The offending input.
        input: String,
        /// Why decoding failed.
        reason: String,
    },
}
