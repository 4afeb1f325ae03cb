//! Error types for the builder API.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during message building.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// A required field is missing.
    #[error("Required field '{0}' is missing")]
    MissingRequiredField(&'static str),
    /// A duration value is too large to fit in the SCTE-35 format.
    #[error("Duration for field '{field}' is too large: {duration:?} exceeds 33-bit PTS limit")]
    DurationTooLarge {
        /// The name of the field that had a duration that was too large.
        field: &'static str,
        /// The duration that was too large.
        duration: Duration,
    },
    /// A tick count does not fit in 33 bits.
    #[error("Value for field '{field}' is too large: {ticks} ticks exceeds 33-bit PTS limit")]
    TicksTooLarge {
        /// The name of the field.
        field: &'static str,
        /// The offending tick count.
        ticks: u64,
    },
}

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;
