//! Error types for cue generation.

use crate::builders::BuilderError;
use crate::encoding::EncodingError;
use thiserror::Error;

/// Result type for cue generation.
pub type CueResult<T> = Result<T, CueError>;

/// Errors raised while turning a cue command into a section.
#[derive(Error, Debug)]
pub enum CueError {
    /// The cue type string is not one of CUE-OUT, CUE-IN or CRASH-OUT.
    #[error("Unsupported cue command: {0:?}")]
    UnsupportedCommand(String),
    /// A duration in seconds was negative, NaN or infinite.
    #[error("Invalid duration for field '{field}': {value}")]
    InvalidDuration {
        /// Field carrying the duration.
        field: &'static str,
        /// The rejected value in seconds.
        value: f64,
    },
    /// The operator time lies before the Unix epoch.
    #[error("Operator time {0} is before the Unix epoch")]
    TimeBeforeEpoch(String),
    /// The section could not be built.
    #[error(transparent)]
    Builder(#[from] BuilderError),
    /// The section could not be encoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// The generator configuration could not be loaded.
    #[error("Could not load generator configuration: {0}")]
    Config(String),
}
