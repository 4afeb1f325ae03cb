//! Builder pattern API for creating SCTE-35 messages from scratch.
//!
//! The builders fill in the conventional header values and keep the command
//! flags consistent with the sub-structures they guard, so a built section
//! always encodes.

/// Error types for the builder API.
pub mod error;
/// Builder for creating SCTE-35 splice information sections.
pub mod splice_info_section;
/// Builders for SCTE-35 splice commands.
pub mod commands;


pub use commands::{SpliceInsertBuilder, TimeSignalBuilder};
pub use error::{BuilderError, BuilderResult};
pub use splice_info_section::SpliceInfoSectionBuilder;
