//! Binary encoding of SCTE-35 splice info sections.
//!
//! The section is assembled in a single buffer: the header is written with
//! placeholders for the section, command and descriptor loop lengths, the
//! command and descriptors are appended, the placeholders are patched with
//! the measured sizes and the CRC-32 is appended last.

/// Error types for encoding operations.
pub mod error;

/// Options for oversized fields and the 33rd PTS bit.
pub mod options;

/// Bit-level writer for encoding binary data.
pub mod writer;

/// Trait definitions for encodable types.
pub mod traits;

mod commands;
mod descriptors;
mod splice_info_section;
mod time;


pub use error::{EncodingError, EncodingResult};
pub use options::{EncodeOptions, OverflowBitMode};
pub use splice_info_section::{
    COMMAND_OFFSET, CRC_LENGTH, EncodedSection, encode_section, encode_section_with,
};
pub use traits::Encodable;
pub use writer::{BitWriter, Placeholder};
