//! # scte35-cue
//!
//! Encoder for SCTE-35 splice info sections and a generator for the
//! operational cues built on top of it.
//!
//! The encoder serializes a [`SpliceInfoSection`] carrying a `splice_insert`
//! or `time_signal` command and an optional descriptor loop. Length fields
//! are back-patched once their regions are written and a CRC-32 trailer is
//! appended. The result comes back as raw bytes plus Base64 and uppercase hex.
//!
//! The [`CueGenerator`] maps CUE-OUT, CUE-IN and CRASH-OUT onto splice
//! insert sections and hands out splice event ids from an atomic sequence.
//!
//! ## Generating a cue
//!
//! ```rust
//! use scte35_cue::{CueCommand, CueGenerator};
//!
//! let generator = CueGenerator::default();
//! let message = generator
//!     .generate(&CueCommand::cue_out(Some(30.0)).with_event_id(100_023))
//!     .unwrap();
//!
//! assert_eq!(message.event_id, 100_023);
//! assert!(message.hex.starts_with("FC30"));
//! ```
//!
//! ## Encoding a section
//!
//! ```rust
//! use scte35_cue::{SpliceInfoSectionBuilder, SpliceInsertBuilder, encode_section};
//! use std::time::Duration;
//!
//! let section = SpliceInfoSectionBuilder::new()
//!     .splice_insert(
//!         SpliceInsertBuilder::new(42)
//!             .at_pts(Duration::from_secs(10))
//!             .duration(Duration::from_secs(30))
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let encoded = encode_section(&section).unwrap();
//! assert!(scte35_cue::crc::validate_message_crc(&encoded.bytes).unwrap());
//! ```
//!
//! ## Features
//!
//! - `serde` (default): serialization of sections, commands, messages and
//!   generator configuration
//! - `cli`: the `scte35-cue` command line tool

pub mod builders;
pub mod crc;
pub mod cue;
pub mod descriptors;
pub mod encoding;
pub mod time;
pub mod types;

#[cfg(feature = "serde")]
mod serde;

pub use builders::{
    BuilderError, BuilderResult, SpliceInfoSectionBuilder, SpliceInsertBuilder, TimeSignalBuilder,
};
pub use cue::{
    CueCommand, CueError, CueGenerator, CueResult, CueType, EventIdSequence, GeneratorConfig,
    Scte35Message,
};
pub use descriptors::SpliceDescriptor;
pub use encoding::{
    EncodeOptions, EncodedSection, EncodingError, EncodingResult, OverflowBitMode, encode_section,
    encode_section_with,
};
pub use time::{BreakDuration, SpliceTime};
pub use types::{SpliceCommand, SpliceInfoSection, SpliceInsert, TimeSignal};

/// Generates a cue with `generator`; shorthand for [`CueGenerator::generate`].
pub fn generate_cue(generator: &CueGenerator, command: &CueCommand) -> CueResult<Scte35Message> {
    generator.generate(command)
}
