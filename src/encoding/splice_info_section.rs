//! Encoding implementation for SpliceInfoSection.

use crate::crc::calculate_crc;
use crate::encoding::{BitWriter, EncodeOptions, Encodable, EncodingResult};
use crate::types::SpliceInfoSection;
use data_encoding::{BASE64, HEXUPPER};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Bytes from `table_id` up to the first byte of the splice command.
pub const COMMAND_OFFSET: usize = 18;

/// Size of the trailing CRC-32.
pub const CRC_LENGTH: usize = 4;

/// Leading bytes not counted by `section_length`.
const SECTION_LENGTH_EXCLUDED: usize = 3;

/// An encoded section together with its textual encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EncodedSection {
    /// Raw section bytes, CRC included
    pub bytes: Vec<u8>,
    /// Standard padded Base64 of `bytes`
    pub base64: String,
    /// Uppercase hex of `bytes`, no separators
    pub hex: String,
}

impl From<Vec<u8>> for EncodedSection {
    fn from(bytes: Vec<u8>) -> Self {
        let base64 = BASE64.encode(&bytes);
        let hex = HEXUPPER.encode(&bytes);
        Self { bytes, base64, hex }
    }
}

/// Encodes a section with default options.
///
/// # Examples
///
/// ```rust
/// use scte35_cue::{SpliceInfoSectionBuilder, TimeSignal, encode_section};
/// use scte35_cue::time::SpliceTime;
///
/// let section = SpliceInfoSectionBuilder::new()
///     .time_signal(TimeSignal { splice_time: SpliceTime::immediate() })
///     .build()
///     .unwrap();
/// let encoded = encode_section(&section).unwrap();
/// assert_eq!(encoded.bytes.len(), 23);
/// assert_eq!(encoded.hex.len(), 46);
/// ```
pub fn encode_section(section: &SpliceInfoSection) -> EncodingResult<EncodedSection> {
    encode_section_with(section, EncodeOptions::default())
}

/// Encodes a section with explicit options.
pub fn encode_section_with(
    section: &SpliceInfoSection,
    options: EncodeOptions,
) -> EncodingResult<EncodedSection> {
    let bytes = section.encode_to_vec_with(options)?;
    debug!(
        command_type = section.splice_command_type(),
        descriptors = section.splice_descriptors.len(),
        len = bytes.len(),
        "encoded splice_info_section"
    );
    Ok(EncodedSection::from(bytes))
}

impl Encodable for SpliceInfoSection {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        let start = writer.len();

        writer.write_u8(self.table_id);

        // section_syntax_indicator, private_indicator, 2 reserved '1' bits
        writer.write_bit(self.section_syntax_indicator);
        writer.write_bit(self.private_indicator);
        writer.write_bits(0b11, 2);
        writer.write_bits(0, 4);

        let section_length = writer.reserve_u16(0xF000);

        writer.write_u8(self.protocol_version);

        let (pts_overflow, pts_low) = writer.split_33("pts_adjustment", self.pts_adjustment)?;
        writer.write_bit(self.encrypted_packet);
        writer.write_field("encryption_algorithm", self.encryption_algorithm as u64, 6)?;
        writer.write_bit(pts_overflow);
        writer.write_u32(pts_low);

        writer.write_u8(self.cw_index);

        // tier (12 bits) + 4 reserved '1' bits
        writer.write_field("tier", self.tier as u64, 12)?;
        writer.write_bits(0xF, 4);

        let command_length = writer.reserve_u16(0xF000);
        writer.write_u8(self.splice_command_type());
        let descriptor_loop_length = writer.reserve_u16(0);

        let command_start = writer.len();
        self.splice_command.encode(writer)?;
        let command_size = writer.len() - command_start;

        let loop_start = writer.len();
        for descriptor in &self.splice_descriptors {
            descriptor.encode(writer)?;
        }
        let loop_size = writer.len() - loop_start;

        let section_size = writer.len() - start - SECTION_LENGTH_EXCLUDED + CRC_LENGTH;
        writer.patch_u12("section_length", section_length, section_size)?;
        writer.patch_u12("splice_command_length", command_length, command_size)?;
        writer.patch_u16("descriptor_loop_length", descriptor_loop_length, loop_size)?;

        let crc = calculate_crc(&writer.as_bytes()[start..]);
        writer.write_u32(crc);

        Ok(())
    }

    fn encoded_size(&self) -> usize {
        COMMAND_OFFSET
            + self.splice_command.encoded_size()
            + self
                .splice_descriptors
                .iter()
                .map(|d| d.encoded_size())
                .sum::<usize>()
            + CRC_LENGTH
    }
}
