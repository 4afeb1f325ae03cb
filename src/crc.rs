//! CRC-32 of splice info sections.
//!
//! MSB-first CRC with polynomial 0x04C11DB7, initial value 0xFFFFFFFF and a
//! final XOR with 0xFFFFFFFF (the CRC-32/BZIP2 parameter set), computed
//! bit-at-a-time without a lookup table.

use std::io::{self, ErrorKind};

use crc::{CRC_32_BZIP2, Crc, NoTable};

/// CRC-32 instance used for the section trailer.
pub const SECTION_CRC: Crc<u32, NoTable> = Crc::<u32, NoTable>::new(&CRC_32_BZIP2);

/// Calculates the CRC-32 of `data`.
///
/// # Examples
///
/// ```rust
/// use scte35_cue::crc::calculate_crc;
///
/// assert_eq!(calculate_crc(b"123456789"), 0xFC89_1918);
/// ```
pub fn calculate_crc(data: &[u8]) -> u32 {
    SECTION_CRC.checksum(data)
}

/// Checks `data` against an expected CRC-32.
pub fn validate_crc(data: &[u8], expected_crc: u32) -> bool {
    calculate_crc(data) == expected_crc
}

/// Validates the CRC-32 trailer of a complete encoded section.
///
/// The last four bytes are read as a big-endian CRC and compared with the
/// CRC of everything before them.
pub fn validate_message_crc(buffer: &[u8]) -> Result<bool, io::Error> {
    let Some(split) = buffer.len().checked_sub(4) else {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            "Buffer too short to contain CRC-32 field",
        ));
    };

    let (data, trailer) = buffer.split_at(split);
    let stored_crc = u32::from_be_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);
    Ok(validate_crc(data, stored_crc))
}
