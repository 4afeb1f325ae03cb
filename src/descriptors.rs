//! Splice descriptors appended after the splice command.

use crate::encoding::{EncodingError, EncodingResult};
use data_encoding::HEXLOWER_PERMISSIVE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A tag-length-value descriptor carried in the descriptor loop.
///
/// The length byte is not stored; it is written from `data.len()` during
/// encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpliceDescriptor {
    /// `splice_descriptor_tag`
    pub tag: u8,
    /// Raw descriptor payload, serialized as a hex string
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::hex_bytes"))]
    pub data: Vec<u8>,
}

impl SpliceDescriptor {
    /// Creates a descriptor from raw bytes.
    pub fn new(tag: u8, data: impl Into<Vec<u8>>) -> Self {
        Self {
            tag,
            data: data.into(),
        }
    }

    /// Creates a descriptor from a hex string such as `"43554549"`.
    ///
    /// Either case is accepted. Odd-length strings and non-hex characters are
    /// rejected with [`EncodingError::MalformedDescriptorData`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scte35_cue::SpliceDescriptor;
    ///
    /// let descriptor = SpliceDescriptor::from_hex(0x00, "43554549").unwrap();
    /// assert_eq!(descriptor.data, b"CUEI");
    /// assert!(SpliceDescriptor::from_hex(0x00, "435").is_err());
    /// ```
    pub fn from_hex(tag: u8, hex: &str) -> EncodingResult<Self> {
        Ok(Self::new(tag, decode_hex(hex)?))
    }

    /// Number of bytes the descriptor occupies in the loop.
    pub fn encoded_len(&self) -> usize {
        2 + self.data.len()
    }
}

pub(crate) fn decode_hex(hex: &str) -> EncodingResult<Vec<u8>> {
    HEXLOWER_PERMISSIVE
        .decode(hex.trim().as_bytes())
        .map_err(|e| EncodingError::MalformedDescriptorData {
            input: hex.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_upper_and_lower() {
        let upper = SpliceDescriptor::from_hex(2, "DEADBEEF").unwrap();
        let lower = SpliceDescriptor::from_hex(2, "deadbeef").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.data, vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(upper.encoded_len(), 6);
    }

    #[test]
    fn test_from_hex_empty() {
        let descriptor = SpliceDescriptor::from_hex(0x01, "").unwrap();
        assert!(descriptor.data.is_empty());
        assert_eq!(descriptor.encoded_len(), 2);
    }

    #[test]
    fn test_from_hex_odd_length() {
        let err = SpliceDescriptor::from_hex(2, "ABC").unwrap_err();
        assert!(matches!(err, EncodingError::MalformedDescriptorData { .. }));
    }

    #[test]
    fn test_from_hex_invalid_characters() {
        let err = SpliceDescriptor::from_hex(2, "ZZ00").unwrap_err();
        match err {
            EncodingError::MalformedDescriptorData { input, .. } => assert_eq!(input, "ZZ00"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
