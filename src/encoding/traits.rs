//! Trait definitions for encodable types.

use super::error::EncodingResult;
use super::options::EncodeOptions;
use super::writer::BitWriter;

/// Trait for types that can be encoded to SCTE-35 binary format.
pub trait Encodable {
    /// Encode the structure to binary SCTE-35 format.
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()>;

    /// Calculate the encoded size in bytes.
    ///
    /// This should return the exact number of bytes that will be written
    /// when `encode` is called. This is used for pre-allocating buffers.
    fn encoded_size(&self) -> usize;

    /// Convenience method to encode to a new byte vector.
    fn encode_to_vec(&self) -> EncodingResult<Vec<u8>> {
        self.encode_to_vec_with(EncodeOptions::default())
    }

    /// Encodes to a new byte vector using explicit options.
    fn encode_to_vec_with(&self, options: EncodeOptions) -> EncodingResult<Vec<u8>> {
        let mut writer = BitWriter::with_capacity(self.encoded_size(), options);
        self.encode(&mut writer)?;
        Ok(writer.finish())
    }
}
