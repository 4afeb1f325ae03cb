//! Bit-level writer for encoding binary data.

use super::error::{EncodingError, EncodingResult};
use super::options::{EncodeOptions, OverflowBitMode};
use crate::time::PTS_MAX;

/// Position of a two-byte field whose value is written after the region it
/// describes has been serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    offset: usize,
}

/// A writer that can write individual bits to a byte buffer.
///
/// Fields narrower than a byte are packed most significant bit first. Values
/// wider than their slot are masked, or rejected when the writer's
/// [`EncodeOptions::strict`] is set.
pub struct BitWriter {
    buffer: Vec<u8>,
    /// Current bit position within the current byte (0-7).
    bit_position: u8,
    current_byte: u8,
    options: EncodeOptions,
}

impl BitWriter {
    /// Creates a new `BitWriter` with default options.
    pub fn new() -> Self {
        Self::with_options(EncodeOptions::default())
    }

    /// Creates a new `BitWriter` with the given options.
    pub fn with_options(options: EncodeOptions) -> Self {
        Self::with_capacity(0, options)
    }

    /// Creates a new `BitWriter` with a pre-allocated buffer capacity.
    pub fn with_capacity(capacity: usize, options: EncodeOptions) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            bit_position: 0,
            current_byte: 0,
            options,
        }
    }

    /// The options this writer encodes with.
    pub fn options(&self) -> EncodeOptions {
        self.options
    }

    /// Writes the low `bits` bits of `value` (1-64).
    pub fn write_bits(&mut self, value: u64, bits: u8) {
        debug_assert!((1..=64).contains(&bits), "bit width out of range: {bits}");

        let mut remaining = bits.min(64);
        let value = value & mask(remaining);

        while remaining > 0 {
            let available = 8 - self.bit_position;
            let take = remaining.min(available);
            let shift = remaining - take;
            let chunk = ((value >> shift) & mask(take)) as u8;

            self.current_byte |= chunk << (available - take);
            self.bit_position += take;
            if self.bit_position == 8 {
                self.buffer.push(self.current_byte);
                self.current_byte = 0;
                self.bit_position = 0;
            }
            remaining -= take;
        }
    }

    /// Writes a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        self.write_bits(bit as u64, 1);
    }

    /// Writes a named field of `bits` width, enforcing the width in strict mode.
    pub fn write_field(&mut self, field: &'static str, value: u64, bits: u8) -> EncodingResult<()> {
        let value = self.fit(field, value, mask(bits))?;
        self.write_bits(value, bits);
        Ok(())
    }

    /// Writes an 8-bit value.
    pub fn write_u8(&mut self, value: u8) {
        self.write_bits(value as u64, 8);
    }

    /// Writes a 16-bit value, big endian.
    pub fn write_u16(&mut self, value: u16) {
        self.write_bits(value as u64, 16);
    }

    /// Writes a 32-bit value, big endian.
    pub fn write_u32(&mut self, value: u32) {
        self.write_bits(value as u64, 32);
    }

    /// Writes a complete byte array.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        if self.bit_position == 0 {
            self.buffer.extend_from_slice(bytes);
        } else {
            for &byte in bytes {
                self.write_u8(byte);
            }
        }
    }

    /// Checks `value` against `max`, masking it unless the writer is strict.
    pub fn fit(&self, field: &'static str, value: u64, max: u64) -> EncodingResult<u64> {
        if self.options.strict && value > max {
            return Err(EncodingError::FieldOverflow {
                field,
                max,
                actual: value,
            });
        }
        Ok(value & max)
    }

    /// Splits a 33-bit value into its overflow bit and low 32 bits.
    pub fn split_33(&self, field: &'static str, value: u64) -> EncodingResult<(bool, u32)> {
        let value = self.fit(field, value, PTS_MAX)?;
        let overflow = match self.options.overflow_bit {
            OverflowBitMode::Extract => value & (1 << 32) != 0,
            OverflowBitMode::AlwaysClear => false,
        };
        Ok((overflow, value as u32))
    }

    /// Reserves two bytes holding `fill` to be patched later.
    ///
    /// Must be called on a byte boundary.
    pub fn reserve_u16(&mut self, fill: u16) -> Placeholder {
        debug_assert_eq!(self.bit_position, 0, "placeholder must be byte aligned");
        let offset = self.buffer.len();
        self.write_u16(fill);
        Placeholder { offset }
    }

    /// Writes the low 12 bits of `value` into a placeholder, keeping the
    /// reserved high nibble it was filled with.
    pub fn patch_u12(&mut self, field: &'static str, at: Placeholder, value: usize) -> EncodingResult<()> {
        let value = self.fit(field, value as u64, 0xFFF)? as u16;
        let [hi, lo] = value.to_be_bytes();
        self.buffer[at.offset] = (self.buffer[at.offset] & 0xF0) | hi;
        self.buffer[at.offset + 1] = lo;
        Ok(())
    }

    /// Writes `value` as a plain 16-bit field into a placeholder.
    pub fn patch_u16(&mut self, field: &'static str, at: Placeholder, value: usize) -> EncodingResult<()> {
        let value = self.fit(field, value as u64, 0xFFFF)? as u16;
        self.buffer[at.offset..at.offset + 2].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    /// Bytes written so far, excluding any partially written byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Finishes writing and returns the complete buffer.
    ///
    /// This will pad the last byte with zeros if necessary.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_position > 0 {
            self.buffer.push(self.current_byte);
        }
        self.buffer
    }

    /// Returns the current size of the buffer in bytes.
    ///
    /// Note: This includes any partially written byte.
    pub fn len(&self) -> usize {
        self.buffer.len() + if self.bit_position > 0 { 1 } else { 0 }
    }

    /// Returns true if no bits have been written yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty() && self.bit_position == 0
    }

    /// Returns the current bit position within the current byte.
    pub fn bit_position(&self) -> u8 {
        self.bit_position
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn mask(bits: u8) -> u64 {
    if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 }
}
