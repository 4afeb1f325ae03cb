//! Knobs controlling how out-of-range values are written.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the 33rd bit of PTS and duration fields is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowBitMode {
    /// Write bit 32 of the value into the overflow bit.
    #[default]
    Extract,
    /// Always write a zero overflow bit.
    ///
    /// Matches encoders whose 33rd-bit test was evaluated with 32-bit
    /// arithmetic and therefore never fired. Only the low 32 bits of each
    /// value reach the wire in this mode.
    AlwaysClear,
}

/// Options applied by a [`BitWriter`](super::BitWriter) while encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncodeOptions {
    /// Reject values wider than their slot with
    /// [`EncodingError::FieldOverflow`](super::EncodingError::FieldOverflow)
    /// instead of masking them.
    pub strict: bool,
    /// Overflow bit behavior for 33-bit fields.
    pub overflow_bit: OverflowBitMode,
}

impl EncodeOptions {
    /// Options that reject oversized fields.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Options reproducing the always-clear overflow bit.
    pub fn legacy_overflow_bit() -> Self {
        Self {
            overflow_bit: OverflowBitMode::AlwaysClear,
            ..Self::default()
        }
    }
}
