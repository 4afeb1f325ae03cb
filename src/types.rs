//! Core SCTE-35 data structures.
//!
//! These structures describe a splice info section as it is handed to the
//! encoder. Derived wire fields (the three length fields, the command type and
//! the CRC) are not stored; the encoder computes them.

use crate::descriptors::SpliceDescriptor;
use crate::time::{BreakDuration, SpliceTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Table identifier of every SCTE-35 section.
pub const SCTE35_TABLE_ID: u8 = 0xFC;

/// Represents a complete SCTE-35 splice information section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpliceInfoSection {
    /// Table identifier, should be 0xFC for SCTE-35
    #[cfg_attr(feature = "serde", serde(default = "default_table_id"))]
    pub table_id: u8,
    /// Section syntax indicator
    #[cfg_attr(feature = "serde", serde(default))]
    pub section_syntax_indicator: bool,
    /// Private indicator
    #[cfg_attr(feature = "serde", serde(default))]
    pub private_indicator: bool,
    /// SCTE-35 protocol version
    #[cfg_attr(feature = "serde", serde(default))]
    pub protocol_version: u8,
    /// Encrypted packet flag. Carried on the wire only; the payload is never
    /// encrypted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub encrypted_packet: bool,
    /// Encryption algorithm (6-bit)
    #[cfg_attr(feature = "serde", serde(default))]
    pub encryption_algorithm: u8,
    /// PTS adjustment value in 90kHz ticks (33-bit)
    #[cfg_attr(feature = "serde", serde(default))]
    pub pts_adjustment: u64,
    /// Control word index
    #[cfg_attr(feature = "serde", serde(default = "default_cw_index"))]
    pub cw_index: u8,
    /// Authorization tier (12-bit)
    #[cfg_attr(feature = "serde", serde(default = "default_tier"))]
    pub tier: u16,
    /// The splice command carried by this section
    pub splice_command: SpliceCommand,
    /// Descriptor loop, in wire order
    #[cfg_attr(feature = "serde", serde(default))]
    pub splice_descriptors: Vec<SpliceDescriptor>,
}

impl SpliceInfoSection {
    /// Command type written into the header, derived from the command.
    pub fn splice_command_type(&self) -> u8 {
        self.splice_command.command_type()
    }
}

#[cfg(feature = "serde")]
fn default_table_id() -> u8 {
    SCTE35_TABLE_ID
}

#[cfg(feature = "serde")]
fn default_cw_index() -> u8 {
    0xFF
}

#[cfg(feature = "serde")]
fn default_tier() -> u16 {
    0xFFF
}

/// Splice commands supported by the encoder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum SpliceCommand {
    /// Splice insert command (0x05) - Ad insertion points
    SpliceInsert(SpliceInsert),
    /// Time signal command (0x06) - Time synchronization
    TimeSignal(TimeSignal),
}

impl SpliceCommand {
    /// Returns the `splice_command_type` of this command.
    pub fn command_type(&self) -> u8 {
        match self {
            SpliceCommand::SpliceInsert(_) => SpliceCommandType::SpliceInsert as u8,
            SpliceCommand::TimeSignal(_) => SpliceCommandType::TimeSignal as u8,
        }
    }
}

/// Wire values of `splice_command_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SpliceCommandType {
    /// `splice_insert()`
    SpliceInsert = 0x05,
    /// `time_signal()`
    TimeSignal = 0x06,
}

/// Represents a splice insert command (0x05).
///
/// This is the command used for ad insertion: it signals the start and end
/// of commercial breaks.
///
/// `splice_time` is only written when `program_splice_flag` is set and
/// `splice_immediate_flag` is not; `break_duration` only when
/// `duration_flag` is set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpliceInsert {
    /// Unique identifier for this splice event
    pub splice_event_id: u32,
    /// Cancels a previously sent event with the same id
    #[cfg_attr(feature = "serde", serde(default))]
    pub splice_event_cancel_indicator: bool,
    /// Going out of (true) or returning to (false) the network
    #[cfg_attr(feature = "serde", serde(default))]
    pub out_of_network_indicator: bool,
    /// Program-level splice
    #[cfg_attr(feature = "serde", serde(default))]
    pub program_splice_flag: bool,
    /// A break duration follows
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration_flag: bool,
    /// Splice at the next opportunity instead of at `splice_time`
    #[cfg_attr(feature = "serde", serde(default))]
    pub splice_immediate_flag: bool,
    /// When the splice should occur
    #[cfg_attr(feature = "serde", serde(default))]
    pub splice_time: Option<SpliceTime>,
    /// Duration of the commercial break
    #[cfg_attr(feature = "serde", serde(default))]
    pub break_duration: Option<BreakDuration>,
    /// Unique identifier for the program
    #[cfg_attr(feature = "serde", serde(default))]
    pub unique_program_id: u16,
    /// Avail number for this splice event
    #[cfg_attr(feature = "serde", serde(default))]
    pub avail_num: u8,
    /// Expected number of avails in this break
    #[cfg_attr(feature = "serde", serde(default))]
    pub avails_expected: u8,
}

/// Represents a time signal command (0x06).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSignal {
    /// The presentation timestamp for this time signal
    #[cfg_attr(feature = "serde", serde(default))]
    pub splice_time: SpliceTime,
}

impl From<SpliceInsert> for SpliceCommand {
    fn from(insert: SpliceInsert) -> Self {
        SpliceCommand::SpliceInsert(insert)
    }
}

impl From<TimeSignal> for SpliceCommand {
    fn from(signal: TimeSignal) -> Self {
        SpliceCommand::TimeSignal(signal)
    }
}
