//! Builder for creating SCTE-35 splice information sections.

use super::error::{BuilderError, BuilderResult};
use crate::descriptors::SpliceDescriptor;
use crate::types::{SCTE35_TABLE_ID, SpliceCommand, SpliceInfoSection, SpliceInsert, TimeSignal};

/// Builder for creating a complete SCTE-35 splice information section.
///
/// Defaults: `table_id` 0xFC, both indicators clear, protocol version 0, no
/// encryption, zero PTS adjustment, `cw_index` 0xFF and tier 0xFFF.
#[derive(Debug)]
pub struct SpliceInfoSectionBuilder {
    pts_adjustment: u64,
    cw_index: u8,
    tier: u16,
    splice_command: Option<SpliceCommand>,
    descriptors: Vec<SpliceDescriptor>,
}

impl SpliceInfoSectionBuilder {
    /// Create a new splice info section builder with default values.
    pub fn new() -> Self {
        Self {
            pts_adjustment: 0,
            cw_index: 0xFF,
            tier: 0xFFF, // Default "all tiers"
            splice_command: None,
            descriptors: Vec::new(),
        }
    }

    /// Set the PTS adjustment value (33-bit).
    pub fn pts_adjustment(mut self, pts_adjustment: u64) -> Self {
        self.pts_adjustment = pts_adjustment & 0x1_FFFF_FFFF;
        self
    }

    /// Set the control word index.
    pub fn cw_index(mut self, cw_index: u8) -> Self {
        self.cw_index = cw_index;
        self
    }

    /// Set the tier value (12-bit). 0xFFF means all tiers.
    pub fn tier(mut self, tier: u16) -> Self {
        self.tier = tier & 0xFFF;
        self
    }

    /// Set the splice command directly.
    pub fn splice_command(mut self, command: SpliceCommand) -> Self {
        self.splice_command = Some(command);
        self
    }

    /// Set a splice insert command.
    pub fn splice_insert(self, insert: SpliceInsert) -> Self {
        self.splice_command(SpliceCommand::SpliceInsert(insert))
    }

    /// Set a time signal command.
    pub fn time_signal(self, time_signal: TimeSignal) -> Self {
        self.splice_command(SpliceCommand::TimeSignal(time_signal))
    }

    /// Add a descriptor to the message.
    pub fn add_descriptor(mut self, descriptor: SpliceDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Build the final splice info section.
    ///
    /// # Errors
    ///
    /// Returns an error if no splice command has been set.
    pub fn build(self) -> BuilderResult<SpliceInfoSection> {
        let splice_command = self
            .splice_command
            .ok_or(BuilderError::MissingRequiredField("splice_command"))?;

        Ok(SpliceInfoSection {
            table_id: SCTE35_TABLE_ID,
            section_syntax_indicator: false,
            private_indicator: false,
            protocol_version: 0,
            encrypted_packet: false,
            encryption_algorithm: 0,
            pts_adjustment: self.pts_adjustment,
            cw_index: self.cw_index,
            tier: self.tier,
            splice_command,
            splice_descriptors: self.descriptors,
        })
    }
}

impl Default for SpliceInfoSectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
