//! Encoding implementations for SCTE-35 time structures.

use crate::encoding::{BitWriter, Encodable, EncodingResult};
use crate::time::{BreakDuration, SpliceTime};

impl Encodable for SpliceTime {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        // time_specified_flag (1 bit) + 7 zero bits
        writer.write_bit(self.time_specified());
        writer.write_bits(0, 7);

        if let Some(pts_time) = self.pts_time {
            let (overflow, low) = writer.split_33("pts_time", pts_time)?;
            // 7 zero bits + pts_time bit 32
            writer.write_bits(0, 7);
            writer.write_bit(overflow);
            writer.write_u32(low);
        }

        Ok(())
    }

    fn encoded_size(&self) -> usize {
        if self.time_specified() { 6 } else { 1 }
    }
}

impl Encodable for BreakDuration {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        let (overflow, low) = writer.split_33("break_duration", self.duration)?;

        // auto_return (1 bit), 6 zero bits, duration bit 32
        writer.write_bit(self.auto_return);
        writer.write_bits(0, 6);
        writer.write_bit(overflow);
        writer.write_u32(low);

        Ok(())
    }

    fn encoded_size(&self) -> usize {
        5
    }
}
