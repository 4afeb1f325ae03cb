//! Encoding implementations for SCTE-35 splice commands.

use crate::encoding::{BitWriter, Encodable, EncodingError, EncodingResult};
use crate::types::{SpliceCommand, SpliceInsert, TimeSignal};

impl Encodable for SpliceCommand {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        match self {
            SpliceCommand::SpliceInsert(insert) => insert.encode(writer),
            SpliceCommand::TimeSignal(signal) => signal.encode(writer),
        }
    }

    fn encoded_size(&self) -> usize {
        match self {
            SpliceCommand::SpliceInsert(insert) => insert.encoded_size(),
            SpliceCommand::TimeSignal(signal) => signal.encoded_size(),
        }
    }
}

impl SpliceInsert {
    fn writes_splice_time(&self) -> bool {
        self.program_splice_flag && !self.splice_immediate_flag
    }
}

impl Encodable for SpliceInsert {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        writer.write_u32(self.splice_event_id);

        // splice_event_cancel_indicator (1 bit) + 7 zero bits
        writer.write_bit(self.splice_event_cancel_indicator);
        writer.write_bits(0, 7);

        if self.splice_event_cancel_indicator {
            return Ok(());
        }

        writer.write_bit(self.out_of_network_indicator);
        writer.write_bit(self.program_splice_flag);
        writer.write_bit(self.duration_flag);
        writer.write_bit(self.splice_immediate_flag);
        writer.write_bits(0, 4);

        if self.writes_splice_time() {
            self.splice_time
                .as_ref()
                .ok_or(EncodingError::MissingRequiredField {
                    field: "splice_time",
                })?
                .encode(writer)?;
        }

        if self.duration_flag {
            self.break_duration
                .as_ref()
                .ok_or(EncodingError::MissingRequiredField {
                    field: "break_duration",
                })?
                .encode(writer)?;
        }

        writer.write_u16(self.unique_program_id);
        writer.write_u8(self.avail_num);
        writer.write_u8(self.avails_expected);

        Ok(())
    }

    fn encoded_size(&self) -> usize {
        // splice_event_id + cancel byte
        let mut size = 5;
        if self.splice_event_cancel_indicator {
            return size;
        }

        size += 1; // flags byte
        if self.writes_splice_time() {
            size += self.splice_time.map_or(0, |t| t.encoded_size());
        }
        if self.duration_flag {
            size += self.break_duration.map_or(0, |d| d.encoded_size());
        }
        size + 4 // unique_program_id + avail_num + avails_expected
    }
}

impl Encodable for TimeSignal {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        self.splice_time.encode(writer)
    }

    fn encoded_size(&self) -> usize {
        self.splice_time.encoded_size()
    }
}
