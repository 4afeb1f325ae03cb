//! Encoding of the descriptor loop entries.

use crate::descriptors::SpliceDescriptor;
use crate::encoding::{BitWriter, Encodable, EncodingResult};

impl Encodable for SpliceDescriptor {
    fn encode(&self, writer: &mut BitWriter) -> EncodingResult<()> {
        let length = writer.fit("descriptor_length", self.data.len() as u64, 0xFF)?;

        writer.write_u8(self.tag);
        writer.write_u8(length as u8);
        writer.write_bytes(&self.data);

        Ok(())
    }

    fn encoded_size(&self) -> usize {
        self.encoded_len()
    }
}
