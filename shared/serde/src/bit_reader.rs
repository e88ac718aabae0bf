use crate::error::SerdeErr;

/// Cursor over a borrowed byte slice written by a `BitWriter`.
///
/// Copying the reader copies only the cursor, so a clone can be used to look
/// ahead without consuming anything from the original.
#[derive(Clone)]
pub struct BitReader<'b> {
    buffer: &'b [u8],
    bits_read: usize,
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            buffer,
            bits_read: 0,
        }
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        let Some(byte) = self.buffer.get(self.bits_read / 8) else {
            return Err(SerdeErr::OutOfBits {
                bits_read: self.bits_read,
            });
        };
        let bit = (byte >> (self.bits_read % 8)) & 1 != 0;
        self.bits_read += 1;
        Ok(bit)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let mut output: u8 = 0;
        for index in 0..8 {
            if self.read_bit()? {
                output |= 1 << index;
            }
        }
        Ok(output)
    }

    pub fn bits_read(&self) -> usize {
        self.bits_read
    }

    pub fn bits_remaining(&self) -> usize {
        self.buffer.len() * 8 - self.bits_read
    }
}

#[cfg(test)]
mod tests {
    use crate::{bit_reader::BitReader, bit_writer::BitWrite, bit_writer::BitWriter, SerdeErr};

    #[test]
    fn read_write_bits() {
        // Write
        let mut writer = BitWriter::new();

        writer.write_bit(true);
        writer.write_bit(false);
        writer.write_bit(false);
        writer.write_bit(true);

        let buffer = writer.to_bytes();

        // Read
        let mut reader = BitReader::new(&buffer);

        assert!(reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.bits_read(), 4);
    }

    #[test]
    fn read_write_bytes_across_boundary() {
        let mut writer = BitWriter::new();

        writer.write_bit(true);
        writer.write_byte(123);
        writer.write_byte(255);

        let buffer = writer.to_bytes();
        let mut reader = BitReader::new(&buffer);

        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.read_byte().unwrap(), 123);
        assert_eq!(reader.read_byte().unwrap(), 255);
    }

    #[test]
    fn clone_does_not_move_original() {
        let buffer = [0b0000_0001u8];
        let reader = BitReader::new(&buffer);

        let mut probe = reader.clone();
        assert!(probe.read_bit().unwrap());

        assert_eq!(probe.bits_read(), 1);
        assert_eq!(reader.bits_read(), 0);
        assert_eq!(reader.bits_remaining(), 8);
    }

    #[test]
    fn reading_past_end_is_an_error() {
        let buffer = [0xFFu8];
        let mut reader = BitReader::new(&buffer);

        assert_eq!(reader.read_byte().unwrap(), 0xFF);
        assert_eq!(reader.bits_remaining(), 0);
        assert_eq!(reader.read_bit(), Err(SerdeErr::OutOfBits { bits_read: 8 }));
    }
}
