use crate::{bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr};

/// Fixed-width encoder for integers within an inclusive `[min, max]` range.
///
/// Every value in the range is written as `value - min` using the smallest
/// number of bits that can hold `max - min`, so the cost of an encoded value
/// is known before the value itself is. Decoding never trusts the bits: any
/// result above `max` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedInteger {
    min: i64,
    max: i64,
    bits: u8,
}

impl BoundedInteger {
    pub const fn new(min: i64, max: i64) -> Self {
        if min > max {
            panic!("can't create a bounded integer whose minimum is greater than its maximum");
        }

        let span = (max as i128 - min as i128) as u64;
        Self {
            min,
            max,
            bits: required_bits(span),
        }
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Bits written for any value in range.
    pub const fn bit_length(&self) -> u32 {
        self.bits as u32
    }

    /// # Panics
    ///
    /// Panics if `value` is outside of `[min, max]`; callers own that invariant.
    pub fn write(&self, writer: &mut dyn BitWrite, value: i64) {
        if !self.contains(value) {
            panic!(
                "can't encode {} with a bounded integer over [{}, {}]",
                value, self.min, self.max
            );
        }

        if writer.is_counter() {
            writer.count_bits(self.bit_length());
            return;
        }

        let mut encoded = (value as i128 - self.min as i128) as u64;
        for _ in 0..self.bits {
            writer.write_bit(encoded & 1 != 0);
            encoded >>= 1;
        }
    }

    pub fn read(&self, reader: &mut BitReader) -> Result<i64, SerdeErr> {
        let mut encoded: u64 = 0;
        for index in 0..self.bits {
            if reader.read_bit()? {
                encoded |= 1 << index;
            }
        }

        let value = self.min as i128 + encoded as i128;
        if value > self.max as i128 {
            return Err(SerdeErr::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value as i64)
    }

    /// Same as `read`, but leaves the reader's cursor where it was.
    pub fn peek(&self, reader: &BitReader) -> Result<i64, SerdeErr> {
        let mut probe = reader.clone();
        self.read(&mut probe)
    }
}

const fn required_bits(span: u64) -> u8 {
    let mut bits: u8 = 0;
    while bits < 64 && (span >> bits) != 0 {
        bits += 1;
    }
    bits
}
