//! Bit-level plumbing shared by the variant codecs.
//!
//! Both sides work MSB-first within each byte, matching the wire formats:
//! the first bit written lands in the top bit of the first byte.

/// Appends fixed-width bit groups to a growing byte buffer.
pub(crate) struct BitWriter {
    buf: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    pub(crate) fn with_capacity(bits: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bits.div_ceil(8)),
            bit_len: 0,
        }
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub(crate) fn push(&mut self, value: u8, width: usize) {
        debug_assert!(width <= 8);
        debug_assert!(width == 8 || value < (1 << width));
        for i in (0..width).rev() {
            let byte_idx = self.bit_len / 8;
            if byte_idx == self.buf.len() {
                self.buf.push(0);
            }
            if (value >> i) & 1 == 1 {
                self.buf[byte_idx] |= 1 << (7 - self.bit_len % 8);
            }
            self.bit_len += 1;
        }
    }

    pub(crate) fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Finish the stream. Every encoder pads to a byte boundary first,
    /// which this asserts.
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        debug_assert_eq!(self.bit_len % 8, 0, "bitstream not byte-aligned");
        self.buf
    }
}

/// Consumes fixed-width bit groups from a byte slice.
pub(crate) struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bits left to read.
    pub(crate) fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Read the next `width` bits, or `None` (without consuming) when fewer
    /// than `width` bits remain.
    pub(crate) fn read(&mut self, width: usize) -> Option<u8> {
        debug_assert!(width <= 8);
        if self.remaining() < width {
            return None;
        }
        let mut value = 0u8;
        for _ in 0..width {
            let bit = (self.data[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | bit;
            self.pos += 1;
        }
        Some(value)
    }

    /// Consume every remaining bit, reporting whether all of them were zero.
    pub(crate) fn rest_is_zero(&mut self) -> bool {
        let mut all_zero = true;
        while let Some(bit) = self.read(1) {
            all_zero &= bit == 0;
        }
        all_zero
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_msb_first() {
        let mut w = BitWriter::with_capacity(8);
        w.push(0b01, 2);
        w.push(0b10, 2);
        w.push(0b1111, 4);
        assert_eq!(w.bit_len(), 8);
        assert_eq!(w.into_bytes(), vec![0b0110_1111]);
    }

    #[test]
    fn test_writer_spans_byte_boundary() {
        let mut w = BitWriter::with_capacity(16);
        w.push(0b111, 3);
        w.push(0b000, 3);
        w.push(0b111, 3);
        w.push(0b0000011, 7);
        assert_eq!(w.into_bytes(), vec![0b1110_0011, 0b1000_0011]);
    }

    #[test]
    fn test_reader_round_trip() {
        let data = [0b1010_1100, 0b0101_0000];
        let mut r = BitReader::new(&data);
        assert_eq!(r.read(2), Some(0b10));
        assert_eq!(r.read(3), Some(0b101));
        assert_eq!(r.read(3), Some(0b100));
        assert_eq!(r.remaining(), 8);
        assert_eq!(r.read(8), Some(0b0101_0000));
        assert_eq!(r.read(1), None);
    }

    #[test]
    fn test_read_past_end_does_not_consume() {
        let data = [0b1100_0000];
        let mut r = BitReader::new(&data);
        assert_eq!(r.read(7), Some(0b110_0000));
        assert_eq!(r.read(3), None);
        assert_eq!(r.remaining(), 1);
        assert_eq!(r.read(1), Some(0));
    }

    #[test]
    fn test_rest_is_zero() {
        let mut r = BitReader::new(&[0b0100_0000]);
        assert_eq!(r.read(2), Some(0b01));
        assert!(r.rest_is_zero());
        assert_eq!(r.remaining(), 0);

        let mut r = BitReader::new(&[0b0100_0001]);
        assert_eq!(r.read(2), Some(0b01));
        assert!(!r.rest_is_zero());
    }

    #[test]
    fn test_zero_width_reads_and_writes() {
        let mut w = BitWriter::with_capacity(8);
        w.push(0, 0);
        assert_eq!(w.bit_len(), 0);
        let mut r = BitReader::new(&[]);
        assert_eq!(r.read(0), Some(0));
        assert_eq!(r.read(1), None);
    }
}
