use crate::bits::{BitReader, BitWriter};
use crate::codes;
use crate::error::CodecError;
use crate::traits::SequenceCodec;
use crate::variants::{normalize, validate};
use crate::Encoding;

const ENCODING: Encoding = Encoding::Bit4;

/// `TAG(2) + 00`: used when the sequence length is odd, since
/// `4 + 4n ≡ 0 (mod 8)` for odd `n`.
const ODD_HEADER: u8 = 0b1100;
/// `TAG(2) + 11 + 0000`: used when the sequence length is even.
const EVEN_HEADER: u8 = 0b1111_0000;

/// 4-bit variant: the full IUPAC alphabet.
///
/// Symbols are exactly 4 bits, so the header itself pads the stream to a
/// byte multiple: a 4-bit header for odd-length sequences, an 8-bit header
/// for even-length ones. The two shapes are distinguishable by value.
pub struct FourBit;

impl SequenceCodec for FourBit {
    fn encode(&self, sequence: &str) -> Result<Vec<u8>, CodecError> {
        let sequence = normalize(sequence);
        validate(&sequence, ENCODING)?;

        let n = sequence.chars().count();
        let mut w = BitWriter::with_capacity(8 + 4 * n);
        if n % 2 == 1 {
            w.push(ODD_HEADER, 4);
        } else {
            w.push(EVEN_HEADER, 8);
        }
        for symbol in sequence.chars() {
            w.push(codes::four_bit_code(symbol), 4);
        }
        Ok(w.into_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<String, CodecError> {
        let mut r = BitReader::new(data);
        let width = ENCODING.bit_width();

        let head = r.read(4).ok_or(CodecError::Truncated { width })?;
        if head != ODD_HEADER {
            let tail = r.read(4).ok_or(CodecError::Truncated { width })?;
            let found = (head << 4) | tail;
            if found != EVEN_HEADER {
                return Err(CodecError::UnrecognizedHeader { width, found });
            }
        }

        if r.remaining() % 4 != 0 {
            return Err(CodecError::MisalignedPayload {
                width,
                bits: r.remaining(),
            });
        }
        let mut decoded = String::with_capacity(r.remaining() / 4);
        while let Some(code) = r.read(4) {
            match codes::DECODE_4BIT[code as usize] {
                Some(symbol) => decoded.push(symbol),
                None => return Err(CodecError::InvalidSymbolCode { width, code }),
            }
        }
        Ok(decoded)
    }
}
