use crate::bits::{BitReader, BitWriter};
use crate::codes;
use crate::error::CodecError;
use crate::traits::SequenceCodec;
use crate::variants::{normalize, validate};
use crate::Encoding;

const ENCODING: Encoding = Encoding::Bit2;

/// Tag (2 bits) plus the pad-count field (2 bits).
const HEADER_BITS: usize = 4;

/// 2-bit variant: concrete bases only.
///
/// Wire format: `[TAG=01][PAD_COUNT][pad zeros][2-bit symbol codes...]`.
/// `PAD_COUNT` stores half the number of zero pad bits (0, 2, 4 or 6)
/// inserted between the header and the payload; both header and codes are
/// multiples of 2 bits, so the pad is always even.
pub struct TwoBit;

impl SequenceCodec for TwoBit {
    fn encode(&self, sequence: &str) -> Result<Vec<u8>, CodecError> {
        let sequence = normalize(sequence);
        validate(&sequence, ENCODING)?;

        let total = HEADER_BITS + 2 * sequence.chars().count();
        let pad = (8 - total % 8) % 8;

        let mut w = BitWriter::with_capacity(total + pad);
        w.push(ENCODING.tag(), 2);
        w.push((pad / 2) as u8, 2);
        w.push(0, pad);
        for symbol in sequence.chars() {
            w.push(codes::two_bit_code(symbol), 2);
        }
        Ok(w.into_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<String, CodecError> {
        let mut r = BitReader::new(data);
        let width = ENCODING.bit_width();

        let tag = r.read(2).ok_or(CodecError::Truncated { width })?;
        if tag != ENCODING.tag() {
            return Err(CodecError::WrongTag {
                width,
                found: tag,
                expected: ENCODING.tag(),
            });
        }
        let pad = 2 * r.read(2).ok_or(CodecError::Truncated { width })? as usize;
        let padding = r.read(pad).ok_or(CodecError::Truncated { width })?;
        if padding != 0 {
            return Err(CodecError::NonZeroPadding {
                width,
                context: "in header",
            });
        }

        if r.remaining() % 2 != 0 {
            return Err(CodecError::MisalignedPayload {
                width,
                bits: r.remaining(),
            });
        }
        let mut decoded = String::with_capacity(r.remaining() / 2);
        while let Some(code) = r.read(2) {
            match codes::DECODE_2BIT[code as usize] {
                Some(symbol) => decoded.push(symbol),
                None => return Err(CodecError::InvalidSymbolCode { width, code }),
            }
        }
        Ok(decoded)
    }
}
