use crate::bits::{BitReader, BitWriter};
use crate::codes::{self, SENTINEL_3BIT};
use crate::error::CodecError;
use crate::traits::SequenceCodec;
use crate::variants::{normalize, validate};
use crate::Encoding;

const ENCODING: Encoding = Encoding::Bit3;

/// 3-bit variant: concrete bases, `N` and gaps.
///
/// Wire format: `[TAG=10][3-bit symbol codes...][termination]`. Symbol codes
/// are 3 bits wide, so the payload rarely lands on a byte boundary. When
/// fewer than 3 bits are missing, plain zero bits close the stream: the
/// decoder stops before an incomplete trailing group, so a short zero tail
/// can never be read as a symbol. When 3 or more bits are missing, the
/// reserved sentinel code terminates the payload explicitly, followed by
/// zero bits up to the boundary.
pub struct ThreeBit;

impl SequenceCodec for ThreeBit {
    fn encode(&self, sequence: &str) -> Result<Vec<u8>, CodecError> {
        let sequence = normalize(sequence);
        validate(&sequence, ENCODING)?;

        let total = 2 + 3 * sequence.chars().count();
        let mut w = BitWriter::with_capacity(total + 8);
        w.push(ENCODING.tag(), 2);
        for symbol in sequence.chars() {
            w.push(codes::three_bit_code(symbol), 3);
        }

        let to_pad = (8 - w.bit_len() % 8) % 8;
        if to_pad > 0 && to_pad < 3 {
            w.push(0, to_pad);
        } else if to_pad >= 3 {
            w.push(SENTINEL_3BIT, 3);
            w.push(0, to_pad - 3);
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

        let mut decoded = String::with_capacity(r.remaining() / 3);
        while let Some(code) = r.read(3) {
            if code == SENTINEL_3BIT {
                if !r.rest_is_zero() {
                    return Err(CodecError::NonZeroPadding {
                        width,
                        context: "after the stop symbol",
                    });
                }
                return Ok(decoded);
            }
            match codes::DECODE_3BIT[code as usize] {
                Some(symbol) => decoded.push(symbol),
                None => return Err(CodecError::InvalidSymbolCode { width, code }),
            }
        }
        // Stream exhausted mid-group: the 1-2 leftover bits must be zero.
        if !r.rest_is_zero() {
            return Err(CodecError::NonZeroPadding {
                width,
                context: "at the end of the stream",
            });
        }
        Ok(decoded)
    }
}
