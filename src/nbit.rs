//! Meta codec: minimal-variant selection and tag-based auto-detection.
//!
//! Decoding without an explicit variant inspects the stream's leading tag
//! bits only. (An alternative strategy — try each decoder and verify an
//! encode round trip — was once described for this format but never
//! exercised; tag dispatch matches the wire contract.)

use crate::error::CodecError;
use crate::variants::normalize;
use crate::Encoding;

/// The narrowest variant whose alphabet covers every character of
/// `sequence` (after normalization). Sequences outside even the full IUPAC
/// alphabet are an encoding error naming the unsupported characters.
pub fn choose_minimal_encoding(sequence: &str) -> Result<Encoding, CodecError> {
    let sequence = normalize(sequence);
    for encoding in [Encoding::Bit2, Encoding::Bit3] {
        if encoding.supports(&sequence) {
            return Ok(encoding);
        }
    }
    crate::variants::validate(&sequence, Encoding::Bit4)?;
    Ok(Encoding::Bit4)
}

/// Map the first byte's top two bits to the variant that produced the
/// stream.
pub fn detect_tag(data: &[u8]) -> Result<Encoding, CodecError> {
    let first = data.first().ok_or(CodecError::EmptyStream)?;
    let tag = first >> 6;
    Encoding::from_tag(tag).ok_or(CodecError::UnknownTag { tag })
}

/// Encode `sequence` with `encoding`, or with the minimal sufficient
/// variant when none is given. Returns the variant actually used with the
/// bytes.
pub fn encode_nbit(
    sequence: &str,
    encoding: Option<Encoding>,
) -> Result<(Encoding, Vec<u8>), CodecError> {
    let encoding = match encoding {
        Some(encoding) => encoding,
        None => choose_minimal_encoding(sequence)?,
    };
    Ok((encoding, encoding.encode(sequence)?))
}

/// Decode `data` with `encoding`, or with the tag-detected variant when
/// none is given. Returns the variant actually used with the sequence.
pub fn decode_nbit(
    data: &[u8],
    encoding: Option<Encoding>,
) -> Result<(Encoding, String), CodecError> {
    let encoding = match encoding {
        Some(encoding) => encoding,
        None => detect_tag(data)?,
    };
    Ok((encoding, encoding.decode(data)?))
}
