//! The three encoding variants.
//!
//! Each variant is an independent byte-stream format: a 2-bit discriminating
//! tag, a variant-specific header describing padding or termination, and a
//! payload of fixed-width symbol codes.

mod four_bit;
mod three_bit;
mod two_bit;

pub use four_bit::FourBit;
pub use three_bit::ThreeBit;
pub use two_bit::TwoBit;

use std::collections::BTreeSet;

use crate::error::CodecError;
use crate::Encoding;

/// Uppercase the sequence and strip line-break characters.
pub(crate) fn normalize(sequence: &str) -> String {
    sequence
        .chars()
        .filter(|&c| c != '\n' && c != '\r')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Reject any character outside the variant's alphabet, naming every
/// offending character (sorted, deduplicated).
pub(crate) fn validate(sequence: &str, encoding: Encoding) -> Result<(), CodecError> {
    let alphabet = encoding.alphabet();
    let invalid: BTreeSet<char> = sequence
        .chars()
        .filter(|c| !alphabet.contains(c))
        .collect();
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(CodecError::UnsupportedSymbols {
            width: encoding.bit_width(),
            symbols: invalid.into_iter().collect(),
        })
    }
}
