//! Bit-level codecs for IUPAC nucleotide sequences and Phred quality scores.
//!
//! Three self-describing byte-stream variants pack symbols at 2, 3 or 4 bits
//! each, covering strictly nested alphabets (concrete bases, then N and gaps,
//! then the full IUPAC set). A meta codec picks the narrowest sufficient
//! variant on encode and detects the variant from the stream's leading tag
//! bits on decode. Quality scores travel separately as a run-length stream.
//!
//! All operations are synchronous pure functions over immutable inputs; the
//! lookup tables behind them are built once, lazily, and never mutated.

pub mod bases;
mod bits;
mod codes;
mod error;
mod nbit;
mod quality;
mod record;
mod traits;
mod variants;

pub use error::CodecError;
pub use nbit::{choose_minimal_encoding, decode_nbit, detect_tag, encode_nbit};
pub use quality::{decode_quality, encode_quality, EncodedQuality, DEFAULT_ASCII_BASE};
pub use record::Record;
pub use traits::SequenceCodec;
pub use variants::{FourBit, ThreeBit, TwoBit};

use serde::{Deserialize, Serialize};

/// The three encoding variants.
///
/// Each variant supports a strict superset of the previous one's alphabet.
/// Adding a variant is a compile-time-checked change: every dispatch below
/// matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// Concrete bases only (A, C, G, T), 2 bits per symbol.
    Bit2,
    /// Concrete bases plus N and gaps, 3 bits per symbol.
    Bit3,
    /// The full IUPAC alphabet, 4 bits per symbol.
    Bit4,
}

impl Encoding {
    /// Bits per symbol.
    pub fn bit_width(self) -> u8 {
        match self {
            Self::Bit2 => 2,
            Self::Bit3 => 3,
            Self::Bit4 => 4,
        }
    }

    /// The two leading bits that declare this variant on the wire.
    pub fn tag(self) -> u8 {
        match self {
            Self::Bit2 => 0b01,
            Self::Bit3 => 0b10,
            Self::Bit4 => 0b11,
        }
    }

    /// The variant declared by a 2-bit tag value, if any.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0b01 => Some(Self::Bit2),
            0b10 => Some(Self::Bit3),
            0b11 => Some(Self::Bit4),
            _ => None,
        }
    }

    /// The symbols this variant can represent.
    pub fn alphabet(self) -> &'static [char] {
        match self {
            Self::Bit2 => bases::BIT2_ALPHABET,
            Self::Bit3 => bases::BIT3_ALPHABET,
            Self::Bit4 => bases::BIT4_ALPHABET,
        }
    }

    /// Whether every character of `sequence` is in this variant's alphabet.
    pub fn supports(self, sequence: &str) -> bool {
        let alphabet = self.alphabet();
        sequence.chars().all(|c| alphabet.contains(&c))
    }

    /// Encode using this variant.
    pub fn encode(self, sequence: &str) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Bit2 => TwoBit.encode(sequence),
            Self::Bit3 => ThreeBit.encode(sequence),
            Self::Bit4 => FourBit.encode(sequence),
        }
    }

    /// Decode using this variant.
    pub fn decode(self, data: &[u8]) -> Result<String, CodecError> {
        match self {
            Self::Bit2 => TwoBit.decode(data),
            Self::Bit3 => ThreeBit.decode(data),
            Self::Bit4 => FourBit.decode(data),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bit2 => write!(f, "2-bit"),
            Self::Bit3 => write!(f, "3-bit"),
            Self::Bit4 => write!(f, "4-bit"),
        }
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn test_tags_are_distinct_and_invertible() {
        for encoding in [Encoding::Bit2, Encoding::Bit3, Encoding::Bit4] {
            assert_eq!(Encoding::from_tag(encoding.tag()), Some(encoding));
        }
        assert_eq!(Encoding::from_tag(0b00), None);
    }

    #[test]
    fn test_enum_dispatch_round_trips() {
        for (encoding, sequence) in [
            (Encoding::Bit2, "ACGT"),
            (Encoding::Bit3, "ACGTN-"),
            (Encoding::Bit4, "ACGTNRYSWKMBDHV-"),
        ] {
            let bytes = encoding.encode(sequence).unwrap();
            assert_eq!(encoding.decode(&bytes).unwrap(), sequence);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Encoding::Bit3.to_string(), "3-bit");
    }
}
