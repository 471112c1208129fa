use thiserror::Error;

/// Error type for all codec operations.
///
/// Two kinds share the one enum, mirroring the strict hierarchy of the wire
/// contract: encode-side errors mean the input cannot be represented at all,
/// decode-side errors mean a byte stream is structurally invalid for the
/// variant applied to it ([`CodecError::is_decoding`] distinguishes them).
/// Variant-specific errors carry the variant's bit width for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input contains characters outside the variant's alphabet. The
    /// offending characters are sorted and deduplicated.
    #[error("BIT{width} encoder: unsupported symbols in sequence ({symbols:?})")]
    UnsupportedSymbols { width: u8, symbols: Vec<char> },

    #[error("BIT{width} decoder: wrong tag in header (found {found:#04b}, expected {expected:#04b})")]
    WrongTag { width: u8, found: u8, expected: u8 },

    #[error("BIT{width} decoder: unrecognized header bits {found:#010b}")]
    UnrecognizedHeader { width: u8, found: u8 },

    #[error("BIT{width} decoder: non-zero padding bits found {context}")]
    NonZeroPadding { width: u8, context: &'static str },

    #[error("BIT{width} decoder: payload of {bits} bits is not divisible by the symbol width")]
    MisalignedPayload { width: u8, bits: usize },

    #[error("BIT{width} decoder: invalid symbol code {code:#05b} in stream")]
    InvalidSymbolCode { width: u8, code: u8 },

    #[error("BIT{width} decoder: stream truncated inside the header")]
    Truncated { width: u8 },

    #[error("unknown or unsupported tag: {tag:#04b}")]
    UnknownTag { tag: u8 },

    #[error("cannot detect the encoding of an empty byte stream")]
    EmptyStream,

    #[error("quality string length {quality_len} does not match sequence length {sequence_len}")]
    QualityLengthMismatch {
        sequence_len: usize,
        quality_len: usize,
    },

    #[error("quality character {found:?} is outside the representable range for ASCII base {ascii_base}")]
    QualityOutOfRange { found: char, ascii_base: u8 },

    #[error("cannot encode an empty quality string")]
    EmptyQuality,

    #[error("record has no quality stream")]
    MissingQuality,
}

impl CodecError {
    /// Bit width of the variant involved, when one applies.
    pub fn bit_width(&self) -> Option<u8> {
        match self {
            Self::UnsupportedSymbols { width, .. }
            | Self::WrongTag { width, .. }
            | Self::UnrecognizedHeader { width, .. }
            | Self::NonZeroPadding { width, .. }
            | Self::MisalignedPayload { width, .. }
            | Self::InvalidSymbolCode { width, .. }
            | Self::Truncated { width } => Some(*width),
            _ => None,
        }
    }

    /// Whether this error was raised while decoding a byte stream.
    pub fn is_decoding(&self) -> bool {
        matches!(
            self,
            Self::WrongTag { .. }
                | Self::UnrecognizedHeader { .. }
                | Self::NonZeroPadding { .. }
                | Self::MisalignedPayload { .. }
                | Self::InvalidSymbolCode { .. }
                | Self::Truncated { .. }
                | Self::UnknownTag { .. }
                | Self::EmptyStream
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_enumerate_offending_symbols() {
        let err = CodecError::UnsupportedSymbols {
            width: 2,
            symbols: vec!['N', 'Z'],
        };
        let message = err.to_string();
        assert!(message.contains("BIT2"));
        assert!(message.contains("'N'"));
        assert!(message.contains("'Z'"));
        assert!(!err.is_decoding());
        assert_eq!(err.bit_width(), Some(2));
    }

    #[test]
    fn test_decode_errors_carry_width() {
        let err = CodecError::WrongTag {
            width: 2,
            found: 0b11,
            expected: 0b01,
        };
        assert!(err.is_decoding());
        assert_eq!(err.bit_width(), Some(2));
        assert!(err.to_string().contains("0b11"));
    }
}
