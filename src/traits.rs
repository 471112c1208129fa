use crate::error::CodecError;

/// Core trait for sequence codecs.
///
/// Every encoding variant implements the same contract:
/// 1. `encode`: turn a raw sequence into a self-describing byte stream.
/// 2. `decode`: turn such a byte stream back into the normalized sequence.
///
/// Encoders normalize first (uppercase, line breaks stripped) and validate
/// against their own alphabet; decoders verify the stream's tag, header and
/// padding before mapping symbol codes back.
pub trait SequenceCodec {
    fn encode(&self, sequence: &str) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, data: &[u8]) -> Result<String, CodecError>;
}
