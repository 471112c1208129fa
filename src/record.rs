//! Sequence container: encoded bytes, optional quality stream, optional
//! header, and the variant that produced the bytes.
//!
//! Decoded views are computed on demand; every accessor call re-decodes
//! from the stored bytes. The container is immutable after construction
//! except for the stored variant, which [`Record::encode_with`] and
//! [`Record::decode_with`] may overwrite when given an explicit override.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::nbit::{decode_nbit, encode_nbit};
use crate::quality::{encode_quality, EncodedQuality, DEFAULT_ASCII_BASE};
use crate::Encoding;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    encoded_sequence: Vec<u8>,
    encoded_quality: Option<EncodedQuality>,
    encoding: Option<Encoding>,
    header: Option<String>,
}

impl Record {
    /// Encode `sequence` with the minimal sufficient variant, along with an
    /// optional Phred+33 quality string and free-text header. A quality
    /// string must be exactly one character per base of the raw sequence.
    pub fn from_sequence(
        sequence: &str,
        quality: Option<&str>,
        header: Option<&str>,
    ) -> Result<Self, CodecError> {
        Self::from_sequence_with_base(sequence, quality, header, DEFAULT_ASCII_BASE)
    }

    /// Like [`Record::from_sequence`] with an explicit quality ASCII base.
    pub fn from_sequence_with_base(
        sequence: &str,
        quality: Option<&str>,
        header: Option<&str>,
        ascii_base: u8,
    ) -> Result<Self, CodecError> {
        let encoded_quality = match quality {
            None => None,
            Some(quality) => {
                let sequence_len = sequence.chars().count();
                let quality_len = quality.chars().count();
                if sequence_len != quality_len {
                    return Err(CodecError::QualityLengthMismatch {
                        sequence_len,
                        quality_len,
                    });
                }
                Some(encode_quality(quality, ascii_base)?)
            }
        };
        let (encoding, encoded_sequence) = encode_nbit(sequence, None)?;
        Ok(Self {
            encoded_sequence,
            encoded_quality,
            encoding: Some(encoding),
            header: header.map(str::to_owned),
        })
    }

    /// The encoded sequence bytes.
    pub fn encoded_sequence(&self) -> &[u8] {
        &self.encoded_sequence
    }

    /// The encoded quality stream, when one was supplied.
    pub fn encoded_quality(&self) -> Option<&EncodedQuality> {
        self.encoded_quality.as_ref()
    }

    /// The variant that last encoded or decoded this record.
    pub fn encoding(&self) -> Option<Encoding> {
        self.encoding
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// The decoded sequence. Re-decodes from the stored bytes on every
    /// call, using the stored variant or tag detection.
    pub fn sequence(&self) -> Result<String, CodecError> {
        let (_, sequence) = decode_nbit(&self.encoded_sequence, self.encoding)?;
        Ok(sequence)
    }

    /// The decoded quality string, when a quality stream is present.
    pub fn quality(&self) -> Option<String> {
        self.encoded_quality.as_ref().map(EncodedQuality::decode)
    }

    /// The decoded raw scores, produced lazily.
    pub fn quality_scores(&self) -> Option<impl Iterator<Item = u8> + '_> {
        self.encoded_quality.as_ref().map(EncodedQuality::scores)
    }

    /// Arithmetic mean of the raw scores, or NaN when no quality stream is
    /// present ("quality not available", not a numeric zero).
    pub fn average_quality(&self) -> f64 {
        match &self.encoded_quality {
            Some(quality) => quality.average(),
            None => f64::NAN,
        }
    }

    /// Re-encode a sequence, preferring `encoding`, then the stored
    /// variant, then minimal selection. Records the variant used.
    pub fn encode_with(
        &mut self,
        sequence: &str,
        encoding: Option<Encoding>,
    ) -> Result<Vec<u8>, CodecError> {
        let (encoding, bytes) = encode_nbit(sequence, encoding.or(self.encoding))?;
        self.encoding = Some(encoding);
        Ok(bytes)
    }

    /// Decode a byte stream, preferring `encoding`, then the stored
    /// variant, then tag detection. Records the variant used.
    pub fn decode_with(
        &mut self,
        data: &[u8],
        encoding: Option<Encoding>,
    ) -> Result<String, CodecError> {
        let (encoding, sequence) = decode_nbit(data, encoding.or(self.encoding))?;
        self.encoding = Some(encoding);
        Ok(sequence)
    }

    /// FASTA rendering. Records without a header use a placeholder derived
    /// from a hash of the encoded bytes.
    pub fn fasta(&self) -> Result<String, CodecError> {
        Ok(format!(">{}\n{}", self.header_or_hash(), self.sequence()?))
    }

    /// FASTQ rendering; errors when no quality stream is present.
    pub fn fastq(&self) -> Result<String, CodecError> {
        let quality = self.quality().ok_or(CodecError::MissingQuality)?;
        Ok(format!(
            "@{}\n{}\n+\n{}",
            self.header_or_hash(),
            self.sequence()?,
            quality
        ))
    }

    fn header_or_hash(&self) -> String {
        match &self.header {
            Some(header) => header.clone(),
            None => {
                let mut hasher = DefaultHasher::new();
                self.encoded_sequence.hash(&mut hasher);
                hasher.finish().to_string()
            }
        }
    }
}

impl fmt::Display for Record {
    /// Sequence, or `sequence\tquality` when a quality stream is present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sequence = self.sequence().map_err(|_| fmt::Error)?;
        match self.quality() {
            Some(quality) => write!(f, "{sequence}\t{quality}"),
            None => write!(f, "{sequence}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sequence_selects_minimal_variant() {
        let record = Record::from_sequence("ATCGN-A", None, None).unwrap();
        assert_eq!(record.encoding(), Some(Encoding::Bit3));
        assert_eq!(record.sequence().unwrap(), "ATCGN-A");
        assert_eq!(record.quality(), None);
        assert!(record.average_quality().is_nan());
    }

    #[test]
    fn test_quality_length_mismatch() {
        let err = Record::from_sequence("ATCG", Some("!#$%&'()*+,-./01234"), None).unwrap_err();
        assert_eq!(
            err,
            CodecError::QualityLengthMismatch {
                sequence_len: 4,
                quality_len: 19,
            }
        );
        assert!(Record::from_sequence("ATCG", Some(""), None).is_err());
    }

    #[test]
    fn test_quality_round_trip_through_record() {
        let record = Record::from_sequence("ATCG", Some("!I#$"), Some("read1")).unwrap();
        assert_eq!(record.quality().unwrap(), "!I#$");
        assert_eq!(
            record.quality_scores().unwrap().collect::<Vec<_>>(),
            vec![0, 40, 2, 3]
        );
        assert!((record.average_quality() - 11.25).abs() < 1e-9);
        assert_eq!(record.to_string(), "ATCG\t!I#$");
    }

    #[test]
    fn test_fasta_and_fastq() {
        let record = Record::from_sequence("ATCG", Some("!I#$"), Some("read1")).unwrap();
        assert_eq!(record.fasta().unwrap(), ">read1\nATCG");
        assert_eq!(record.fastq().unwrap(), "@read1\nATCG\n+\n!I#$");

        let no_quality = Record::from_sequence("ATCG", None, Some("read1")).unwrap();
        assert_eq!(
            no_quality.fastq().unwrap_err(),
            CodecError::MissingQuality
        );

        let anonymous = Record::from_sequence("ATCG", None, None).unwrap();
        let fasta = anonymous.fasta().unwrap();
        assert!(fasta.starts_with('>'));
        assert!(fasta.ends_with("\nATCG"));
    }

    #[test]
    fn test_explicit_override_updates_stored_variant() {
        let mut record = Record::from_sequence("ACGT", None, None).unwrap();
        assert_eq!(record.encoding(), Some(Encoding::Bit2));

        let bytes = record
            .encode_with("ACGT", Some(Encoding::Bit4))
            .unwrap();
        assert_eq!(record.encoding(), Some(Encoding::Bit4));
        assert_eq!(record.decode_with(&bytes, None).unwrap(), "ACGT");
        assert_eq!(record.encoding(), Some(Encoding::Bit4));
    }
}
