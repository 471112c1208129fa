//! Run-length codec for per-base quality scores.
//!
//! Scores are stored as `(count, delta)` byte pairs relative to the minimum
//! score of the stream, one pair per maximal run of equal scores. The run
//! length is capped by a value derived from the score range (see
//! [`run_length_cap`]), not by the byte-storage ceiling.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Phred+33, the Illumina 1.8+/Sanger convention.
pub const DEFAULT_ASCII_BASE: u8 = 33;

/// A run-length-encoded quality stream plus the metadata needed to decode it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedQuality {
    bytes: Vec<u8>,
    minimum: u8,
    ascii_base: u8,
}

/// Run-length ceiling for a stream whose scores span `range` distinct values.
///
/// The cap is `2^ceil(sqrt(range)) - 1`, clamped to 255 because counts are
/// stored in a single byte. Deriving the ceiling from the data's value range
/// rather than the storage width looks like an unintended coupling, but it
/// changes the emitted bytes, so it is kept bit-exact.
fn run_length_cap(range: u32) -> u8 {
    let bitsize = (range as f64).sqrt().ceil() as u32;
    ((1u32 << bitsize) - 1).min(255) as u8
}

/// Encode a quality string into `(count, delta)` pairs.
///
/// Each character represents `ord(char) - ascii_base`. Characters below the
/// ASCII base, or more than 255 above it, are rejected; so is the empty
/// string, which has no minimum.
pub fn encode_quality(quality: &str, ascii_base: u8) -> Result<EncodedQuality, CodecError> {
    let scores = quality
        .chars()
        .map(|c| {
            (c as u32)
                .checked_sub(ascii_base as u32)
                .and_then(|score| u8::try_from(score).ok())
                .ok_or(CodecError::QualityOutOfRange {
                    found: c,
                    ascii_base,
                })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    let (Some(&minimum), Some(&maximum)) = (scores.iter().min(), scores.iter().max()) else {
        return Err(CodecError::EmptyQuality);
    };
    let cap = run_length_cap(maximum as u32 - minimum as u32 + 1);

    let mut bytes = Vec::new();
    let mut count = 0u8;
    let mut prev: Option<u8> = None;
    for score in scores {
        let delta = score - minimum;
        match prev {
            None => {
                prev = Some(delta);
                count = 1;
            }
            Some(p) if delta != p => {
                bytes.push(count);
                bytes.push(p);
                prev = Some(delta);
                count = 1;
            }
            Some(_) if count < cap => count += 1,
            Some(p) => {
                bytes.push(count);
                bytes.push(p);
                prev = Some(delta);
                count = 1;
            }
        }
    }
    if let Some(p) = prev {
        bytes.push(count);
        bytes.push(p);
    }

    Ok(EncodedQuality {
        bytes,
        minimum,
        ascii_base,
    })
}

/// Re-expand a `(count, delta)` stream into a quality string.
pub fn decode_quality(bytes: &[u8], minimum: u8, ascii_base: u8) -> String {
    expand_scores(bytes, minimum)
        .map(|score| score_to_char(score, ascii_base))
        .collect()
}

/// Lazy, restartable iterator over the decoded raw scores.
fn expand_scores(bytes: &[u8], minimum: u8) -> impl Iterator<Item = u8> + '_ {
    bytes.chunks_exact(2).flat_map(move |pair| {
        std::iter::repeat(pair[1].saturating_add(minimum)).take(pair[0] as usize)
    })
}

fn score_to_char(score: u8, ascii_base: u8) -> char {
    // score + base <= 510, always a valid scalar value.
    char::from_u32(score as u32 + ascii_base as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl EncodedQuality {
    /// Reassemble a stream received from elsewhere (the encoded bytes and
    /// minimum are the wire contract; the ASCII base is a convention).
    pub fn from_parts(bytes: Vec<u8>, minimum: u8, ascii_base: u8) -> Self {
        Self {
            bytes,
            minimum,
            ascii_base,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn minimum(&self) -> u8 {
        self.minimum
    }

    pub fn ascii_base(&self) -> u8 {
        self.ascii_base
    }

    /// Decoded raw scores, produced lazily.
    pub fn scores(&self) -> impl Iterator<Item = u8> + '_ {
        expand_scores(&self.bytes, self.minimum)
    }

    /// Decoded quality string.
    pub fn decode(&self) -> String {
        decode_quality(&self.bytes, self.minimum, self.ascii_base)
    }

    /// Arithmetic mean of the decoded raw scores.
    pub fn average(&self) -> f64 {
        let (sum, n) = self
            .scores()
            .fold((0u64, 0u64), |(sum, n), score| (sum + score as u64, n + 1));
        if n == 0 {
            f64::NAN
        } else {
            sum as f64 / n as f64
        }
    }

    /// Number of scores in the stream.
    pub fn len(&self) -> usize {
        self.bytes
            .chunks_exact(2)
            .map(|pair| pair[0] as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
