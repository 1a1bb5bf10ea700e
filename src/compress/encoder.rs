//! Literal and match code emission
//!
//! Every decision starts with a one-bit flag. A literal is `0` followed by the
//! byte. A match is `1`, the 13-bit distance, then a length code from a ladder
//! of tiers, where an all-ones field escapes to the next tier:
//!
//! | length  | code                                 |
//! |---------|--------------------------------------|
//! | 3..=5   | 2 bits `length - 3`                  |
//! | 6..=12  | `11` + 3 bits `length - 6`           |
//! | 13..=43 | `11111` + 5 bits `length - 13`       |
//! | 44..    | ten ones + `0xFF`* + remainder byte  |

use super::bits::{BitAccumulator, ByteSink};
use super::pattern::MatchResult;
use crate::common::{DISTANCE_BITS, MAX_DISTANCE, MIN_MATCH_LENGTH};
use crate::{CrilaylaError, Result};

/// First length of the 3-bit tier
const TIER2_BASE: usize = 6;

/// First length of the 5-bit tier
const TIER3_BASE: usize = 13;

/// First length of the byte-continuation tier
const TIER4_BASE: usize = 44;

/// Continuation byte meaning "255 more, keep reading"
const CONTINUATION: usize = 0xFF;

/// Writes literal and match codes through a bit accumulator into a sink
#[derive(Debug)]
pub struct CodeWriter<S> {
    sink: S,
    bits: BitAccumulator,
}

impl<S: ByteSink> CodeWriter<S> {
    /// Create a writer over `sink`
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            bits: BitAccumulator::new(),
        }
    }

    fn output_bits(&mut self, value: u32, width: u32) -> Result<()> {
        self.bits.push(&mut self.sink, value, width)
    }

    /// Encode a literal byte (9 bits)
    pub fn encode_literal(&mut self, byte: u8) -> Result<()> {
        self.output_bits(u32::from(byte), 9)
    }

    /// Encode a match: flag, distance, then the tiered length code
    pub fn encode_match(&mut self, found: MatchResult) -> Result<()> {
        let MatchResult { length, distance } = found;
        if length < MIN_MATCH_LENGTH {
            return Err(CrilaylaError::InvalidLength(length));
        }
        if distance > MAX_DISTANCE {
            return Err(CrilaylaError::InvalidDistance(distance));
        }

        self.output_bits(1, 1)?;
        self.output_bits(distance as u32, DISTANCE_BITS)?;

        if length < TIER2_BASE {
            self.output_bits((length - MIN_MATCH_LENGTH) as u32, 2)
        } else if length < TIER3_BASE {
            self.output_bits(0b11, 2)?;
            self.output_bits((length - TIER2_BASE) as u32, 3)
        } else if length < TIER4_BASE {
            self.output_bits(0b11111, 5)?;
            self.output_bits((length - TIER3_BASE) as u32, 5)
        } else {
            self.output_bits(0x3FF, 10)?;

            let mut rest = length - TIER4_BASE;
            if rest >= CONTINUATION {
                log::trace!(
                    "length {} needs {} continuation bytes",
                    length,
                    rest / CONTINUATION
                );
            }
            while rest >= CONTINUATION {
                self.output_bits(CONTINUATION as u32, 8)?;
                rest -= CONTINUATION;
            }
            self.output_bits(rest as u32, 8)
        }
    }

    /// Flush pending bits, terminate and align the stream, and hand back the sink
    pub fn finish(mut self) -> Result<S> {
        self.bits.finish(&mut self.sink)?;
        Ok(self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Emit one match and return the bytes with the final partial byte padded
    fn match_bytes(length: usize, distance: usize) -> Vec<u8> {
        let mut writer = CodeWriter::new(Vec::new());
        writer
            .encode_match(MatchResult::new(length, distance))
            .unwrap();
        writer.bits.flush_partial(&mut writer.sink).unwrap();
        writer.sink
    }

    #[test]
    fn test_literal_code() {
        let mut writer = CodeWriter::new(Vec::new());
        writer.encode_literal(0xAB).unwrap();
        writer.bits.flush_partial(&mut writer.sink).unwrap();
        // 0 10101011 -> 0101_0101 1000_0000
        assert_eq!(writer.sink, vec![0x55, 0x80]);
    }

    #[test]
    fn test_distance_field() {
        // 1 1111111111111 00
        assert_eq!(match_bytes(3, MAX_DISTANCE), vec![0xFF, 0xFC]);
    }

    #[test]
    fn test_tier_boundaries() {
        // Flag and zero distance fill 14 bits: 1000_0000 0000_00..
        assert_eq!(match_bytes(3, 0), vec![0x80, 0x00]);
        assert_eq!(match_bytes(5, 0), vec![0x80, 0x02]);
        assert_eq!(match_bytes(6, 0), vec![0x80, 0x03, 0x00]);
        assert_eq!(match_bytes(12, 0), vec![0x80, 0x03, 0xC0]);
        assert_eq!(match_bytes(13, 0), vec![0x80, 0x03, 0xE0]);
        assert_eq!(match_bytes(43, 0), vec![0x80, 0x03, 0xFE]);
        assert_eq!(match_bytes(44, 0), vec![0x80, 0x03, 0xFF, 0x00]);
        assert_eq!(match_bytes(298, 0), vec![0x80, 0x03, 0xFF, 0xFE]);
        assert_eq!(match_bytes(299, 0), vec![0x80, 0x03, 0xFF, 0xFF, 0x00]);
        assert_eq!(
            match_bytes(44 + 2 * 255 + 7, 0),
            vec![0x80, 0x03, 0xFF, 0xFF, 0xFF, 0x07]
        );
    }

    #[test]
    fn test_invalid_matches_fail_loudly() {
        let mut writer = CodeWriter::new(Vec::new());
        assert!(matches!(
            writer.encode_match(MatchResult::new(2, 0)),
            Err(CrilaylaError::InvalidLength(2))
        ));
        assert!(matches!(
            writer.encode_match(MatchResult::new(3, 0x2000)),
            Err(CrilaylaError::InvalidDistance(0x2000))
        ));
        assert!(writer.sink.is_empty());
    }

    #[test]
    fn test_finish_returns_aligned_sink() {
        let mut writer = CodeWriter::new(Vec::new());
        writer.encode_literal(0).unwrap();
        let out = writer.finish().unwrap();
        assert_eq!(out, vec![0, 0, 0, 0]);
    }
}
