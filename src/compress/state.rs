//! Compression state management
//!
//! Drives one encoding pass over the source: walks the compressible region
//! from its last byte down to the dictionary boundary, choosing a match or a
//! literal at every step.

use super::encoder::CodeWriter;
use super::bits::ByteSink;
use crate::common::DICTIONARY_SIZE;
use crate::{CompressionStats, CrilaylaError, Result};

/// Per-call encoder state over an immutable source window
#[derive(Debug)]
pub struct CompressState<'a> {
    /// Whole source, dictionary region included
    pub(crate) source: &'a [u8],
    /// Number of source bytes not yet encoded; the next position is `end - 1`
    end: usize,
    stats: CompressionStats,
}

impl<'a> CompressState<'a> {
    /// Create a state for `source`, validating its size
    pub fn new(source: &'a [u8]) -> Result<Self> {
        if source.len() < DICTIONARY_SIZE {
            return Err(CrilaylaError::SourceTooSmall(source.len()));
        }
        if u32::try_from(source.len() - DICTIONARY_SIZE).is_err() {
            return Err(CrilaylaError::SourceTooLarge(source.len()));
        }

        Ok(Self {
            source,
            end: source.len(),
            stats: CompressionStats::default(),
        })
    }

    /// Compressible bytes still to be encoded
    pub fn remaining(&self) -> usize {
        self.end - DICTIONARY_SIZE
    }

    /// Length of the compressible region
    pub fn uncompressed_size(&self) -> usize {
        self.source.len() - DICTIONARY_SIZE
    }

    /// Encode every remaining position into `writer`
    ///
    /// The position strictly decreases on each step, by one for a literal or by
    /// the match length, so the loop runs at most `remaining()` times.
    pub fn encode<S: ByteSink>(mut self, writer: &mut CodeWriter<S>) -> Result<CompressionStats> {
        while self.end > DICTIONARY_SIZE {
            let pos = self.end - 1;
            let found = self.find_match(pos);

            if found.is_match() {
                writer.encode_match(found)?;
                self.end -= found.length;
                self.stats.match_count += 1;
                self.stats.longest_match = self.stats.longest_match.max(found.length);
            } else {
                writer.encode_literal(self.source[pos])?;
                self.end -= 1;
                self.stats.literal_count += 1;
            }
        }

        self.stats.bytes_processed = self.uncompressed_size();
        Ok(self.stats)
    }
}
