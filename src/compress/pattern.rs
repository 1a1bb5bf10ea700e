//! Match finding for CRILAYLA compression
//!
//! The source is encoded from its last byte toward the dictionary boundary, so
//! match material lies at higher offsets: bytes already emitted, which a
//! decoder rebuilding the buffer tail-first will have produced.

use super::state::CompressState;
use crate::common::{DICTIONARY_SIZE, MATCH_DISTANCE_BIAS, MIN_MATCH_LENGTH, WINDOW_SIZE};

/// Result of a match search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    /// Number of matching bytes (0 if no match)
    pub length: usize,
    /// Biased distance: candidate offset minus position minus 3
    pub distance: usize,
}

impl MatchResult {
    /// Create a new match result
    pub fn new(length: usize, distance: usize) -> Self {
        Self { length, distance }
    }

    /// Create a "no match" result
    pub fn no_match() -> Self {
        Self {
            length: 0,
            distance: 0,
        }
    }

    /// Check if this match is long enough to be encoded
    pub fn is_match(&self) -> bool {
        self.length >= MIN_MATCH_LENGTH
    }
}

impl CompressState<'_> {
    /// Find the longest backward match for position `pos`
    ///
    /// Candidates `i` are tried in increasing order over
    /// `pos + 3 .. min(pos + 3 + 0x2000, len)`, comparing `source[pos - k]` with
    /// `source[i - k]`. The first candidate reaching the maximal length wins.
    pub fn find_match(&self, pos: usize) -> MatchResult {
        debug_assert!(pos >= DICTIONARY_SIZE && pos < self.source.len());

        // Never consume dictionary bytes
        let max_length = pos + 1 - DICTIONARY_SIZE;
        let first = pos + MATCH_DISTANCE_BIAS;
        let window_end = (first + WINDOW_SIZE).min(self.source.len());

        let mut best = MatchResult::no_match();
        for candidate in first..window_end {
            let length = self.match_length(pos, candidate, max_length);
            if length > best.length {
                best = MatchResult::new(length, candidate - first);

                // Nothing later can be strictly longer
                if length == max_length {
                    break;
                }
            }
        }

        best
    }

    /// Count equal bytes walking backward from `pos` and `candidate`
    fn match_length(&self, pos: usize, candidate: usize, max_length: usize) -> usize {
        let source = self.source;
        (0..max_length)
            .take_while(|&k| source[pos - k] == source[candidate - k])
            .count()
    }
}
