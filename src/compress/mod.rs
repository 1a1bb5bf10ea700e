//! CRILAYLA compression
//!
//! One pass over the source, from its last byte down to the dictionary
//! boundary: a brute-force backward match search feeds a tiered bit code, the
//! packed bytes are written into the destination tail, and the container is
//! assembled in place.

mod bits;
mod encoder;
mod frame;
mod pattern;
mod state;
mod writer;

pub use bits::{BitAccumulator, ByteSink, TailCursor};
pub use encoder::CodeWriter;
pub use pattern::MatchResult;
pub use state::CompressState;
pub use writer::CrilaylaWriter;

use crate::common::{DICTIONARY_SIZE, HEADER_SIZE, PAYLOAD_ALIGNMENT, TERMINATOR_SIZE};
use crate::{CompressionStats, Result};

/// Destination capacity that always suffices for a source of `source_len` bytes
///
/// A literal costs 9 bits and every match costs fewer bits than the literals it
/// replaces, so the all-literal stream is the worst case:
/// `16 + 0x100 + align4(ceil(9 * (len - 0x100) / 8) + 2)`.
pub const fn max_compressed_len(source_len: usize) -> usize {
    let region = source_len.saturating_sub(DICTIONARY_SIZE);
    let stream = (region * 9).div_ceil(8) + TERMINATOR_SIZE;
    let payload = stream.div_ceil(PAYLOAD_ALIGNMENT) * PAYLOAD_ALIGNMENT;
    HEADER_SIZE + payload + DICTIONARY_SIZE
}

/// Compress `source` into `dest`, returning the number of bytes written
///
/// The container occupies `dest[..n]`. If `dest` is smaller than the container
/// needs, `DestinationTooSmall` is returned; [`max_compressed_len`] is always
/// large enough.
pub fn compress_into(source: &[u8], dest: &mut [u8]) -> Result<usize> {
    frame::compress_frame(source, dest).map(|(len, _)| len)
}

/// Compress `source` into a newly allocated container, with statistics
pub fn compress_with_stats(source: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
    let mut output = vec![0u8; max_compressed_len(source.len())];
    let (len, stats) = frame::compress_frame(source, &mut output)?;
    output.truncate(len);
    Ok((output, stats))
}

/// Convenience function to compress data in memory
pub fn compress_bytes(source: &[u8]) -> Result<Vec<u8>> {
    compress_with_stats(source).map(|(output, _)| output)
}
