//! Container assembly
//!
//! The bitstream is first packed into the tail of the destination, growing
//! toward the header. Once its length is known it is moved down behind the
//! 16-byte header and followed by the raw dictionary region.

use super::bits::TailCursor;
use super::encoder::CodeWriter;
use super::state::CompressState;
use crate::common::{CrilaylaHeader, DICTIONARY_SIZE, HEADER_SIZE};
use crate::{CompressionStats, CrilaylaError, Result};

/// Compress `source` into `dest`, returning the container length and statistics
///
/// On failure the contents of `dest` are unspecified.
pub(crate) fn compress_frame(source: &[u8], dest: &mut [u8]) -> Result<(usize, CompressionStats)> {
    let state = CompressState::new(source)?;
    let uncompressed_size = state.uncompressed_size();
    let capacity = dest.len();

    let mut writer = CodeWriter::new(TailCursor::new(dest, HEADER_SIZE));
    let mut stats = state.encode(&mut writer)?;
    let start = writer.finish()?.position();

    let payload_len = capacity - start;
    let total = HEADER_SIZE + payload_len + DICTIONARY_SIZE;
    if total > capacity {
        return Err(CrilaylaError::DestinationTooSmall {
            capacity,
            required: total,
        });
    }

    let header = CrilaylaHeader {
        uncompressed_size: u32::try_from(uncompressed_size)
            .map_err(|_| CrilaylaError::SourceTooLarge(source.len()))?,
        payload_size: u32::try_from(payload_len)
            .map_err(|_| CrilaylaError::SourceTooLarge(source.len()))?,
    };

    dest.copy_within(start.., HEADER_SIZE);
    dest[..HEADER_SIZE].copy_from_slice(&header.to_bytes());
    dest[HEADER_SIZE + payload_len..total].copy_from_slice(&source[..DICTIONARY_SIZE]);

    stats.payload_len = payload_len;
    log::debug!(
        "CRILAYLA: {} -> {} bytes ({} literals, {} matches, longest {})",
        source.len(),
        total,
        stats.literal_count,
        stats.match_count,
        stats.longest_match
    );

    Ok((total, stats))
}
