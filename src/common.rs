//! Common types and constants for the CRILAYLA container format
//!
//! This module defines the format constants, the container header, the error
//! type and the statistics shared by the encoder components.

use thiserror::Error;

/// Magic tag at the start of every container
pub const CRILAYLA_MAGIC: [u8; 8] = *b"CRILAYLA";

/// Size of the fixed container header (magic + two u32 words)
pub const HEADER_SIZE: usize = 0x10;

/// Size of the uncompressed dictionary region at the start of the source
pub const DICTIONARY_SIZE: usize = 0x100;

/// Number of candidate positions searched per encoding step
pub const WINDOW_SIZE: usize = 0x2000;

/// Width of the distance field of a match code
pub const DISTANCE_BITS: u32 = 13;

/// Largest encodable match distance
pub const MAX_DISTANCE: usize = (1 << DISTANCE_BITS) - 1;

/// Minimum match length; shorter runs are emitted as literals
pub const MIN_MATCH_LENGTH: usize = 3;

/// Distance bias: candidate `i` for position `n` is stored as `i - n - MATCH_DISTANCE_BIAS`
pub const MATCH_DISTANCE_BIAS: usize = 3;

/// Zero bytes appended after the bitstream before alignment padding
pub const TERMINATOR_SIZE: usize = 2;

/// Payload length alignment
pub const PAYLOAD_ALIGNMENT: usize = 4;

/// Error type for CRILAYLA operations
#[derive(Debug, Error)]
pub enum CrilaylaError {
    /// Source shorter than the dictionary region
    #[error("Source too small: {0} bytes (need at least 256)")]
    SourceTooSmall(usize),

    /// Compressible region does not fit the u32 header field
    #[error("Source too large: {0} bytes")]
    SourceTooLarge(usize),

    /// Destination cannot hold the container
    #[error("Destination buffer too small: capacity {capacity} bytes, need {required}")]
    DestinationTooSmall {
        /// Capacity of the caller buffer
        capacity: usize,
        /// Bytes needed to make progress (a lower bound while the stream is still growing)
        required: usize,
    },

    /// Match distance does not fit the 13-bit field
    #[error("Invalid match distance: {0}")]
    InvalidDistance(usize),

    /// Match length below the minimum
    #[error("Invalid match length: {0}")]
    InvalidLength(usize),

    /// Data is not a CRILAYLA container
    #[error("Invalid CRILAYLA header")]
    InvalidFormat,

    /// Unexpected end of input
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CRILAYLA operations
pub type Result<T> = std::result::Result<T, CrilaylaError>;

/// The 16-byte container header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrilaylaHeader {
    /// Length of the compressible region (source length minus the dictionary)
    pub uncompressed_size: u32,
    /// Length of the packed bitstream, always a multiple of 4
    pub payload_size: u32,
}

impl CrilaylaHeader {
    /// Serialize the header: magic followed by both sizes in little-endian order
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[..8].copy_from_slice(&CRILAYLA_MAGIC);
        bytes[8..12].copy_from_slice(&self.uncompressed_size.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.payload_size.to_le_bytes());
        bytes
    }

    /// Parse a header from the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_SIZE {
            return Err(CrilaylaError::UnexpectedEof);
        }
        if data[..8] != CRILAYLA_MAGIC {
            return Err(CrilaylaError::InvalidFormat);
        }

        let mut word = [0u8; 4];
        word.copy_from_slice(&data[8..12]);
        let uncompressed_size = u32::from_le_bytes(word);
        word.copy_from_slice(&data[12..16]);
        let payload_size = u32::from_le_bytes(word);

        Ok(Self {
            uncompressed_size,
            payload_size,
        })
    }

    /// Total container length described by this header
    pub fn container_len(&self) -> usize {
        HEADER_SIZE + self.payload_size as usize + DICTIONARY_SIZE
    }
}

/// Check whether `data` looks like a CRILAYLA container
pub fn is_crilayla(data: &[u8]) -> bool {
    data.len() > HEADER_SIZE && data.starts_with(&CRILAYLA_MAGIC)
}

/// Statistics for one compression call
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompressionStats {
    /// Number of literal bytes encoded
    pub literal_count: usize,
    /// Number of matches encoded
    pub match_count: usize,
    /// Longest match found
    pub longest_match: usize,
    /// Compressible bytes consumed
    pub bytes_processed: usize,
    /// Payload length written (after terminator and alignment)
    pub payload_len: usize,
}
