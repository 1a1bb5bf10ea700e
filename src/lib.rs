//! CRILAYLA - Rust encoder for the CRI Middleware compression container
//!
//! CRILAYLA is the compression format found inside CPK archives and other CRI
//! Middleware data. A container holds a 16-byte header, a bitstream that a
//! decoder unpacks from its last byte toward its first, and a raw copy of the
//! first 0x100 bytes of the original data which seeds the decoder output.
//!
//! # Container layout
//!
//! | offset         | size        | content                                   |
//! |----------------|-------------|-------------------------------------------|
//! | 0              | 8           | magic `"CRILAYLA"`                        |
//! | 8              | 4           | LE u32: source length minus 0x100         |
//! | 12             | 4           | LE u32: payload length (multiple of 4)    |
//! | 16             | payload     | packed bitstream                          |
//! | 16 + payload   | 0x100       | first 0x100 bytes of the source           |
//!
//! Only compression is provided; the format is fixed and has no tuning knobs.
//!
//! # Example
//!
//! ```
//! use crilayla::{compress_bytes, compress_into, max_compressed_len, CrilaylaHeader};
//!
//! let data = vec![0u8; 0x400];
//! let compressed = compress_bytes(&data)?;
//! let header = CrilaylaHeader::parse(&compressed)?;
//! assert_eq!(header.uncompressed_size, 0x300);
//!
//! // Or compress into a caller-provided buffer
//! let mut dest = vec![0u8; max_compressed_len(data.len())];
//! let written = compress_into(&data, &mut dest)?;
//! assert_eq!(&dest[..written], &compressed[..]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod common;
pub mod compress;
pub mod error;

// Re-export commonly used types
pub use common::{
    is_crilayla, CompressionStats, CrilaylaError, CrilaylaHeader, Result, CRILAYLA_MAGIC,
    DICTIONARY_SIZE, HEADER_SIZE,
};
pub use compress::{compress_into, compress_with_stats, max_compressed_len, CrilaylaWriter};

/// Compress data into a CRILAYLA container
///
/// # Arguments
/// * `data` - The data to compress; at least 0x100 bytes
///
/// # Returns
/// A vector containing the complete container
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>> {
    compress::compress_bytes(data)
}
