//! Bit packing for the CRILAYLA bitstream
//!
//! Codes are appended MSB-first to a pending-bit accumulator. Whole bytes are
//! drained into a [`ByteSink`] as soon as eight bits are pending. The encoder
//! writes the container payload from the end of the destination toward its
//! start, which [`TailCursor`] models without any pointer arithmetic.

use crate::common::{PAYLOAD_ALIGNMENT, TERMINATOR_SIZE};
use crate::{CrilaylaError, Result};

/// Destination for packed bytes
pub trait ByteSink {
    /// Append one byte
    fn put(&mut self, byte: u8) -> Result<()>;

    /// Number of bytes appended so far
    fn written(&self) -> usize;
}

impl ByteSink for Vec<u8> {
    fn put(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }

    fn written(&self) -> usize {
        self.len()
    }
}

/// Writes bytes backward into a caller buffer, from the last index toward `floor`
#[derive(Debug)]
pub struct TailCursor<'a> {
    buffer: &'a mut [u8],
    cursor: usize,
    floor: usize,
}

impl<'a> TailCursor<'a> {
    /// Create a cursor positioned past the end of `buffer`
    ///
    /// Bytes are never written below index `floor`.
    pub fn new(buffer: &'a mut [u8], floor: usize) -> Self {
        let cursor = buffer.len();
        Self {
            buffer,
            cursor,
            floor,
        }
    }

    /// Index of the most recently written byte (the start of the written tail)
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl ByteSink for TailCursor<'_> {
    fn put(&mut self, byte: u8) -> Result<()> {
        if self.cursor <= self.floor {
            return Err(CrilaylaError::DestinationTooSmall {
                capacity: self.buffer.len(),
                required: self.floor.max(self.buffer.len()) + 1,
            });
        }
        self.cursor -= 1;
        self.buffer[self.cursor] = byte;
        Ok(())
    }

    fn written(&self) -> usize {
        self.buffer.len() - self.cursor
    }
}

/// Pending-bit accumulator
///
/// Holds fewer than eight bits between calls; a single push never exceeds 32 bits.
#[derive(Debug, Default, Clone)]
pub struct BitAccumulator {
    pending: u64,
    count: u32,
}

impl BitAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits waiting for a full byte
    pub fn pending_bits(&self) -> u32 {
        self.count
    }

    /// Append the low `width` bits of `value`, MSB first, draining full bytes into `sink`
    pub fn push<S: ByteSink + ?Sized>(&mut self, sink: &mut S, value: u32, width: u32) -> Result<()> {
        debug_assert!(width <= 32);
        debug_assert!(u64::from(value) < 1u64 << width);

        self.pending = (self.pending << width) | u64::from(value);
        self.count += width;

        while self.count >= 8 {
            self.count -= 8;
            sink.put((self.pending >> self.count) as u8)?;
            self.pending &= (1u64 << self.count) - 1;
        }

        Ok(())
    }

    /// Right-pad any pending bits with zeros and emit them as a final byte
    pub fn flush_partial<S: ByteSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        if self.count != 0 {
            sink.put((self.pending << (8 - self.count)) as u8)?;
            self.pending = 0;
            self.count = 0;
        }
        Ok(())
    }

    /// Terminate the stream: flush, append the zero terminator, then pad to the payload alignment
    pub fn finish<S: ByteSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        self.flush_partial(sink)?;

        for _ in 0..TERMINATOR_SIZE {
            sink.put(0)?;
        }
        while sink.written() % PAYLOAD_ALIGNMENT != 0 {
            sink.put(0)?;
        }

        Ok(())
    }
}
