//! CrilaylaWriter - buffering compression writer
//!
//! The encoder needs the whole source resident, so this writer collects
//! everything written to it and produces the container on `finish`.

use super::compress_bytes;
use crate::Result;
use std::io::Write;

/// Compression writer implementing the Write trait
#[derive(Debug)]
pub struct CrilaylaWriter<W: Write> {
    writer: Option<W>,
    input_buffer: Vec<u8>,
}

impl<W: Write> CrilaylaWriter<W> {
    /// Create a new CrilaylaWriter
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            input_buffer: Vec::new(),
        }
    }

    /// Bytes buffered so far
    pub fn buffered_len(&self) -> usize {
        self.input_buffer.len()
    }

    /// Compress the buffered data, write the container and return the inner writer
    pub fn finish(mut self) -> Result<W> {
        let data = std::mem::take(&mut self.input_buffer);
        match self.writer.take() {
            Some(mut writer) => {
                Self::write_container(&mut writer, &data)?;
                Ok(writer)
            }
            None => Err(std::io::Error::other("writer already finished").into()),
        }
    }

    fn write_container(writer: &mut W, data: &[u8]) -> Result<()> {
        let compressed = compress_bytes(data)?;
        writer.write_all(&compressed)?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Write for CrilaylaWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.input_buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    /// Flushes the inner writer only; nothing is emitted before `finish`
    fn flush(&mut self) -> std::io::Result<()> {
        match self.writer.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        }
    }
}

impl<W: Write> Drop for CrilaylaWriter<W> {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            // Try to finish compression, but ignore errors in drop
            let _ = Self::write_container(&mut writer, &self.input_buffer);
        }
    }
}
