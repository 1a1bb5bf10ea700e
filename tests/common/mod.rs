//! Reference CRILAYLA decoder used to verify encoder output
//!
//! Decodes the way CPK readers do: the payload is consumed from its last byte
//! toward its first, bits MSB-first, and output is produced from the end of
//! the buffer toward the dictionary copied in from the trailer.

#![allow(dead_code)]

use crilayla::{CrilaylaHeader, DICTIONARY_SIZE, HEADER_SIZE};

/// Length field widths; an all-ones value continues to the next width
const LENGTH_WIDTHS: [u32; 4] = [2, 3, 5, 8];

struct ReverseBitReader<'a> {
    input: &'a [u8],
    next: usize,
    pool: u8,
    bits_left: u32,
}

impl<'a> ReverseBitReader<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            next: input.len(),
            pool: 0,
            bits_left: 0,
        }
    }

    fn read(&mut self, mut count: u32) -> Result<usize, String> {
        let mut value = 0usize;
        while count > 0 {
            if self.bits_left == 0 {
                if self.next == 0 {
                    return Err("payload exhausted".to_string());
                }
                self.next -= 1;
                self.pool = self.input[self.next];
                self.bits_left = 8;
            }

            let take = count.min(self.bits_left);
            let shifted = u32::from(self.pool) >> (self.bits_left - take);
            value = (value << take) | (shifted & ((1 << take) - 1)) as usize;
            self.bits_left -= take;
            count -= take;
        }
        Ok(value)
    }
}

/// Decode a complete container back into the original source
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, String> {
    let header = CrilaylaHeader::parse(input).map_err(|e| e.to_string())?;
    let payload_len = header.payload_size as usize;
    if input.len() != header.container_len() {
        return Err(format!(
            "container is {} bytes, header describes {}",
            input.len(),
            header.container_len()
        ));
    }

    let payload = &input[HEADER_SIZE..HEADER_SIZE + payload_len];
    let dictionary = &input[HEADER_SIZE + payload_len..];

    let mut output = vec![0u8; DICTIONARY_SIZE + header.uncompressed_size as usize];
    output[..DICTIONARY_SIZE].copy_from_slice(dictionary);

    let mut reader = ReverseBitReader::new(payload);
    let mut pos = output.len();
    while pos > DICTIONARY_SIZE {
        if reader.read(1)? == 1 {
            let offset = reader.read(13)? + 3;
            let mut length = 3;
            let mut level = 0;
            loop {
                let width = LENGTH_WIDTHS[level];
                let value = reader.read(width)?;
                length += value;
                if value != (1 << width) - 1 {
                    break;
                }
                if level + 1 < LENGTH_WIDTHS.len() {
                    level += 1;
                }
            }

            if length > pos - DICTIONARY_SIZE {
                return Err(format!("match of {length} overruns output at {pos}"));
            }
            for _ in 0..length {
                pos -= 1;
                let from = pos + offset;
                if from >= output.len() {
                    return Err(format!("match source {from} out of range"));
                }
                output[pos] = output[from];
            }
        } else {
            pos -= 1;
            output[pos] = reader.read(8)? as u8;
        }
    }

    Ok(output)
}

/// Source whose every 3-byte substring is distinct, so no match can be found
pub fn match_free_source() -> Vec<u8> {
    (0..=255u8).flat_map(|t| [0, t]).collect()
}

/// Lorem-ipsum style text of `size` bytes
pub fn text_source(size: usize) -> Vec<u8> {
    let base = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
    base.iter().copied().cycle().take(size).collect()
}

/// Deterministic pseudo-random bytes
pub fn noise_source(size: usize, seed: u32) -> Vec<u8> {
    let mut x = seed;
    (0..size)
        .map(|_| {
            x = x.wrapping_mul(1664525).wrapping_add(1013904223);
            (x >> 24) as u8
        })
        .collect()
}
