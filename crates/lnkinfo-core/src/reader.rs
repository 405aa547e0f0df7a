//! Bounds-checked little-endian cursor over an in-memory buffer.
//!
//! Every read either consumes exactly the requested number of bytes or fails
//! with [`Error::UnexpectedEof`]; nothing is clamped or zero-filled. The
//! cursor only moves backwards through an explicit [`BoundedReader::seek`].

use crate::error::{Error, Result};

/// Cursor over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct BoundedReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BoundedReader<'a> {
    /// Creates a reader positioned at the start of `data`
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current absolute cursor position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the underlying buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes between the cursor and the end of the buffer
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Reads `n` bytes and advances past them
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| Error::unexpected_eof(self.pos, n, self.remaining()))?;

        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Reads a fixed-size array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Advances the cursor by `n` bytes without looking at them
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.read_bytes(n).map(|_| ())
    }

    /// Moves the cursor to an absolute position.
    ///
    /// Seeking to exactly the end of the buffer is allowed.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(Error::seek_out_of_range(position, self.data.len()));
        }
        self.pos = position;
        Ok(())
    }

    /// Moves the cursor to `base + offset`, failing on overflow or out-of-range targets
    pub fn seek_relative_to(&mut self, base: usize, offset: usize) -> Result<()> {
        let position = base
            .checked_add(offset)
            .ok_or_else(|| Error::seek_out_of_range(usize::MAX, self.data.len()))?;
        self.seek(position)
    }

    /// Reads a single byte
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Reads a little-endian `u16`
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Reads a little-endian `u32`
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a little-endian `i32`
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Reads a little-endian `u64`
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Reads a NUL-terminated narrow string and consumes the terminator.
    ///
    /// The search stops at the end of the buffer; a missing terminator is an
    /// [`Error::UnexpectedEof`] and leaves the cursor where it was.
    pub fn read_cstring(&mut self) -> Result<String> {
        let rest = &self.data[self.pos..];
        let len = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| Error::unexpected_eof(self.pos, rest.len() + 1, rest.len()))?;

        let bytes = self.read_bytes(len + 1)?;
        Ok(String::from_utf8_lossy(&bytes[..len]).into_owned())
    }
}
