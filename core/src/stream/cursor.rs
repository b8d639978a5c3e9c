use std::fmt;

use crate::codec::{ByteSource, FloatCodec};
use crate::types::{BinaryError, CodecConfig, Result};
use crate::utils::fmt_bytes;

/// Owned buffer plus a single read offset.
///
/// Invariant: `0 <= offset <= buffer.len()`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stream {
    buffer: Vec<u8>,
    offset: usize,
    pub(crate) floats: FloatCodec,
}

impl Stream {
    /// Empty stream using the detected host byte order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty stream bound to an explicit codec configuration.
    pub fn with_config(config: CodecConfig) -> Self {
        Self {
            buffer: Vec::new(),
            offset: 0,
            floats: FloatCodec::new(config),
        }
    }

    /// Stream pre-loaded with `buffer`, reading from `offset`.
    ///
    /// An offset past the end is clamped to the buffer length.
    pub fn from_bytes(buffer: impl Into<Vec<u8>>, offset: usize) -> Self {
        let mut s = Self::new();
        s.load(buffer.into(), offset);
        s
    }

    fn load(&mut self, buffer: Vec<u8>, offset: usize) {
        self.offset = offset.min(buffer.len());
        self.buffer = buffer;
    }

    /// Drop all content and rewind. Used to reuse one stream across messages.
    pub fn reset(&mut self) {
        log::trace!("stream reset, discarding {} bytes", self.buffer.len());
        self.buffer.clear();
        self.offset = 0;
    }

    /// Replace the buffer and offset, discarding prior content.
    ///
    /// An offset past the end is clamped to the buffer length.
    pub fn set_buffer(&mut self, buffer: impl Into<Vec<u8>>, offset: usize) {
        let buffer = buffer.into();
        log::trace!(
            "stream buffer replaced: {} -> {} bytes, offset {}",
            self.buffer.len(),
            buffer.len(),
            offset
        );
        self.load(buffer, offset);
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move the read cursor. Positions past the end are rejected.
    pub fn set_offset(&mut self, offset: usize) -> Result<()> {
        if offset > self.buffer.len() {
            return Err(BinaryError::UnexpectedEndOfBuffer {
                requested: offset - self.offset,
                remaining: self.remaining(),
            });
        }
        self.offset = offset;
        Ok(())
    }

    #[inline]
    pub(crate) fn rewind_to(&mut self, offset: usize) {
        debug_assert!(offset <= self.buffer.len());
        self.offset = offset;
    }

    /// Whole buffer, including bytes already read.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Bytes left between the offset and the end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    #[inline]
    pub fn config(&self) -> CodecConfig {
        self.floats.config()
    }

    /// True when nothing is left to read.
    #[inline]
    pub fn feof(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    /// Next `len` bytes from the offset; advances the offset by `len`.
    ///
    /// # Errors
    /// `UnexpectedEndOfBuffer` when fewer than `len` bytes remain. The
    /// offset is not moved.
    pub fn get(&mut self, len: usize) -> Result<&[u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(BinaryError::UnexpectedEndOfBuffer { requested: len, remaining });
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.buffer[start..self.offset])
    }

    /// Everything from the offset to the end; the offset moves to the end.
    pub fn get_remaining(&mut self) -> &[u8] {
        let start = self.offset;
        self.offset = self.buffer.len();
        &self.buffer[start..]
    }

    /// Fixed-size copy of the next `N` bytes.
    pub(crate) fn get_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.get(N)?);
        Ok(out)
    }

    /// Append to the end of the buffer. The offset does not move.
    #[inline]
    pub fn put(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }
}

impl ByteSource for Stream {
    #[inline]
    fn next_byte(&mut self) -> Result<u8> {
        self.get_byte()
    }
}

impl From<Vec<u8>> for Stream {
    fn from(buffer: Vec<u8>) -> Self {
        Self::from_bytes(buffer, 0)
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("offset", &self.offset)
            .field("len", &self.buffer.len())
            .field("buffer", &fmt_bytes(&self.buffer))
            .finish()
    }
}
