//! codec/varint.rs
//!
//! LEB128 variable-length integers.
//!
//! Layout: 7-bit groups, least-significant group first, high bit (0x80) set
//! on every byte except the last. At most `VARINT_MAX_BYTES` (10) bytes,
//! enough for 64 bits of payload.
//!
//! Signed values are zig-zag mapped first so small magnitudes of either sign
//! stay short: `0 → 0`, `-1 → 1`, `1 → 2`, `-2 → 3`, ...

use std::fmt;
use std::ops::Deref;

use crate::constants::{VARINT_CONTINUATION, VARINT_GROUP_BITS, VARINT_GROUP_MASK, VARINT_MAX_BYTES};
use crate::types::{BinaryError, Result};

/// Pull-based byte source for length-dependent decoding.
///
/// Implemented by [`crate::stream::Stream`] and by byte slices, which
/// shrink from the front as they are consumed.
pub trait ByteSource {
    fn next_byte(&mut self) -> Result<u8>;
}

impl<'a> ByteSource for &'a [u8] {
    #[inline]
    fn next_byte(&mut self) -> Result<u8> {
        let slice: &'a [u8] = *self;
        let (&b, rest) = slice
            .split_first()
            .ok_or(BinaryError::UnexpectedEndOfBuffer { requested: 1, remaining: 0 })?;
        *self = rest;
        Ok(b)
    }
}

/// Encoded varint held inline. Derefs to the written bytes.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct VarIntBuf {
    bytes: [u8; VARINT_MAX_BYTES],
    len: u8,
}

impl VarIntBuf {
    const fn empty() -> Self {
        Self { bytes: [0u8; VARINT_MAX_BYTES], len: 0 }
    }
}

impl Deref for VarIntBuf {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl AsRef<[u8]> for VarIntBuf {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

impl fmt::Debug for VarIntBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarIntBuf(0x{})", hex::encode(&self[..]))
    }
}

/// `(v << 1) ^ (v >> 63)`, the shift on the right being arithmetic.
#[inline]
pub const fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_encode`]: `(raw >> 1) ^ -(raw & 1)`.
#[inline]
pub const fn zigzag_decode(raw: u64) -> i64 {
    ((raw >> 1) as i64) ^ -((raw & 1) as i64)
}

/// Decode an unsigned varint.
///
/// # Errors
/// - `MalformedVarInt` after `VARINT_MAX_BYTES` bytes without a terminator.
/// - Whatever the source returns when it runs dry.
///
/// Payload bits that land past bit 63 in the tenth byte are discarded.
pub fn read_unsigned_var_int<S: ByteSource + ?Sized>(src: &mut S) -> Result<u64> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;

    for _ in 0..VARINT_MAX_BYTES {
        let b = src.next_byte()?;
        value |= u64::from(b & VARINT_GROUP_MASK) << shift;
        if b & VARINT_CONTINUATION == 0 {
            return Ok(value);
        }
        shift += VARINT_GROUP_BITS;
    }

    Err(BinaryError::MalformedVarInt { max_bytes: VARINT_MAX_BYTES })
}

/// Decode a zig-zag signed varint.
pub fn read_var_int<S: ByteSource + ?Sized>(src: &mut S) -> Result<i64> {
    read_unsigned_var_int(src).map(zigzag_decode)
}

/// Encode an unsigned varint.
///
/// The value is treated as a bit pattern: shifts are logical.
///
/// # Errors
/// `ValueTooLarge` if more than `VARINT_MAX_BYTES` groups would be needed.
/// A `u64` always fits in ten groups.
pub fn write_unsigned_var_int(mut value: u64) -> Result<VarIntBuf> {
    let mut buf = VarIntBuf::empty();

    for i in 0..VARINT_MAX_BYTES {
        if value >> VARINT_GROUP_BITS != 0 {
            buf.bytes[i] = (value as u8) | VARINT_CONTINUATION;
        } else {
            buf.bytes[i] = (value as u8) & VARINT_GROUP_MASK;
            buf.len = (i + 1) as u8;
            return Ok(buf);
        }
        value >>= VARINT_GROUP_BITS;
    }

    Err(BinaryError::ValueTooLarge { max_bytes: VARINT_MAX_BYTES })
}

/// Encode a zig-zag signed varint.
pub fn write_var_int(value: i64) -> Result<VarIntBuf> {
    write_unsigned_var_int(zigzag_encode(value))
}

/// Number of bytes [`write_unsigned_var_int`] produces for `value`.
#[inline]
pub const fn var_int_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros();
    let bits = if bits == 0 { 1 } else { bits };
    bits.div_ceil(VARINT_GROUP_BITS) as usize
}
