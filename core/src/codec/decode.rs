//! codec/decode.rs
//!
//! Fixed-width integer decoding.
//!
//! Design notes:
//! - Every function requires a slice of exactly the type's width; any other
//!   length is `BinaryError::InvalidInput`, never a silent truncation or pad.
//! - Decoding reinterprets bits. Unsigned reads of bytes written from a
//!   negative value give the two's-complement pattern, not an error.
//! - `L`-prefixed functions read little-endian, the rest big-endian.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::constants::{BOOL_LEN, BYTE_LEN, INT_LEN, LONG_LEN, SHORT_LEN, TRIAD_LEN};
use crate::types::{BinaryError, Result};

#[inline]
pub(crate) fn check_len(bytes: &[u8], expected: usize) -> Result<()> {
    if bytes.len() != expected {
        return Err(BinaryError::InvalidInput { expected, actual: bytes.len() });
    }
    Ok(())
}

/// `0x00` is false, anything else is true.
#[inline]
pub fn read_bool(bytes: &[u8]) -> Result<bool> {
    check_len(bytes, BOOL_LEN)?;
    Ok(bytes[0] != 0x00)
}

#[inline]
pub fn read_byte(bytes: &[u8]) -> Result<u8> {
    check_len(bytes, BYTE_LEN)?;
    Ok(bytes[0])
}

#[inline]
pub fn read_signed_byte(bytes: &[u8]) -> Result<i8> {
    check_len(bytes, BYTE_LEN)?;
    Ok(bytes[0] as i8)
}

#[inline]
pub fn read_short(bytes: &[u8]) -> Result<u16> {
    check_len(bytes, SHORT_LEN)?;
    Ok(BigEndian::read_u16(bytes))
}

#[inline]
pub fn read_lshort(bytes: &[u8]) -> Result<u16> {
    check_len(bytes, SHORT_LEN)?;
    Ok(LittleEndian::read_u16(bytes))
}

#[inline]
pub fn read_signed_short(bytes: &[u8]) -> Result<i16> {
    check_len(bytes, SHORT_LEN)?;
    Ok(BigEndian::read_i16(bytes))
}

#[inline]
pub fn read_signed_lshort(bytes: &[u8]) -> Result<i16> {
    check_len(bytes, SHORT_LEN)?;
    Ok(LittleEndian::read_i16(bytes))
}

/// 24-bit big-endian. The missing high byte is zero, so the result is
/// always in `0..=TRIAD_MAX`.
#[inline]
pub fn read_triad(bytes: &[u8]) -> Result<u32> {
    check_len(bytes, TRIAD_LEN)?;
    Ok(BigEndian::read_u24(bytes))
}

#[inline]
pub fn read_ltriad(bytes: &[u8]) -> Result<u32> {
    check_len(bytes, TRIAD_LEN)?;
    Ok(LittleEndian::read_u24(bytes))
}

/// 32-bit big-endian, sign-extended.
#[inline]
pub fn read_int(bytes: &[u8]) -> Result<i32> {
    check_len(bytes, INT_LEN)?;
    Ok(BigEndian::read_i32(bytes))
}

#[inline]
pub fn read_lint(bytes: &[u8]) -> Result<i32> {
    check_len(bytes, INT_LEN)?;
    Ok(LittleEndian::read_i32(bytes))
}

/// 64-bit big-endian: high and low 32-bit words combined as
/// `(high << 32) | low`.
#[inline]
pub fn read_long(bytes: &[u8]) -> Result<i64> {
    check_len(bytes, LONG_LEN)?;
    let high = u64::from(BigEndian::read_u32(&bytes[..4]));
    let low = u64::from(BigEndian::read_u32(&bytes[4..]));
    Ok(((high << 32) | low) as i64)
}

/// 64-bit little-endian: the big-endian decode of the reversed bytes.
#[inline]
pub fn read_llong(bytes: &[u8]) -> Result<i64> {
    check_len(bytes, LONG_LEN)?;
    let mut be = [0u8; LONG_LEN];
    be.copy_from_slice(bytes);
    be.reverse();
    read_long(&be)
}
