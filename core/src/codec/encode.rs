//! codec/encode.rs
//!
//! Fixed-width integer encoding.
//!
//! Design notes:
//! - Output is always exactly the type's width.
//! - Encoders never validate range. Values wider than the wire type wrap by
//!   two's-complement truncation (triads drop the high byte); callers that
//!   need a range check do it before calling.
//! - Signed 16-bit values go through `write_short` / `write_lshort` as
//!   `v as u16`; the bit pattern is identical.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::constants::{BOOL_LEN, BYTE_LEN, INT_LEN, LONG_LEN, SHORT_LEN, TRIAD_LEN, TRIAD_MAX};

/// Canonical `0x01` / `0x00`.
#[inline]
pub fn write_bool(value: bool) -> [u8; BOOL_LEN] {
    [value as u8]
}

#[inline]
pub fn write_byte(value: u8) -> [u8; BYTE_LEN] {
    [value]
}

#[inline]
pub fn write_short(value: u16) -> [u8; SHORT_LEN] {
    let mut out = [0u8; SHORT_LEN];
    BigEndian::write_u16(&mut out, value);
    out
}

#[inline]
pub fn write_lshort(value: u16) -> [u8; SHORT_LEN] {
    let mut out = [0u8; SHORT_LEN];
    LittleEndian::write_u16(&mut out, value);
    out
}

/// 24-bit big-endian: the 4-byte big-endian encoding minus its first byte.
#[inline]
pub fn write_triad(value: u32) -> [u8; TRIAD_LEN] {
    let mut out = [0u8; TRIAD_LEN];
    BigEndian::write_u24(&mut out, value & TRIAD_MAX);
    out
}

/// 24-bit little-endian: the 4-byte little-endian encoding minus its last byte.
#[inline]
pub fn write_ltriad(value: u32) -> [u8; TRIAD_LEN] {
    let mut out = [0u8; TRIAD_LEN];
    LittleEndian::write_u24(&mut out, value & TRIAD_MAX);
    out
}

#[inline]
pub fn write_int(value: i32) -> [u8; INT_LEN] {
    let mut out = [0u8; INT_LEN];
    BigEndian::write_i32(&mut out, value);
    out
}

#[inline]
pub fn write_lint(value: i32) -> [u8; INT_LEN] {
    let mut out = [0u8; INT_LEN];
    LittleEndian::write_i32(&mut out, value);
    out
}

/// 64-bit big-endian as two 32-bit words, high word first.
#[inline]
pub fn write_long(value: i64) -> [u8; LONG_LEN] {
    let bits = value as u64;
    let mut out = [0u8; LONG_LEN];
    BigEndian::write_u32(&mut out[..4], (bits >> 32) as u32);
    BigEndian::write_u32(&mut out[4..], bits as u32);
    out
}

/// 64-bit little-endian: the big-endian encoding reversed.
#[inline]
pub fn write_llong(value: i64) -> [u8; LONG_LEN] {
    let mut out = write_long(value);
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_byte_order() {
        assert_eq!(write_short(0x1234), [0x12, 0x34]);
        assert_eq!(write_lshort(0x1234), [0x34, 0x12]);
        assert_eq!(write_short(-2i16 as u16), [0xFF, 0xFE]);
    }

    #[test]
    fn triad_drops_high_byte() {
        assert_eq!(write_triad(0x0102_0304), [0x02, 0x03, 0x04]);
        assert_eq!(write_ltriad(0x0102_0304), [0x04, 0x03, 0x02]);
        assert_eq!(write_triad(TRIAD_MAX + 1), [0, 0, 0]);
    }

    #[test]
    fn long_minus_one_is_all_ones() {
        assert_eq!(write_long(-1), [0xFF; 8]);
        assert_eq!(write_llong(-1), [0xFF; 8]);
        assert_eq!(write_long(1), [0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(write_llong(1), [1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn bool_canonical() {
        assert_eq!(write_bool(true), [0x01]);
        assert_eq!(write_bool(false), [0x00]);
    }
}
