//! codec/float.rs
//!
//! IEEE-754 single/double codec.
//!
//! Values are always built from the host's native layout. When the wire
//! order differs from the host order held in `CodecConfig`, bytes are
//! reversed before decoding and after encoding.
//!
//! Accessor families:
//! - `read_float` / `write_float`: canonical wire order (big-endian),
//!   identical bytes on every host.
//! - `read_lfloat` / `write_lfloat`: little-endian.
//! - `read_float_ne` / `write_float_ne`: host order, never reversed.
//!
//! The same three exist for doubles.

use crate::codec::decode::check_len;
use crate::constants::{DOUBLE_LEN, FLOAT_LEN};
use crate::types::{CodecConfig, Endianness, Result};
use crate::utils::round_to_places;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FloatCodec {
    config: CodecConfig,
}

impl FloatCodec {
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> CodecConfig {
        self.config
    }

    #[inline]
    fn host_layout<const N: usize>(&self, order: Endianness, bytes: &[u8]) -> Result<[u8; N]> {
        check_len(bytes, N)?;
        let mut raw = [0u8; N];
        raw.copy_from_slice(bytes);
        if self.config.needs_swap(order) {
            raw.reverse();
        }
        Ok(raw)
    }

    #[inline]
    fn wire_layout<const N: usize>(&self, order: Endianness, mut raw: [u8; N]) -> [u8; N] {
        if self.config.needs_swap(order) {
            raw.reverse();
        }
        raw
    }

    // -------------------------------------------------------------------------
    // Single precision
    // -------------------------------------------------------------------------

    /// Decode a 4-byte float in `order`.
    ///
    /// `accuracy` rounds the result to that many decimal places (half away
    /// from zero); `None` returns the decoded value untouched.
    pub fn read_float_with(&self, order: Endianness, bytes: &[u8], accuracy: Option<u32>) -> Result<f32> {
        let value = f32::from_ne_bytes(self.host_layout::<FLOAT_LEN>(order, bytes)?);
        Ok(match accuracy {
            Some(places) => round_to_places(f64::from(value), places) as f32,
            None => value,
        })
    }

    pub fn write_float_with(&self, order: Endianness, value: f32) -> [u8; FLOAT_LEN] {
        self.wire_layout(order, value.to_ne_bytes())
    }

    #[inline]
    pub fn read_float(&self, bytes: &[u8], accuracy: Option<u32>) -> Result<f32> {
        self.read_float_with(Endianness::Big, bytes, accuracy)
    }

    #[inline]
    pub fn read_lfloat(&self, bytes: &[u8], accuracy: Option<u32>) -> Result<f32> {
        self.read_float_with(Endianness::Little, bytes, accuracy)
    }

    #[inline]
    pub fn read_float_ne(&self, bytes: &[u8], accuracy: Option<u32>) -> Result<f32> {
        self.read_float_with(self.config.host_order(), bytes, accuracy)
    }

    #[inline]
    pub fn write_float(&self, value: f32) -> [u8; FLOAT_LEN] {
        self.write_float_with(Endianness::Big, value)
    }

    #[inline]
    pub fn write_lfloat(&self, value: f32) -> [u8; FLOAT_LEN] {
        self.write_float_with(Endianness::Little, value)
    }

    #[inline]
    pub fn write_float_ne(&self, value: f32) -> [u8; FLOAT_LEN] {
        self.write_float_with(self.config.host_order(), value)
    }

    // -------------------------------------------------------------------------
    // Double precision
    // -------------------------------------------------------------------------

    pub fn read_double_with(&self, order: Endianness, bytes: &[u8]) -> Result<f64> {
        Ok(f64::from_ne_bytes(self.host_layout::<DOUBLE_LEN>(order, bytes)?))
    }

    pub fn write_double_with(&self, order: Endianness, value: f64) -> [u8; DOUBLE_LEN] {
        self.wire_layout(order, value.to_ne_bytes())
    }

    #[inline]
    pub fn read_double(&self, bytes: &[u8]) -> Result<f64> {
        self.read_double_with(Endianness::Big, bytes)
    }

    #[inline]
    pub fn read_ldouble(&self, bytes: &[u8]) -> Result<f64> {
        self.read_double_with(Endianness::Little, bytes)
    }

    #[inline]
    pub fn read_double_ne(&self, bytes: &[u8]) -> Result<f64> {
        self.read_double_with(self.config.host_order(), bytes)
    }

    #[inline]
    pub fn write_double(&self, value: f64) -> [u8; DOUBLE_LEN] {
        self.write_double_with(Endianness::Big, value)
    }

    #[inline]
    pub fn write_ldouble(&self, value: f64) -> [u8; DOUBLE_LEN] {
        self.write_double_with(Endianness::Little, value)
    }

    #[inline]
    pub fn write_double_ne(&self, value: f64) -> [u8; DOUBLE_LEN] {
        self.write_double_with(self.config.host_order(), value)
    }
}
