//! stream/accessors.rs
//!
//! Typed reads and writes on `Stream`.
//!
//! Naming follows the codec: plain names are big-endian, an `l` after the
//! verb (`get_lint`, `put_lshort`) is little-endian.

use crate::codec::{
    read_bool, read_byte, read_int, read_lint, read_llong, read_long, read_lshort, read_ltriad,
    read_short, read_signed_byte, read_signed_lshort, read_signed_short, read_triad,
    read_unsigned_var_int, read_var_int, write_bool, write_byte, write_int, write_lint,
    write_llong, write_long, write_lshort, write_ltriad, write_short, write_triad,
    write_unsigned_var_int, write_var_int,
};
use crate::constants::{
    BOOL_LEN, BYTE_LEN, DOUBLE_LEN, FLOAT_LEN, INT_LEN, LONG_LEN, SHORT_LEN, TRIAD_LEN, UUID_LEN,
};
use crate::stream::cursor::Stream;
use crate::stream::uuid::BinaryUuid;
use crate::types::Result;

impl Stream {
    // -------------------------------------------------------------------------
    // bool / byte
    // -------------------------------------------------------------------------

    pub fn get_bool(&mut self) -> Result<bool> {
        read_bool(self.get(BOOL_LEN)?)
    }

    pub fn put_bool(&mut self, v: bool) {
        self.put(&write_bool(v));
    }

    pub fn get_byte(&mut self) -> Result<u8> {
        read_byte(self.get(BYTE_LEN)?)
    }

    pub fn get_signed_byte(&mut self) -> Result<i8> {
        read_signed_byte(self.get(BYTE_LEN)?)
    }

    pub fn put_byte(&mut self, v: u8) {
        self.put(&write_byte(v));
    }

    // -------------------------------------------------------------------------
    // 16-bit
    // -------------------------------------------------------------------------

    pub fn get_short(&mut self) -> Result<u16> {
        read_short(self.get(SHORT_LEN)?)
    }

    pub fn get_lshort(&mut self) -> Result<u16> {
        read_lshort(self.get(SHORT_LEN)?)
    }

    pub fn get_signed_short(&mut self) -> Result<i16> {
        read_signed_short(self.get(SHORT_LEN)?)
    }

    pub fn get_signed_lshort(&mut self) -> Result<i16> {
        read_signed_lshort(self.get(SHORT_LEN)?)
    }

    pub fn put_short(&mut self, v: u16) {
        self.put(&write_short(v));
    }

    pub fn put_lshort(&mut self, v: u16) {
        self.put(&write_lshort(v));
    }

    // -------------------------------------------------------------------------
    // 24-bit
    // -------------------------------------------------------------------------

    pub fn get_triad(&mut self) -> Result<u32> {
        read_triad(self.get(TRIAD_LEN)?)
    }

    pub fn get_ltriad(&mut self) -> Result<u32> {
        read_ltriad(self.get(TRIAD_LEN)?)
    }

    /// Writes the low 24 bits of `v`.
    pub fn put_triad(&mut self, v: u32) {
        self.put(&write_triad(v));
    }

    pub fn put_ltriad(&mut self, v: u32) {
        self.put(&write_ltriad(v));
    }

    // -------------------------------------------------------------------------
    // 32-bit / 64-bit
    // -------------------------------------------------------------------------

    pub fn get_int(&mut self) -> Result<i32> {
        read_int(self.get(INT_LEN)?)
    }

    pub fn get_lint(&mut self) -> Result<i32> {
        read_lint(self.get(INT_LEN)?)
    }

    pub fn put_int(&mut self, v: i32) {
        self.put(&write_int(v));
    }

    pub fn put_lint(&mut self, v: i32) {
        self.put(&write_lint(v));
    }

    pub fn get_long(&mut self) -> Result<i64> {
        read_long(self.get(LONG_LEN)?)
    }

    pub fn get_llong(&mut self) -> Result<i64> {
        read_llong(self.get(LONG_LEN)?)
    }

    pub fn put_long(&mut self, v: i64) {
        self.put(&write_long(v));
    }

    pub fn put_llong(&mut self, v: i64) {
        self.put(&write_llong(v));
    }

    // -------------------------------------------------------------------------
    // IEEE floats
    // -------------------------------------------------------------------------

    /// Big-endian float, optionally rounded to `accuracy` decimal places.
    pub fn get_float(&mut self, accuracy: Option<u32>) -> Result<f32> {
        let raw = self.get_array::<FLOAT_LEN>()?;
        self.floats.read_float(&raw, accuracy)
    }

    pub fn get_lfloat(&mut self, accuracy: Option<u32>) -> Result<f32> {
        let raw = self.get_array::<FLOAT_LEN>()?;
        self.floats.read_lfloat(&raw, accuracy)
    }

    pub fn put_float(&mut self, v: f32) {
        let raw = self.floats.write_float(v);
        self.put(&raw);
    }

    pub fn put_lfloat(&mut self, v: f32) {
        let raw = self.floats.write_lfloat(v);
        self.put(&raw);
    }

    pub fn get_double(&mut self) -> Result<f64> {
        let raw = self.get_array::<DOUBLE_LEN>()?;
        self.floats.read_double(&raw)
    }

    pub fn get_ldouble(&mut self) -> Result<f64> {
        let raw = self.get_array::<DOUBLE_LEN>()?;
        self.floats.read_ldouble(&raw)
    }

    pub fn put_double(&mut self, v: f64) {
        let raw = self.floats.write_double(v);
        self.put(&raw);
    }

    pub fn put_ldouble(&mut self, v: f64) {
        let raw = self.floats.write_ldouble(v);
        self.put(&raw);
    }

    // -------------------------------------------------------------------------
    // 16-byte identifiers
    // -------------------------------------------------------------------------

    /// Next 16 bytes handed to `U::from_binary` unchanged.
    pub fn get_uuid<U: BinaryUuid>(&mut self) -> Result<U> {
        Ok(U::from_binary(self.get_array::<UUID_LEN>()?))
    }

    /// Next 16 bytes read as two little-endian 64-bit halves, most
    /// significant half first.
    pub fn get_luuid<U: BinaryUuid>(&mut self) -> Result<U> {
        let mut raw = self.get_array::<UUID_LEN>()?;
        swap_halves(&mut raw);
        Ok(U::from_binary(raw))
    }

    pub fn put_uuid<U: BinaryUuid>(&mut self, uuid: &U) {
        self.put(&uuid.to_binary());
    }

    pub fn put_luuid<U: BinaryUuid>(&mut self, uuid: &U) {
        let mut raw = uuid.to_binary();
        swap_halves(&mut raw);
        self.put(&raw);
    }

    // -------------------------------------------------------------------------
    // Varints
    // -------------------------------------------------------------------------

    /// Unsigned LEB128. On failure the offset is restored to where the
    /// varint started.
    pub fn get_unsigned_var_int(&mut self) -> Result<u64> {
        let start = self.offset();
        read_unsigned_var_int(&mut *self).map_err(|e| {
            self.rewind_to(start);
            e
        })
    }

    /// Zig-zag signed LEB128.
    pub fn get_var_int(&mut self) -> Result<i64> {
        let start = self.offset();
        read_var_int(&mut *self).map_err(|e| {
            self.rewind_to(start);
            e
        })
    }

    pub fn put_unsigned_var_int(&mut self, v: u64) -> Result<()> {
        let buf = write_unsigned_var_int(v)?;
        self.put(&buf);
        Ok(())
    }

    pub fn put_var_int(&mut self, v: i64) -> Result<()> {
        let buf = write_var_int(v)?;
        self.put(&buf);
        Ok(())
    }
}

#[inline]
fn swap_halves(raw: &mut [u8; UUID_LEN]) {
    let (hi, lo) = raw.split_at_mut(UUID_LEN / 2);
    hi.reverse();
    lo.reverse();
}
