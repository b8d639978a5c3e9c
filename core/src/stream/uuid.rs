//! stream/uuid.rs
//!
//! Seam for 16-byte identifier types. The stream only moves the bytes;
//! the identifier type owns its own layout.

use crate::constants::UUID_LEN;

/// A value with an exact 16-byte binary form.
pub trait BinaryUuid: Sized {
    fn from_binary(bytes: [u8; UUID_LEN]) -> Self;
    fn to_binary(&self) -> [u8; UUID_LEN];
}

impl BinaryUuid for [u8; UUID_LEN] {
    #[inline]
    fn from_binary(bytes: [u8; UUID_LEN]) -> Self {
        bytes
    }

    #[inline]
    fn to_binary(&self) -> [u8; UUID_LEN] {
        *self
    }
}

/// Big-endian: the most significant byte comes first.
impl BinaryUuid for u128 {
    #[inline]
    fn from_binary(bytes: [u8; UUID_LEN]) -> Self {
        u128::from_be_bytes(bytes)
    }

    #[inline]
    fn to_binary(&self) -> [u8; UUID_LEN] {
        self.to_be_bytes()
    }
}
