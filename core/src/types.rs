//! types.rs
//! Byte order registry, codec configuration and the crate error type.
//!
//! Notes:
//! - The host byte order is resolved once per process and never changes.
//! - It only matters to the float codec, which reads the native IEEE layout
//!   and reverses bytes when the wire order differs.

use std::sync::OnceLock;

use thiserror::Error;

use crate::constants::HOST_ORDER_PROBE_BE;

/// Byte order of a multi-byte value on the wire.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Most-significant byte first.
    Big = 0x00,
    /// Least-significant byte first.
    Little = 0x01,
}

static HOST_ORDER: OnceLock<Endianness> = OnceLock::new();

impl Endianness {
    /// Native byte order of the running host, resolved on first use.
    pub fn host() -> Self {
        *HOST_ORDER.get_or_init(|| {
            let order = if 1.0f64.to_ne_bytes() == HOST_ORDER_PROBE_BE {
                Endianness::Big
            } else {
                Endianness::Little
            };
            log::debug!("resolved host byte order: {:?}", order);
            order
        })
    }

    pub const fn opposite(self) -> Self {
        match self {
            Endianness::Big => Endianness::Little,
            Endianness::Little => Endianness::Big,
        }
    }
}

/// Immutable codec configuration.
///
/// Carries the resolved host byte order into the float codec instead of
/// having it consult a global on every call. Built once with
/// [`CodecConfig::detect`] and copied into every [`crate::codec::FloatCodec`]
/// and [`crate::stream::Stream`] that needs it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    host_order: Endianness,
}

impl CodecConfig {
    pub fn detect() -> Self {
        Self { host_order: Endianness::host() }
    }

    #[inline]
    pub const fn host_order(&self) -> Endianness {
        self.host_order
    }

    /// True when bytes in `wire` order must be reversed to match the host layout.
    #[inline]
    pub fn needs_swap(&self, wire: Endianness) -> bool {
        self.host_order != wire
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::detect()
    }
}

/// Errors raised by decode calls, stream reads and the varint codec.
///
/// Fixed-width encoding never fails: out-of-range values wrap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BinaryError {
    /// Decode input does not have the exact width of the type.
    #[error("invalid input: expected {expected} bytes, got {actual}")]
    InvalidInput { expected: usize, actual: usize },

    /// A stream read asked for more bytes than remain.
    #[error("unexpected end of buffer: requested {requested} bytes, {remaining} remaining")]
    UnexpectedEndOfBuffer { requested: usize, remaining: usize },

    /// Varint did not terminate within the byte bound.
    #[error("varint did not terminate after {max_bytes} bytes")]
    MalformedVarInt { max_bytes: usize },

    /// Value needs more varint groups than the byte bound allows.
    #[error("value too large to be encoded as a varint of at most {max_bytes} bytes")]
    ValueTooLarge { max_bytes: usize },
}

pub type Result<T> = std::result::Result<T, BinaryError>;
