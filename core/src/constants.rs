//! constants.rs
//! Wire widths and bounds shared by the codec and the stream.

/// Fixed wire widths in bytes.
pub const BOOL_LEN: usize = 1;
pub const BYTE_LEN: usize = 1;
pub const SHORT_LEN: usize = 2;
pub const TRIAD_LEN: usize = 3;
pub const INT_LEN: usize = 4;
pub const LONG_LEN: usize = 8;
pub const FLOAT_LEN: usize = 4;
pub const DOUBLE_LEN: usize = 8;
pub const UUID_LEN: usize = 16;

/// Largest value a triad can hold (24 bits).
pub const TRIAD_MAX: u32 = 0x00FF_FFFF;

/// Varint bound: 64 bits of payload in 7-bit groups, one byte of slack.
pub const VARINT_MAX_BYTES: usize = 10;
/// Payload bits per varint byte.
pub const VARINT_GROUP_BITS: u32 = 7;
pub const VARINT_GROUP_MASK: u8 = 0x7F;
/// High bit: more groups follow.
pub const VARINT_CONTINUATION: u8 = 0x80;

/// `1.0f64` laid out most-significant byte first.
/// Compared against the native layout to resolve the host byte order.
pub const HOST_ORDER_PROBE_BE: [u8; DOUBLE_LEN] = [0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Fixed decimals used by `print_float` before trailing zeros are stripped.
pub const FLOAT_PRINT_PRECISION: usize = 6;
