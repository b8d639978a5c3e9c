//! codec/mod.rs
//! Stateless byte-level transforms.
//!
//! Responsibilities:
//! - Fixed-width integer decode/encode with caller-selected byte order
//! - IEEE float/double decode/encode normalised against the host layout
//! - LEB128 varints with zig-zag signed mapping
//!
//! Non-responsibilities:
//! - Cursor state (see `stream`)
//! - Range validation: encoders wrap, decoders reinterpret bits

pub mod decode;
pub mod encode;
pub mod float;
pub mod varint;

pub use decode::*;
pub use encode::*;
pub use float::FloatCodec;
pub use varint::{
    ByteSource,
    VarIntBuf,
    read_unsigned_var_int,
    read_var_int,
    var_int_len,
    write_unsigned_var_int,
    write_var_int,
    zigzag_decode,
    zigzag_encode,
};
