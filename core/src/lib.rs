//! binary-core
//!
//! Raw byte-level codec for protocol and file-format code.
//! Fixed-width integers, IEEE floats, 24-bit triads, LEB128 varints
//! and a cursor stream over an owned buffer. No framing, no schema.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Stateless byte-level transforms
pub mod codec;

// Stateful cursor over an owned buffer
pub mod stream;

pub use types::{BinaryError, CodecConfig, Endianness, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{ByteSource, FloatCodec, VarIntBuf};
    pub use crate::stream::{BinaryUuid, Stream};
    pub use crate::types::{BinaryError, CodecConfig, Endianness};
}
