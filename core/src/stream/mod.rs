//! stream — a read cursor over an owned, growable byte buffer.
//!
//! Reads consume from the current offset; writes always append to the end
//! of the buffer and never move the offset. Every typed accessor composes one
//! codec call with one fixed-width `get`/`put`, except the varint accessors
//! which pull bytes one at a time.
//!
//! A failed read leaves the offset where it was.

pub mod cursor;
pub mod accessors;
pub mod uuid;

pub use cursor::Stream;
pub use uuid::BinaryUuid;
