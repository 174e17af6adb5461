//! Variable-length quantity codec.
//!
//! Unsigned 32-bit integers are written as big-endian runs of 7-bit groups,
//! where every byte but the last of a value has its high bit set.

pub mod encoding;

pub use encoding::{decode, encode, DecodeError, DecodeResult};
