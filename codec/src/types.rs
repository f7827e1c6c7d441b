//! Encodings shared by several messages.

pub mod geometry;
pub mod primitives;
pub mod radix;
