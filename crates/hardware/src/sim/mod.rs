//! Simulation support.
//!
//! File-level helpers around the binary image format: a headerless byte
//! stream of at most 16 bytes, where byte *i* holds the contents of
//! address *i*.

/// Binary image reading and writing.
pub mod loader;
