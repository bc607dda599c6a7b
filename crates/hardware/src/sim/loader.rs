//! Binary image loader.
//!
//! This module reads and writes program images. It performs:
//! 1. **Loading:** Reads a raw image file and discards any bytes beyond
//!    address 15, matching the emulator's load loop (excess silently
//!    truncates the program).
//! 2. **Writing:** Writes an assembled image to disk.
//!
//! Both helpers go through `std::fs`, so file handles are released on every
//! path, including early error returns.

use std::fs;
use std::io;
use std::path::Path;

use crate::common::constants::RAM_SIZE;

/// Reads a program image from disk.
///
/// The image format has no header or length field; length is implicit in
/// file size. At most the first 16 bytes are returned.
///
/// # Errors
///
/// Returns the underlying I/O error when the file cannot be read.
pub fn load_image(path: &Path) -> io::Result<Vec<u8>> {
    let mut image = fs::read(path)?;
    image.truncate(RAM_SIZE);
    Ok(image)
}

/// Writes an assembled image to disk, replacing any existing file.
///
/// # Errors
///
/// Returns the underlying I/O error when the file cannot be written.
pub fn write_image(path: &Path, image: &[u8]) -> io::Result<()> {
    fs::write(path, image)
}
