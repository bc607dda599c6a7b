//! Shared test infrastructure.
//!
//! Provides a capture sink for the machine's output stream and a boot
//! harness that wires a CPU to it, so tests can assert on what a program
//! printed without touching the process's stdout.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use sapsim_core::{Config, Cpu, InstructionSet};

/// An output sink that records everything written to it.
///
/// Clones share the same buffer, so a test keeps one clone and hands the
/// other to the CPU.
#[derive(Debug, Clone, Default)]
pub struct CaptureOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureOutput {
    /// Creates an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far, as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl Write for CaptureOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Boots a CPU with the default configuration and the given image loaded.
pub fn boot(image: &[u8]) -> (Cpu, CaptureOutput) {
    boot_with_config(image, &Config::default())
}

/// Boots a CPU with an explicit configuration and the given image loaded.
pub fn boot_with_config(image: &[u8], config: &Config) -> (Cpu, CaptureOutput) {
    let output = CaptureOutput::new();
    let mut cpu = Cpu::with_output(
        InstructionSet::standard(),
        config,
        Box::new(output.clone()),
    );
    cpu.load_image(image);
    (cpu, output)
}
