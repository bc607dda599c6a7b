//! CPU core.
//!
//! The machine is strictly sequential: one fetch-decode-execute cycle runs
//! to completion before the next fetch, with no pipelining, interrupts, or
//! memory protection.

/// CPU state container and execution loop.
pub mod cpu;

pub use cpu::{Cpu, State};
