//! Fault definitions.
//!
//! A fault is a terminal condition raised while executing a program: the
//! machine transitions to `Faulted` and the run ends. Faults carry enough
//! context for a single-line diagnostic (the offending opcode and the PC at
//! which it was fetched, or the out-of-range address).

use thiserror::Error;

/// Terminal machine fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// The fetched byte's high nibble is not a defined opcode.
    ///
    /// Reserved opcodes (0x0 and 0x9 through 0xE) are never executed as
    /// no-ops; they end the run here.
    #[error("unknown instruction {opcode:#x} at {pc:#x}")]
    IllegalInstruction {
        /// The undefined opcode nibble.
        opcode: u8,
        /// Program counter value at which the instruction was fetched.
        pc: u8,
    },

    /// A memory access named an address outside the 16-byte address space.
    #[error("address {addr:#x} is outside the 16-byte address space")]
    OutOfRange {
        /// The faulting address.
        addr: u8,
    },
}
