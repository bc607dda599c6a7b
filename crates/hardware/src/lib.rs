//! SAP-style 8-bit breadboard computer library.
//!
//! This crate implements a minimal 8-bit computer with a 4-bit address space,
//! together with the tooling that targets it:
//! 1. **Machine model:** Instruction set, nibble-packed encoding, and the
//!    16-byte memory with checked addressing.
//! 2. **CPU core:** The fetch-decode-execute loop over the architectural
//!    state (PC, IR, MAR, RA, RB, carry) until halted or faulted.
//! 3. **Assembler:** A two-pass compiler from mnemonic source text to the
//!    binary image format the CPU executes.
//! 4. **Simulation:** Image loading, configuration, and statistics.

/// Two-pass assembler (tokenizer, symbol table, encoding).
pub mod asm;
/// Common types and constants (address space, faults).
pub mod common;
/// Simulator configuration (defaults, general settings).
pub mod config;
/// CPU core (architectural state, execution loop).
pub mod core;
/// Instruction set (encoding, instruction table, disassembly).
pub mod isa;
/// Fixed 16-byte RAM with checked addressing.
pub mod memory;
/// Binary image file helpers.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Two-pass assembler; construct with an [`isa::InstructionSet`].
pub use crate::asm::Assembler;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and stats.
pub use crate::core::Cpu;
/// The injected instruction set definition shared by CPU and assembler.
pub use crate::isa::InstructionSet;
/// The machine's 16-byte memory.
pub use crate::memory::Ram;
