//! Instruction disassembler.
//!
//! Converts a decoded instruction into the one-line form the debug tracer
//! emits before each execute step:
//!
//! ```text
//! 0x0: ldi 0x5
//! 0x3: lda [0x9]
//! 0x1: out
//! ```
//!
//! Memory operands render bracketed, immediate and jump operands render
//! bare, and operand-less opcodes render the mnemonic alone.

use crate::isa::instruction::{Decoded, OperandKind};

/// Renders a decoded instruction as `<pc>: <mnemonic> [<operand>]`.
///
/// # Arguments
///
/// * `pc` - Address the instruction was fetched from.
/// * `decoded` - The decoded instruction.
pub fn disassemble(pc: u8, decoded: &Decoded) -> String {
    let mnemonic = decoded.opcode.mnemonic();
    match decoded.opcode.operand_kind() {
        OperandKind::Memory => format!("{pc:#x}: {mnemonic} [{:#x}]", decoded.operand),
        OperandKind::Value => format!("{pc:#x}: {mnemonic} {:#x}", decoded.operand),
        OperandKind::None => format!("{pc:#x}: {mnemonic}"),
    }
}
