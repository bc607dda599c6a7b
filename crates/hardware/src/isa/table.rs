//! The injected instruction lookup table.
//!
//! Both the assembler and the CPU resolve instructions through an
//! [`InstructionSet`] value constructed once at startup and passed in
//! explicitly. Keeping the table a plain value (rather than a process-wide
//! static) lets tests and alternative front ends substitute their own.

use std::slice;

use crate::isa::instruction::{Decoded, InstructionBits, Opcode};

/// One entry of the instruction table.
#[derive(Debug, Clone, Copy)]
pub struct InstructionDef {
    /// The operation this entry describes.
    pub opcode: Opcode,
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Whether the assembler consumes an operand token after the mnemonic.
    pub takes_operand: bool,
    /// Encoded size in bytes. Every instruction occupies exactly one byte;
    /// the assembler's pass one advances its offset by this amount.
    pub size: u8,
}

/// Ordered lookup table over the defined instructions.
#[derive(Debug, Clone)]
pub struct InstructionSet {
    defs: Vec<InstructionDef>,
}

impl InstructionSet {
    /// Builds the standard nine-instruction table.
    pub fn standard() -> Self {
        let defs = Opcode::ALL
            .iter()
            .map(|&opcode| InstructionDef {
                opcode,
                mnemonic: opcode.mnemonic(),
                takes_operand: opcode.takes_operand(),
                size: 1,
            })
            .collect();
        Self { defs }
    }

    /// Looks up an entry by assembly mnemonic.
    pub fn by_mnemonic(&self, mnemonic: &str) -> Option<&InstructionDef> {
        self.defs.iter().find(|def| def.mnemonic == mnemonic)
    }

    /// Looks up an entry by opcode nibble.
    pub fn by_opcode(&self, nibble: u8) -> Option<&InstructionDef> {
        self.defs.iter().find(|def| def.opcode.nibble() == nibble)
    }

    /// Decodes an instruction byte against this table.
    ///
    /// Returns `None` when the high nibble is not a defined opcode; the CPU
    /// turns that into an illegal-instruction fault.
    pub fn decode(&self, byte: u8) -> Option<Decoded> {
        let def = self.by_opcode(byte.opcode())?;
        Some(Decoded {
            raw: byte,
            opcode: def.opcode,
            operand: byte.operand(),
        })
    }

    /// Iterates the table entries in encoding order.
    pub fn iter(&self) -> slice::Iter<'_, InstructionDef> {
        self.defs.iter()
    }

    /// Returns the number of defined instructions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl Default for InstructionSet {
    /// Returns the standard table.
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a InstructionSet {
    type Item = &'a InstructionDef;
    type IntoIter = slice::Iter<'a, InstructionDef>;

    /// Iterates the table entries in encoding order.
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
