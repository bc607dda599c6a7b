//! Instruction encoding and table tests.
//!
//! Covers the bijectivity contract (`decode(encode(op, operand))` returns
//! the original pair for every defined opcode), field extraction, reserved
//! opcodes, mnemonic lookup, and the disassembler's line shapes.

use rstest::rstest;

use sapsim_core::isa::instruction::{InstructionBits, Opcode, encode};
use sapsim_core::isa::{InstructionSet, disasm};

#[test]
fn test_encode_decode_bijective_for_all_defined_pairs() {
    let iset = InstructionSet::standard();
    for opcode in Opcode::ALL {
        for operand in 0..16u8 {
            let byte = encode(opcode, operand);
            let decoded = iset.decode(byte).unwrap();
            assert_eq!(decoded.opcode, opcode);
            assert_eq!(decoded.operand, operand);
            assert_eq!(decoded.raw, byte);
        }
    }
}

#[test]
fn test_instruction_bits_split_the_nibbles() {
    assert_eq!(0x75u8.opcode(), 0x7);
    assert_eq!(0x75u8.operand(), 0x5);
    assert_eq!(0xF0u8.opcode(), 0xF);
    assert_eq!(0xF0u8.operand(), 0x0);
}

#[test]
fn test_encode_masks_the_operand_to_four_bits() {
    assert_eq!(encode(Opcode::Ldi, 0xFF), 0x7F);
    assert_eq!(encode(Opcode::Lda, 0x10), 0x10);
}

#[rstest]
#[case(0x0)]
#[case(0x9)]
#[case(0xA)]
#[case(0xB)]
#[case(0xC)]
#[case(0xD)]
#[case(0xE)]
fn test_reserved_opcodes_do_not_decode(#[case] nibble: u8) {
    let iset = InstructionSet::standard();
    assert!(Opcode::from_nibble(nibble).is_none());
    for operand in 0..16u8 {
        assert!(iset.decode((nibble << 4) | operand).is_none());
    }
}

#[test]
fn test_mnemonic_lookup() {
    let iset = InstructionSet::standard();

    let lda = iset.by_mnemonic("lda").unwrap();
    assert_eq!(lda.opcode, Opcode::Lda);
    assert!(lda.takes_operand);
    assert_eq!(lda.size, 1);

    let out = iset.by_mnemonic("out").unwrap();
    assert!(!out.takes_operand);
    let hlt = iset.by_mnemonic("hlt").unwrap();
    assert!(!hlt.takes_operand);

    assert!(iset.by_mnemonic("nop").is_none());
    // `db` is a pseudo-mnemonic owned by the assembler, not an instruction.
    assert!(iset.by_mnemonic("db").is_none());
}

#[test]
fn test_table_is_ordered_and_complete() {
    let iset = InstructionSet::standard();
    assert_eq!(iset.len(), 9);
    let nibbles: Vec<u8> = iset.iter().map(|def| def.opcode.nibble()).collect();
    assert_eq!(nibbles, [0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0xF]);
}

#[test]
fn test_disassembly_line_shapes() {
    let iset = InstructionSet::standard();

    let ldi = iset.decode(0x75).unwrap();
    assert_eq!(disasm::disassemble(0x0, &ldi), "0x0: ldi 0x5");

    let lda = iset.decode(0x19).unwrap();
    assert_eq!(disasm::disassemble(0x3, &lda), "0x3: lda [0x9]");

    let jmp = iset.decode(0x63).unwrap();
    assert_eq!(disasm::disassemble(0x2, &jmp), "0x2: jmp 0x3");

    let out = iset.decode(0x50).unwrap();
    assert_eq!(disasm::disassemble(0x1, &out), "0x1: out");

    let hlt = iset.decode(0xF0).unwrap();
    assert_eq!(disasm::disassemble(0xF, &hlt), "0xf: hlt");
}
