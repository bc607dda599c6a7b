//! Two-pass assembler.
//!
//! Compiles mnemonic source text into the machine's binary image format.
//! It performs:
//! 1. **Pass one:** Tokenize the whole source, tracking a running byte
//!    offset; record each `db` label at the offset its cell will occupy.
//!    Offsets are discovered in file order, so labels may be declared
//!    anywhere (including after their first use) and still resolve.
//! 2. **Pass two:** Re-tokenize from the start and emit one encoded byte
//!    per instruction or data declaration, in token-encounter order, with
//!    no intermediate instruction list and no backpatching.
//!
//! Tokens that are neither a mnemonic nor `db` emit nothing, which is what
//! makes free-form comments work.

/// Fatal assembly errors.
pub mod error;
/// Data-label symbol table.
pub mod symbols;
/// Lazy, restartable token stream.
pub mod tokenizer;

pub use error::AsmError;
pub use symbols::{Symbol, SymbolTable};
pub use tokenizer::Tokens;

use crate::common::constants::RAM_SIZE;
use crate::isa::InstructionSet;
use crate::isa::instruction::encode;

/// Pseudo-mnemonic reserving one named, initialized byte of storage.
const DATA_BYTE: &str = "db";

/// A successfully assembled program.
#[derive(Debug, Clone)]
pub struct Program {
    /// Encoded image, one byte per instruction or data cell, at most 16
    /// bytes.
    pub image: Vec<u8>,
    /// The labels recorded in pass one, in declaration order.
    pub symbols: SymbolTable,
}

/// Two-pass assembler over an injected instruction set.
#[derive(Debug, Clone)]
pub struct Assembler {
    iset: InstructionSet,
}

impl Assembler {
    /// Creates an assembler for the given instruction set.
    pub const fn new(iset: InstructionSet) -> Self {
        Self { iset }
    }

    /// Assembles source text into a binary image.
    ///
    /// # Errors
    ///
    /// Returns the first [`AsmError`] encountered: a mnemonic missing its
    /// operand, a `db` missing its name or value, an undefined bracketed
    /// reference, or a program larger than the address space.
    pub fn assemble(&self, source: &str) -> Result<Program, AsmError> {
        let symbols = self.collect_symbols(source)?;
        let image = self.encode_image(source, &symbols)?;
        Ok(Program { image, symbols })
    }

    /// Pass one: walk the token stream and record `db` labels at the byte
    /// offsets their cells will occupy.
    fn collect_symbols(&self, source: &str) -> Result<SymbolTable, AsmError> {
        let mut symbols = SymbolTable::new();
        let mut offset: usize = 0;
        let mut tokens = Tokens::new(source);

        while let Some(token) = tokens.next() {
            if let Some(def) = self.iset.by_mnemonic(token) {
                offset = bump(offset, usize::from(def.size))?;
            } else if token == DATA_BYTE {
                let name = tokens
                    .next()
                    .ok_or_else(|| AsmError::MissingOperand(DATA_BYTE.to_string()))?;
                // The initial value is consumed here so it is not seen as a
                // stray token; it is parsed in pass two.
                let _value = tokens
                    .next()
                    .ok_or_else(|| AsmError::MissingOperand(DATA_BYTE.to_string()))?;
                if offset >= RAM_SIZE {
                    return Err(AsmError::ImageOverflow);
                }
                symbols.define(name, offset as u8);
                tracing::debug!(name, offset, "data byte");
                offset += 1;
            }
        }
        Ok(symbols)
    }

    /// Pass two: re-tokenize and emit encoded bytes in encounter order.
    fn encode_image(&self, source: &str, symbols: &SymbolTable) -> Result<Vec<u8>, AsmError> {
        let mut image = Vec::new();
        let mut tokens = Tokens::new(source);

        while let Some(token) = tokens.next() {
            if let Some(def) = self.iset.by_mnemonic(token) {
                let operand = if def.takes_operand {
                    let argument = tokens
                        .next()
                        .ok_or_else(|| AsmError::MissingOperand(token.to_string()))?;
                    resolve_operand(argument, symbols)?
                } else {
                    0
                };
                emit(&mut image, encode(def.opcode, operand))?;
            } else if token == DATA_BYTE {
                let _name = tokens
                    .next()
                    .ok_or_else(|| AsmError::MissingOperand(DATA_BYTE.to_string()))?;
                let value = tokens
                    .next()
                    .ok_or_else(|| AsmError::MissingOperand(DATA_BYTE.to_string()))?;
                emit(&mut image, parse_decimal(value))?;
            }
            // Anything else is a comment or stray token: no bytes.
        }
        Ok(image)
    }
}

/// Advances a pass-one offset, refusing to pass the end of the address
/// space.
fn bump(offset: usize, size: usize) -> Result<usize, AsmError> {
    let next = offset + size;
    if next > RAM_SIZE {
        return Err(AsmError::ImageOverflow);
    }
    Ok(next)
}

/// Appends one byte to the image, refusing to pass the end of the address
/// space.
fn emit(image: &mut Vec<u8>, byte: u8) -> Result<(), AsmError> {
    if image.len() >= RAM_SIZE {
        return Err(AsmError::ImageOverflow);
    }
    image.push(byte);
    Ok(())
}

/// Resolves an operand token to its 4-bit value.
///
/// A token beginning with `[` is a symbolic reference: the brackets are
/// stripped and the name is matched exactly against the table. Any other
/// token is a base-16 literal.
fn resolve_operand(token: &str, symbols: &SymbolTable) -> Result<u8, AsmError> {
    if let Some(inner) = token.strip_prefix('[') {
        let name = inner.strip_suffix(']').unwrap_or(inner);
        return symbols
            .resolve(name)
            .ok_or_else(|| AsmError::UndefinedSymbol(token.to_string()));
    }
    Ok(parse_hex(token))
}

/// Parses a base-16 literal with `strtol` prefix semantics.
///
/// An optional `0x`/`0X` prefix is accepted, parsing stops at the first
/// non-hex character, and a token with no leading hex digits is 0. The
/// result is truncated to 8 bits; `encode` keeps only the low nibble.
fn parse_hex(token: &str) -> u8 {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    let end = digits
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(digits.len());
    u32::from_str_radix(&digits[..end], 16).map_or(0, |value| value as u8)
}

/// Parses a base-10 literal with `atoi` semantics.
///
/// An optional sign is accepted, parsing stops at the first non-digit, a
/// token with no leading digits is 0, and the value is truncated to 8 bits
/// (so `300` stores as 44 and `-1` as 255).
fn parse_decimal(token: &str) -> u8 {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let mut value: i64 = 0;
    for byte in digits[..end].bytes() {
        value = value
            .wrapping_mul(10)
            .wrapping_add(i64::from(byte - b'0'));
    }
    if negative {
        value = value.wrapping_neg();
    }
    value as u8
}
