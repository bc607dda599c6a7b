//! Assembly error definitions.
//!
//! Every assembly error is fatal at the point of detection: the assembler
//! returns immediately and the caller terminates with a nonzero status.
//! Diagnostics are single-line and carry the offending token where one
//! exists.

use thiserror::Error;

/// Fatal assembly error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsmError {
    /// An instruction mnemonic reached end of source before its operand.
    #[error("`{0}` expected an argument")]
    MissingOperand(String),

    /// A bracketed reference named a label no `db` declares.
    #[error("undefined reference {0}")]
    UndefinedSymbol(String),

    /// The program needs more than the 16 bytes the machine can address.
    #[error("program is larger than the 16-byte address space")]
    ImageOverflow,
}
