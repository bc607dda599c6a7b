//! SAP-style 8-bit machine assembler CLI.
//!
//! Compiles mnemonic source text into a binary image with the two-pass
//! assembler. In debug mode the resolved symbol table is dumped to stderr,
//! one `name @ 0xN` line per `db` declaration.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use sapsim_core::asm::Assembler;
use sapsim_core::isa::InstructionSet;
use sapsim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "sap-asm",
    version,
    about = "Two-pass assembler for the SAP-style 8-bit machine",
    long_about = "Assemble mnemonic source text into a binary image.\n\nExamples:\n  sap-asm program.s -o program.bin\n  sap-asm -d program.s -o program.bin"
)]
struct Cli {
    /// Assembly source file.
    file: PathBuf,

    /// Output image file.
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Dump the resolved symbol table to stderr.
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.file).unwrap_or_else(|e| {
        eprintln!("sap-asm: cannot read '{}': {}", cli.file.display(), e);
        process::exit(1);
    });

    let assembler = Assembler::new(InstructionSet::standard());
    let program = assembler.assemble(&source).unwrap_or_else(|e| {
        eprintln!("sap-asm: {e}");
        process::exit(1);
    });

    if cli.debug {
        for symbol in program.symbols.iter() {
            eprintln!("{} @ {:#x}", symbol.name, symbol.offset);
        }
    }

    if let Err(e) = loader::write_image(&cli.output, &program.image) {
        eprintln!("sap-asm: cannot write '{}': {}", cli.output.display(), e);
        process::exit(1);
    }
}
