//! SAP-style 8-bit machine emulator CLI.
//!
//! Loads a binary image into the 16-byte address space and runs the
//! fetch-decode-execute loop until the program halts or faults. The
//! program's `out` lines are the only stdout output; diagnostics, the
//! instruction trace, and statistics go to stderr.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use sapsim_core::config::Config;
use sapsim_core::core::Cpu;
use sapsim_core::isa::InstructionSet;
use sapsim_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "sap-emu",
    version,
    about = "SAP-style 8-bit machine emulator",
    long_about = "Run a binary image on the 8-bit breadboard machine.\n\nExamples:\n  sap-emu program.bin\n  sap-emu -d program.bin"
)]
struct Cli {
    /// Program image to execute (at most 16 bytes are loaded).
    file: PathBuf,

    /// Trace each decoded instruction to stderr and print statistics.
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Stop after this many cycles (0 = unbounded).
    #[arg(long, default_value_t = 0)]
    max_steps: u64,
}

fn main() {
    let cli = Cli::parse();

    let image = loader::load_image(&cli.file).unwrap_or_else(|e| {
        eprintln!("sap-emu: cannot read '{}': {}", cli.file.display(), e);
        process::exit(1);
    });

    let mut config = Config::default();
    config.general.trace_instructions = cli.debug;
    config.general.max_steps = cli.max_steps;

    let mut cpu = Cpu::new(InstructionSet::standard(), &config);
    cpu.load_image(&image);

    if let Err(fault) = cpu.run() {
        eprintln!("sap-emu: {fault}");
        process::exit(1);
    }

    if cli.debug {
        cpu.stats.print();
    }

    if !cpu.is_halted() {
        eprintln!("sap-emu: step budget exhausted before halt");
        process::exit(1);
    }
}
