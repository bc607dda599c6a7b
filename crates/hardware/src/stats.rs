//! Execution statistics collection and reporting.
//!
//! Tracks what a run actually did: total cycles, retired instructions, the
//! instruction mix by class, and faults. The machine is unpipelined, so
//! cycles and retired instructions differ only when a cycle ends in a
//! fault.

/// Execution statistics for one run.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    /// Total cycles completed.
    pub cycles: u64,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,
    /// Count of `lda` instructions retired.
    pub inst_load: u64,
    /// Count of `sta` instructions retired.
    pub inst_store: u64,
    /// Count of `add`, `sub`, and `ldi` instructions retired.
    pub inst_alu: u64,
    /// Count of `jmp` and `jc` instructions retired.
    pub inst_branch: u64,
    /// Count of `out` instructions retired.
    pub inst_io: u64,
    /// Number of terminal faults taken (0 or 1 per run).
    pub faults: u64,
}

impl SimStats {
    /// Prints a summary to stderr.
    ///
    /// Stderr keeps the report out of the program's own `out` stream.
    pub fn print(&self) {
        eprintln!("Cycles:       {:>6}", self.cycles);
        eprintln!("Instructions: {:>6}", self.instructions_retired);
        eprintln!(
            "  load {} / store {} / alu {} / branch {} / io {}",
            self.inst_load, self.inst_store, self.inst_alu, self.inst_branch, self.inst_io
        );
        if self.faults > 0 {
            eprintln!("Faults:       {:>6}", self.faults);
        }
    }
}
