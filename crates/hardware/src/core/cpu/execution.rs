//! Main execution loop.
//!
//! This module implements the machine's cycle. Each step performs:
//! 1. **Fetch:** `MAR <- PC`, `IR <- Memory[MAR]`.
//! 2. **Increment:** `PC <- PC + 1`, wrapping at the 4-bit boundary.
//! 3. **Decode:** Split IR into opcode and operand nibbles; an undefined
//!    opcode is a terminal fault, never a no-op.
//! 4. **Execute:** Apply the operation to the architectural state.
//!
//! The trace line for a cycle is emitted after decode and before execute,
//! and never alters architectural state.

use super::{Cpu, State};
use crate::common::constants::ADDR_MASK;
use crate::common::error::Fault;
use crate::isa::disasm;
use crate::isa::instruction::{Decoded, InstructionBits, Opcode};

impl Cpu {
    /// Executes one fetch-decode-execute cycle.
    ///
    /// Stepping a halted or faulted machine is a no-op returning `Ok`.
    ///
    /// # Errors
    ///
    /// Returns the fault (and transitions to `State::Faulted`) when the
    /// fetched byte has an undefined opcode or a memory access is out of
    /// range. A fault is immediately terminal; there are no retries.
    pub fn step(&mut self) -> Result<(), Fault> {
        if !matches!(self.state(), State::Running) {
            return Ok(());
        }
        match self.cycle() {
            Ok(()) => Ok(()),
            Err(fault) => {
                self.stats.faults += 1;
                self.set_state(State::Faulted(fault));
                Err(fault)
            }
        }
    }

    /// Runs cycles until the machine halts, faults, or exhausts the
    /// configured step budget.
    ///
    /// When the budget ends the run the machine is left in `State::Running`;
    /// callers distinguish that from a halt via [`Cpu::is_halted`].
    ///
    /// # Errors
    ///
    /// Propagates the first fault, leaving the machine in `State::Faulted`.
    pub fn run(&mut self) -> Result<(), Fault> {
        let budget = self.step_budget();
        while matches!(self.state(), State::Running) {
            if budget != 0 && self.stats.cycles >= budget {
                tracing::debug!(cycles = self.stats.cycles, "step budget exhausted");
                break;
            }
            self.step()?;
        }
        Ok(())
    }

    /// One cycle: fetch, increment, decode, execute.
    fn cycle(&mut self) -> Result<(), Fault> {
        // T0 - PC out, MAR in
        self.mar = self.pc;

        // T1 - RAM out, IR in
        self.ir = self.ram.read(self.mar)?;

        // T2 - PC++ (wraps inside the 16-cell space)
        self.pc = (self.pc + 1) & ADDR_MASK;

        // T3 - decode and execute
        let decoded = self
            .instruction_set()
            .decode(self.ir)
            .ok_or(Fault::IllegalInstruction {
                opcode: self.ir.opcode(),
                pc: self.mar,
            })?;

        if self.trace {
            eprintln!("{}", disasm::disassemble(self.mar, &decoded));
        }

        self.execute(&decoded)?;

        self.stats.cycles += 1;
        self.stats.instructions_retired += 1;
        Ok(())
    }

    /// Applies one decoded instruction to the architectural state.
    fn execute(&mut self, decoded: &Decoded) -> Result<(), Fault> {
        let operand = decoded.operand;
        match decoded.opcode {
            Opcode::Lda => {
                self.mar = operand;
                self.ra = self.ram.read(self.mar)?;
                self.stats.inst_load += 1;
            }
            Opcode::Add => {
                self.mar = operand;
                self.rb = self.ram.read(self.mar)?;
                // Carry iff the true 8-bit sum would overflow.
                self.carry = self.rb > u8::MAX - self.ra;
                self.ra = self.ra.wrapping_add(self.rb);
                self.stats.inst_alu += 1;
            }
            Opcode::Sub => {
                self.mar = operand;
                self.rb = self.ram.read(self.mar)?;
                self.ra = self.ra.wrapping_sub(self.rb);
                self.stats.inst_alu += 1;
            }
            Opcode::Sta => {
                self.ram.write(operand, self.ra)?;
                self.stats.inst_store += 1;
            }
            Opcode::Out => {
                let ra = self.ra;
                let _ = writeln!(self.output_mut(), "{ra}");
                self.stats.inst_io += 1;
            }
            Opcode::Jmp => {
                self.pc = operand;
                self.stats.inst_branch += 1;
            }
            Opcode::Ldi => {
                self.ra = operand;
                self.stats.inst_alu += 1;
            }
            Opcode::Jc => {
                if self.carry {
                    self.pc = operand;
                }
                self.stats.inst_branch += 1;
            }
            Opcode::Hlt => {
                tracing::debug!(cycles = self.stats.cycles, "halt");
                self.set_state(State::Halted);
            }
        }
        Ok(())
    }
}
