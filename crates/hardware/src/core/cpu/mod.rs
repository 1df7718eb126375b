//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! architectural state. It coordinates the following:
//! 1. **State Management:** Register file, condition codes and flat memory.
//! 2. **Statistics:** Counters updated by the pipeline engine every cycle.
//! 3. **Observability:** Dumping the final machine state.
//!
//! The pipeline registers are not part of the CPU; the `Simulator` owns them alongside it.

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::arch::flags::ConditionCodes;
use crate::soc::Memory;
use crate::stats::SimStats;

/// Architectural state of the Y86-64 machine.
///
/// Only the Writeback stage writes `regs`, only the Memory stage writes `mem` and only
/// the Execute stage writes `cc`, each during the high phase of a cycle.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Register file, `%rax` through `%r14`.
    pub regs: RegisterFile,
    /// Condition codes.
    pub cc: ConditionCodes,
    /// Instruction and data memory.
    pub mem: Memory,
    /// Performance statistics.
    pub stats: SimStats,
    /// Print the pipeline registers after every cycle.
    pub trace: bool,
}

impl Cpu {
    /// Creates a CPU in its reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory size and tracing flag.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            cc: ConditionCodes::default(),
            mem: Memory::new(config.memory.size),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Dumps registers, condition codes and memory to stdout.
    pub fn dump_state(&self) {
        self.regs.dump();
        println!("{}", self.cc);
        println!();
        self.mem.dump();
    }
}
