//! Simulator: owns both the CPU and the pipeline side-by-side.
//!
//! The pipeline borrows the CPU mutably for each tick; keeping them as sibling
//! fields lets the driver hand one to the other without any interior mutability.

use std::path::Path;

use crate::common::error::{SimError, Status};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::Pipeline;
use crate::sim::loader::{self, LoadSummary};

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Status of the instruction that stopped the run.
    pub status: Status,
    /// Cycles executed.
    pub cycles: u64,
    /// Instructions retired.
    pub instructions: u64,
}

/// Top-level simulator: CPU architectural state + pipeline.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, condition codes, memory, stats).
    pub cpu: Cpu,
    /// Pipeline registers and the last cycle's stage outputs.
    pub pipeline: Pipeline,
    max_cycles: u64,
    loaded: bool,
    halted: Option<Status>,
}

impl Simulator {
    /// Creates a new simulator in its reset state with nothing loaded.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            pipeline: Pipeline::new(config.general.start_pc),
            max_cycles: config.general.max_cycles,
            loaded: false,
            halted: None,
        }
    }

    /// Loads a `.yo` object file.
    ///
    /// # Errors
    ///
    /// `SimError::Load` if the file is missing, misnamed or malformed; memory is left
    /// unchanged in that case.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, SimError> {
        let summary = loader::load_file(path.as_ref(), &mut self.cpu.mem)?;
        self.loaded = true;
        Ok(summary)
    }

    /// Loads object text directly.
    ///
    /// # Errors
    ///
    /// `SimError::Load` if the text is malformed; memory is left unchanged in that case.
    pub fn load_str(&mut self, text: &str) -> Result<LoadSummary, SimError> {
        let summary = loader::load_str(text, &mut self.cpu.mem)?;
        self.loaded = true;
        Ok(summary)
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Returns
    ///
    /// `true` if the instruction in Writeback this cycle halted the machine.
    pub fn tick(&mut self) -> bool {
        let halt = self.pipeline.tick(&mut self.cpu);
        if halt {
            self.halted = Some(self.pipeline.last.writeback.stat);
        }
        halt
    }

    /// Runs until the machine halts or the cycle limit is reached.
    ///
    /// # Errors
    ///
    /// `SimError::NotLoaded` if no program was loaded and `SimError::CycleLimit` if the
    /// program does not halt within the configured budget.
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        if !self.loaded {
            return Err(SimError::NotLoaded);
        }
        while self.halted.is_none() {
            if self.cpu.stats.cycles >= self.max_cycles {
                tracing::warn!(limit = self.max_cycles, "cycle limit reached");
                return Err(SimError::CycleLimit {
                    limit: self.max_cycles,
                });
            }
            let _ = self.tick();
        }

        let summary = RunSummary {
            status: self.status(),
            cycles: self.cpu.stats.cycles,
            instructions: self.cpu.stats.instructions_retired,
        };
        tracing::info!(
            status = %summary.status,
            cycles = summary.cycles,
            instructions = summary.instructions,
            "run complete"
        );
        Ok(summary)
    }

    /// Status of the machine: the halting instruction's status, or `AOK` while running.
    pub fn status(&self) -> Status {
        self.halted.unwrap_or_default()
    }

    /// Returns `true` once an instruction has halted the machine.
    pub const fn is_halted(&self) -> bool {
        self.halted.is_some()
    }

    /// Dumps registers, condition codes and memory to stdout.
    pub fn dump_state(&self) {
        self.cpu.dump_state();
    }
}
