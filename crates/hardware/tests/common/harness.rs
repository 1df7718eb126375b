//! Simulator Test Harness.
//!
//! `TestContext` owns a `Simulator`, loads programs built with
//! [`Program`](super::builder::program::Program) through the `.yo` loader and
//! exposes the architectural state for assertions.

use tracing_subscriber::EnvFilter;
use y86sim_core::Simulator;
use y86sim_core::common::RegId;
use y86sim_core::config::Config;
use y86sim_core::core::Cpu;
use y86sim_core::core::arch::ConditionCodes;
use y86sim_core::sim::RunSummary;

use super::builder::program::Program;

/// Routes simulator logs to the test output. `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A simulator wrapped with assertion helpers.
pub struct TestContext {
    /// The simulator under test.
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a context with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a context with a custom configuration.
    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        Self {
            sim: Simulator::new(config),
        }
    }

    /// Loads a program through the `.yo` loader.
    pub fn load(mut self, program: &Program) -> Self {
        let _ = self
            .sim
            .load_str(&program.to_yo())
            .expect("builder output is valid object text");
        self
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Runs to completion, panicking on a cycle-limit overrun.
    pub fn run(&mut self) -> RunSummary {
        self.sim.run().expect("program halts within the cycle limit")
    }

    /// Runs `n` cycles; returns `true` if any of them halted.
    pub fn step(&mut self, n: usize) -> bool {
        (0..n).fold(false, |halted, _| self.sim.tick() || halted)
    }

    /// Read a register value.
    pub fn reg(&self, r: RegId) -> u64 {
        self.sim.cpu.regs.read(r)
    }

    /// Current condition codes.
    pub fn cc(&self) -> ConditionCodes {
        self.sim.cpu.cc
    }

    /// Read an 8-byte word from memory.
    pub fn long(&self, addr: u64) -> u64 {
        self.sim.cpu.mem.read_long(addr).expect("address in range")
    }

    /// Cycles executed so far.
    pub fn cycles(&self) -> u64 {
        self.sim.cpu.stats.cycles
    }
}
