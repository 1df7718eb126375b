//! Core processor implementation.
//!
//! This module contains the CPU architectural state, the five-stage pipeline
//! and the execution units the stages drive.

/// Architectural components (condition codes).
pub mod arch;

/// CPU architectural state container.
pub mod cpu;

/// Instruction pipeline implementation (stages, pipeline registers, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Cpu;
