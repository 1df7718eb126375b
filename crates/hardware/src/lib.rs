//! Y86-64 pipelined processor simulator library.
//!
//! This crate implements a cycle-accurate model of the classic five-stage Y86-64 pipeline:
//! 1. **Core:** Fetch, Decode, Execute, Memory and Writeback stages, the F/D/E/M/W pipeline
//!    registers, and the hazard-detection and forwarding network.
//! 2. **Architectural state:** Register file, condition codes and flat byte-addressable memory.
//! 3. **ISA:** Opcode, function-code and condition definitions plus a small disassembler.
//! 4. **Simulation:** `.yo` object loader, run-loop driver, configuration and statistics.

/// Common types and constants (register ids, status tags, errors).
pub mod common;
/// Simulator configuration (defaults and JSON-deserializable structures).
pub mod config;
/// CPU core (architectural state, pipeline, execution units).
pub mod core;
/// Instruction set (opcodes, function codes, disassembly).
pub mod isa;
/// Object loader and the top-level simulator.
pub mod sim;
/// Flat data memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state (registers, memory, condition codes, stats).
pub use crate::core::Cpu;
/// Top-level simulator; owns the CPU and the pipeline side by side.
pub use crate::sim::simulator::Simulator;
