//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. Each stage is split into a low-phase function, which reads
//! committed pipeline registers and live neighbour outputs and returns its outputs
//! record plus the values to stage downstream, and a high-phase commit function. It includes:
//! 1. **Fetch:** Selects the PC, reads and splits instruction bytes, predicts the next PC.
//! 2. **Decode:** Chooses source and destination registers and forwards operands.
//! 3. **Execute:** Runs the ALU, evaluates conditions and computes new condition codes.
//! 4. **Memory:** Performs the data read or validates the data write.
//! 5. **Writeback:** Writes results to the register file and reports halting.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry points.
pub use decode::{decode_commit, decode_stage};
/// Execute stage entry points.
pub use execute::{execute_commit, execute_stage};
/// Fetch stage entry points.
pub use fetch::{fetch_commit, fetch_control, fetch_stage, select_pc};
/// Memory stage entry points.
pub use memory::{memory_commit, memory_stage};
/// Writeback stage entry points.
pub use writeback::{writeback_commit, writeback_stage};
