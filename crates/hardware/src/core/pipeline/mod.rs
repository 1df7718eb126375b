//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Engine:** The two-phase clock driving every stage and register.
//! 2. **Hazards:** Load-use, return and misprediction detection plus operand forwarding.
//! 3. **Latches:** The F, D, E, M and W pipeline registers.
//! 4. **Signals:** Per-stage output records and register control signals.
//! 5. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 6. **Traits:** Common interface for the pipeline registers.

/// Two-phase clock and low-phase evaluation order.
pub mod engine;

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline registers (F, D, E, M, W).
pub mod latches;

/// Per-stage outputs and register control signals.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline registers.
pub mod traits;

pub use engine::{CycleOutputs, LOW_PHASE_ORDER, PipeRegs, Pipeline, StageId};
