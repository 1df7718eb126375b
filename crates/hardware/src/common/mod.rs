//! Common utilities and types used throughout the Y86-64 simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Word size, instruction field widths and register counts.
//! 2. **Status and errors:** The per-instruction status tag and the crate's error types.
//! 3. **Register Management:** Register identifiers and the architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Status tag and error types.
pub mod error;

/// Register identifiers and register file implementation.
pub mod reg;

pub use error::{LoadError, MemoryFault, SimError, Status};
pub use reg::{RegId, RegisterFile};
