//! Simulation driver and program loading.
//!
//! Provides the `.yo` object loader and the top-level `Simulator` that owns the
//! CPU and the pipeline.

/// `.yo` object-text loader.
pub mod loader;

/// Top-level simulator: CPU + pipeline.
pub mod simulator;

pub use loader::LoadSummary;
pub use simulator::{RunSummary, Simulator};
