//! System memory.
//!
//! The Y86-64 machine has a single flat byte-addressable memory shared by
//! instruction fetch and data access. There is no bus, no MMIO and no cache.

/// Flat byte-addressable memory.
pub mod memory;

pub use memory::Memory;
