


/// Memory stage tests.
pub mod memory;
