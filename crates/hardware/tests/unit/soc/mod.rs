/// Flat memory tests.
pub mod memory;
