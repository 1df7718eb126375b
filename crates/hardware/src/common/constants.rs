//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Word size and the default memory capacity.
//! 2. **Instruction Constants:** Field widths and masks used to split instruction bytes.
//! 3. **Register Constants:** Number of architectural registers.

/// Size of a Y86-64 machine word in bytes.
pub const WORD_SIZE: u64 = 8;

/// Default capacity of the flat data/instruction memory (4 KiB).
pub const DEFAULT_MEMORY_SIZE: usize = 0x1000;

/// Default cycle limit applied by the driver loop.
pub const DEFAULT_MAX_CYCLES: u64 = 100_000;

/// Number of architectural registers (`%rax` through `%r14`).
pub const REGISTER_COUNT: usize = 15;

/// Mask for a single 4-bit instruction field (icode, ifun, rA, rB).
pub const NIBBLE_MASK: u8 = 0xF;

/// Shift that moves the high nibble of an instruction byte into the low nibble.
pub const NIBBLE_SHIFT: u8 = 4;

/// Length of the opcode byte.
pub const OPCODE_BYTES: u64 = 1;

/// Length of the register-specifier byte.
pub const REGID_BYTES: u64 = 1;

/// Length of the immediate/displacement constant.
pub const VALC_BYTES: u64 = 8;

/// Stack pointer adjustment applied by push, pop, call and ret.
pub const STACK_ADJUST: u64 = WORD_SIZE;
