//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the Y86-64 opcode, function-code and condition definitions, the
//! byte-level instruction layout, and a mnemonic disassembler.
//!
//! # Encoding
//!
//! * Byte 0: `icode` (high nibble) and `ifun` (low nibble).
//! * Byte 1 (optional): `rA` (high nibble) and `rB` (low nibble).
//! * Bytes 1..9 or 2..10 (optional): 8-byte little-endian constant `valC`.

/// Mnemonic disassembly for traces and pipeline views.
pub mod disasm;

/// Instruction byte layout helpers.
pub mod instruction;

/// Opcode, ALU function and branch condition definitions.
pub mod opcodes;

pub use opcodes::{AluFn, Condition, FNONE, Opcode};
