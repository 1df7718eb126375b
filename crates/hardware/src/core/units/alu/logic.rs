//! ALU logical operations.

use crate::isa::opcodes::AluFn;

/// Executes a bitwise operation. Returns `0` for non-logic functions.
pub fn execute(fun: AluFn, a: u64, b: u64) -> u64 {
    match fun {
        AluFn::And => a & b,
        AluFn::Xor => a ^ b,
        _ => 0,
    }
}
