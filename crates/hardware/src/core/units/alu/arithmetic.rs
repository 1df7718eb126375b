//! ALU arithmetic operations.
//!
//! Implements 64-bit wrapping addition and subtraction together with the
//! signed-overflow predicates that drive the `OF` condition code.

use crate::isa::opcodes::AluFn;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `fun` - The ALU function to perform (must be `Add` or `Sub`).
/// * `a`   - `aluA` operand.
/// * `b`   - `aluB` operand.
///
/// # Returns
///
/// `a + b` or `b - a`, wrapping. Returns `0` for non-arithmetic functions.
pub fn execute(fun: AluFn, a: u64, b: u64) -> u64 {
    match fun {
        AluFn::Add => a.wrapping_add(b),
        AluFn::Sub => b.wrapping_sub(a),
        _ => 0,
    }
}

/// Whether `a + b` overflows as signed 64-bit integers.
#[inline]
pub const fn add_overflows(a: u64, b: u64) -> bool {
    (a as i64).checked_add(b as i64).is_none()
}

/// Whether `b - a` overflows as signed 64-bit integers.
#[inline]
pub const fn sub_overflows(a: u64, b: u64) -> bool {
    (b as i64).checked_sub(a as i64).is_none()
}
