//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. Every
//! instruction passes through it: `OPq` selects its function from `ifun`, all
//! other instructions add (address arithmetic, stack adjustment, moves).
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (with signed-overflow detection)
//! - [`logic`]:      And, Xor

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical operations (and, xor).
pub mod logic;

use crate::core::arch::flags::ConditionCodes;
use crate::isa::opcodes::AluFn;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `fun` - The ALU function to perform
    /// * `a`   - `aluA` operand
    /// * `b`   - `aluB` operand
    ///
    /// # Returns
    ///
    /// The wrapping 64-bit result. Subtraction computes `b - a`.
    ///
    /// # Examples
    ///
    /// ```
    /// use y86sim_core::core::units::alu::Alu;
    /// use y86sim_core::isa::AluFn;
    ///
    /// assert_eq!(Alu::execute(AluFn::Add, 5, 7), 12);
    /// assert_eq!(Alu::execute(AluFn::Sub, 3, 10), 7);
    /// assert_eq!(Alu::execute(AluFn::Xor, 0b1100, 0b1010), 0b0110);
    /// ```
    pub fn execute(fun: AluFn, a: u64, b: u64) -> u64 {
        match fun {
            AluFn::Add | AluFn::Sub => arithmetic::execute(fun, a, b),
            AluFn::And | AluFn::Xor => logic::execute(fun, a, b),
        }
    }

    /// Condition codes produced by an operation and its result.
    ///
    /// `OF` is only ever set by `Add`/`Sub`; `ZF` and `SF` follow the result.
    pub fn flags(fun: AluFn, a: u64, b: u64, result: u64) -> ConditionCodes {
        let of = match fun {
            AluFn::Add => arithmetic::add_overflows(a, b),
            AluFn::Sub => arithmetic::sub_overflows(a, b),
            AluFn::And | AluFn::Xor => false,
        };
        ConditionCodes::new(result == 0, (result as i64) < 0, of)
    }
}
