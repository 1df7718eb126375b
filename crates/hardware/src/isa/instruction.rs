//! Instruction byte layout.
//!
//! Splits instruction bytes into their 4-bit fields and computes instruction
//! lengths from the presence of the register byte and the constant word.

use crate::common::constants::{NIBBLE_MASK, NIBBLE_SHIFT, OPCODE_BYTES, REGID_BYTES, VALC_BYTES};
use crate::common::reg::RegId;

/// Splits a byte into its high and low nibbles.
#[inline]
pub const fn split_byte(byte: u8) -> (u8, u8) {
    ((byte >> NIBBLE_SHIFT) & NIBBLE_MASK, byte & NIBBLE_MASK)
}

/// Splits a register-specifier byte into `(rA, rB)`.
#[inline]
pub const fn split_regids(byte: u8) -> (RegId, RegId) {
    let (a, b) = split_byte(byte);
    (RegId::new(a), RegId::new(b))
}

/// Address of the instruction following one at `pc`.
///
/// `pc + 1`, plus one for the register byte, plus eight for the constant.
#[inline]
pub const fn next_pc(pc: u64, need_regids: bool, need_valc: bool) -> u64 {
    let mut len = OPCODE_BYTES;
    if need_regids {
        len += REGID_BYTES;
    }
    if need_valc {
        len += VALC_BYTES;
    }
    pc.wrapping_add(len)
}

/// Address of the constant word of an instruction at `pc`.
#[inline]
pub const fn valc_addr(pc: u64, need_regids: bool) -> u64 {
    if need_regids {
        pc.wrapping_add(OPCODE_BYTES + REGID_BYTES)
    } else {
        pc.wrapping_add(OPCODE_BYTES)
    }
}
