//! Static Branch Predictor.
//!
//! Implements the "always taken" policy: every `jXX` and `call` is predicted to
//! go to its constant target. Returns are not predicted; Fetch stalls on them
//! until the return address reaches Writeback.

use crate::isa::opcodes::Opcode;

/// Predicts the address of the next instruction to fetch.
///
/// # Arguments
///
/// * `icode` - Instruction just fetched.
/// * `val_c` - Its constant word.
/// * `val_p` - Address of the sequentially following instruction.
pub const fn predict_pc(icode: Opcode, val_c: u64, val_p: u64) -> u64 {
    match icode {
        Opcode::Jxx | Opcode::Call => val_c,
        _ => val_p,
    }
}
