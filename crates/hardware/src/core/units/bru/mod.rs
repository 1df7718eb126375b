//! Branch resolution unit (BRU).
//!
//! This module evaluates `jXX`/`cmovXX` conditions against the condition codes
//! and provides the static fetch-time PC prediction.

/// Static "predict taken" PC predictor.
pub mod static_bp;

pub use self::static_bp::predict_pc;

use crate::core::arch::flags::ConditionCodes;
use crate::isa::opcodes::Condition;

/// Evaluates a branch / conditional-move condition.
///
/// # Arguments
///
/// * `cond` - Condition from the instruction's `ifun`.
/// * `cc`   - Current condition codes.
///
/// # Returns
///
/// `true` if the branch is taken or the move is performed.
pub const fn condition_holds(cond: Condition, cc: &ConditionCodes) -> bool {
    let lt = cc.sf ^ cc.of;
    match cond {
        Condition::Always => true,
        Condition::Le => lt || cc.zf,
        Condition::L => lt,
        Condition::E => cc.zf,
        Condition::Ne => !cc.zf,
        Condition::Ge => !lt,
        Condition::G => !lt && !cc.zf,
    }
}
