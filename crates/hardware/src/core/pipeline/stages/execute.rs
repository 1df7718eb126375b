//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It performs:
//! 1. **Operand Selection:** Chooses `aluA` and `aluB` by instruction.
//! 2. **ALU Operation:** Computes `valE`.
//! 3. **Condition Codes:** Computes new flags for `OPq`, suppressed once a fault is
//!    in Memory or Writeback.
//! 4. **Condition Evaluation:** Decides `Cnd` for `jXX` and `cmovXX`.
//! 5. **Fault Squashing:** Requests an M bubble while a fault drains.

use crate::common::constants::STACK_ADJUST;
use crate::common::reg::RegId;
use crate::core::arch::flags::ConditionCodes;
use crate::core::pipeline::latches::{EValues, MReg, MValues, WValues};
use crate::core::pipeline::signals::{ExecuteOutputs, MemoryOutputs};
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::alu::Alu;
use crate::core::units::bru::condition_holds;
use crate::isa::disasm::mnemonic;
use crate::isa::opcodes::{AluFn, Condition, Opcode};

/// First ALU operand.
pub const fn alu_a(e: &EValues) -> u64 {
    match e.icode {
        Opcode::Cmovxx | Opcode::Opq => e.val_a,
        Opcode::Irmovq | Opcode::Rmmovq | Opcode::Mrmovq => e.val_c,
        Opcode::Call | Opcode::Pushq => STACK_ADJUST.wrapping_neg(),
        Opcode::Ret | Opcode::Popq => STACK_ADJUST,
        _ => 0,
    }
}

/// Second ALU operand.
pub const fn alu_b(e: &EValues) -> u64 {
    match e.icode {
        Opcode::Rmmovq
        | Opcode::Mrmovq
        | Opcode::Opq
        | Opcode::Call
        | Opcode::Pushq
        | Opcode::Ret
        | Opcode::Popq => e.val_b,
        _ => 0,
    }
}

/// ALU function: `ifun` for `OPq`, addition for everything else.
pub fn alu_fun(e: &EValues) -> AluFn {
    if e.icode == Opcode::Opq {
        AluFn::try_from(e.ifun).unwrap_or_default()
    } else {
        AluFn::Add
    }
}

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `e` - Committed E register.
/// * `cc` - Committed condition codes.
/// * `memory` - This cycle's Memory outputs (`m_stat`).
/// * `w` - Committed W register (`W.stat`).
///
/// # Returns
///
/// The stage outputs and the values to stage into M.
pub fn execute_stage(
    e: &EValues,
    cc: &ConditionCodes,
    memory: &MemoryOutputs,
    w: &WValues,
) -> (ExecuteOutputs, MValues) {
    let fun = alu_fun(e);
    let a = alu_a(e);
    let b = alu_b(e);
    let val_e = Alu::execute(fun, a, b);

    let fault_downstream = memory.m_stat.is_exception() || w.stat.is_exception();
    let set_cc = e.icode == Opcode::Opq && !fault_downstream;
    let cc_update = set_cc.then(|| Alu::flags(fun, a, b, val_e));

    let cnd = match e.icode {
        Opcode::Jxx | Opcode::Cmovxx => {
            Condition::try_from(e.ifun).is_ok_and(|c| condition_holds(c, cc))
        }
        _ => false,
    };

    let e_dst_e = if e.icode == Opcode::Cmovxx && !cnd {
        RegId::NONE
    } else {
        e.dst_e
    };

    tracing::trace!(
        stage = "E",
        inst = mnemonic(e.icode, e.ifun),
        val_e,
        cnd,
        dst_e = %e_dst_e,
        "execute"
    );

    let out = ExecuteOutputs {
        e_dst_e,
        e_val_e: val_e,
        cnd,
        cc_update,
        m_bubble: fault_downstream,
    };
    let next = MValues {
        stat: e.stat,
        icode: e.icode,
        cnd,
        val_e,
        val_a: e.val_a,
        dst_e: e_dst_e,
        dst_m: e.dst_m,
    };
    (out, next)
}

/// Installs new condition codes and applies the high-phase control for M.
pub fn execute_commit(m: &mut MReg, cc: &mut ConditionCodes, out: &ExecuteOutputs) {
    if let Some(flags) = out.cc_update {
        *cc = flags;
    }
    m.apply(out.m());
}
