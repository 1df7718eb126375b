//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It performs:
//! 1. **Register Selection:** Derives `srcA`, `srcB`, `dstE` and `dstM` from the instruction.
//! 2. **Operand Forwarding:** Picks the youngest in-flight value for each source register.
//! 3. **Hazard Detection:** Requests an E bubble on a branch misprediction or load-use hazard.

use crate::common::reg::RegId;
use crate::core::pipeline::hazards::{
    ForwardSource, ForwardingPaths, load_use_hazard, mispredicted_branch,
};
use crate::core::pipeline::latches::{DValues, EReg, EValues};
use crate::core::pipeline::signals::DecodeOutputs;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::disasm::mnemonic;
use crate::isa::opcodes::Opcode;

/// Register read through `valA`.
pub const fn src_a(d: &DValues) -> RegId {
    match d.icode {
        Opcode::Cmovxx | Opcode::Rmmovq | Opcode::Opq | Opcode::Pushq => d.ra,
        Opcode::Popq | Opcode::Ret => RegId::RSP,
        _ => RegId::NONE,
    }
}

/// Register read through `valB`.
pub const fn src_b(d: &DValues) -> RegId {
    match d.icode {
        Opcode::Opq | Opcode::Rmmovq | Opcode::Mrmovq => d.rb,
        Opcode::Pushq | Opcode::Popq | Opcode::Call | Opcode::Ret => RegId::RSP,
        _ => RegId::NONE,
    }
}

/// Register that receives `valE`.
pub const fn dst_e(d: &DValues) -> RegId {
    match d.icode {
        Opcode::Cmovxx | Opcode::Irmovq | Opcode::Opq => d.rb,
        Opcode::Pushq | Opcode::Popq | Opcode::Call | Opcode::Ret => RegId::RSP,
        _ => RegId::NONE,
    }
}

/// Register that receives `valM`.
pub const fn dst_m(d: &DValues) -> RegId {
    match d.icode {
        Opcode::Mrmovq | Opcode::Popq => d.ra,
        _ => RegId::NONE,
    }
}

/// Executes the decode stage of the pipeline.
///
/// # Arguments
///
/// * `d` - Committed D register.
/// * `e` - Committed E register (for hazard detection).
/// * `paths` - Forwarding sources, including this cycle's Execute and Memory outputs.
///
/// # Returns
///
/// The stage outputs and the values to stage into E.
pub fn decode_stage(
    d: &DValues,
    e: &EValues,
    paths: &ForwardingPaths<'_>,
) -> (DecodeOutputs, EValues) {
    let src_a = src_a(d);
    let src_b = src_b(d);

    let (val_a, fwd_a) = if matches!(d.icode, Opcode::Call | Opcode::Jxx) {
        (d.val_p, ForwardSource::IncrementedPc)
    } else {
        paths.select(src_a)
    };
    let (val_b, fwd_b) = paths.select(src_b);

    let mispredict = mispredicted_branch(e, paths.execute.cnd);
    let load_use = load_use_hazard(e, src_a, src_b);
    if load_use {
        tracing::debug!(reg = %e.dst_m, "load-use hazard");
    }

    tracing::trace!(
        stage = "D",
        inst = mnemonic(d.icode, d.ifun),
        src_a = %src_a,
        ?fwd_a,
        src_b = %src_b,
        ?fwd_b,
        "decode"
    );

    let out = DecodeOutputs {
        src_a,
        src_b,
        val_a,
        val_b,
        fwd_a,
        fwd_b,
        e_bubble: mispredict || load_use,
    };
    let next = EValues {
        stat: d.stat,
        icode: d.icode,
        ifun: d.ifun,
        val_c: d.val_c,
        val_a,
        val_b,
        dst_e: dst_e(d),
        dst_m: dst_m(d),
        src_a,
        src_b,
    };
    (out, next)
}

/// Applies the high-phase control for E: bubble or normal.
pub fn decode_commit(e: &mut EReg, out: &DecodeOutputs) {
    e.apply(out.e());
}
