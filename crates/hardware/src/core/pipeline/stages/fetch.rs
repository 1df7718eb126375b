//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It performs:
//! 1. **PC Selection:** Chooses between a mispredicted branch's fall-through, a returning
//!    `ret`'s address and the predicted PC.
//! 2. **Instruction Read:** Reads the opcode byte, the optional register byte and the
//!    optional constant word, and splits them into fields.
//! 3. **Status:** Tags the instruction `ADR`, `INS`, `HLT` or `AOK`.
//! 4. **Prediction:** Predicts the next PC (`valC` for `jXX`/`call`, `valP` otherwise).
//! 5. **Hazard Control:** Resolves the F stall, D stall and D bubble signals.

use crate::common::error::{MemoryFault, Status};
use crate::common::reg::RegId;
use crate::core::pipeline::hazards::{load_use_hazard, mispredicted_branch, return_in_flight};
use crate::core::pipeline::latches::{DReg, DValues, EValues, FReg, FValues, MValues, WValues};
use crate::core::pipeline::signals::{DecodeOutputs, ExecuteOutputs, FetchControl, FetchOutputs};
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::bru::predict_pc;
use crate::isa::disasm::mnemonic;
use crate::isa::instruction::{next_pc, split_byte, split_regids, valc_addr};
use crate::isa::opcodes::Opcode;
use crate::soc::Memory;

/// Fields read from instruction memory before validation.
struct RawInstruction {
    icode: Result<Opcode, u8>,
    ifun: u8,
    ra: RegId,
    rb: RegId,
    val_c: u64,
    val_p: u64,
}

/// Selects the address to fetch from.
///
/// # Arguments
///
/// * `f` - Committed F register.
/// * `m` - Committed M register (a not-taken `jXX` carries its fall-through in `valA`).
/// * `w` - Committed W register (a `ret` carries its return address in `valM`).
pub fn select_pc(f: &FValues, m: &MValues, w: &WValues) -> u64 {
    if m.icode == Opcode::Jxx && !m.cnd {
        m.val_a
    } else if w.icode == Opcode::Ret {
        w.val_m
    } else {
        f.pred_pc
    }
}

fn read_instruction(mem: &Memory, pc: u64) -> Result<RawInstruction, MemoryFault> {
    let (hi, ifun) = split_byte(mem.read_byte(pc)?);
    let icode = Opcode::try_from(hi);
    let (need_regids, need_valc) =
        icode.map_or((false, false), |op| (op.needs_regids(), op.needs_valc()));

    let (ra, rb) = if need_regids {
        split_regids(mem.read_byte(pc.wrapping_add(1))?)
    } else {
        (RegId::NONE, RegId::NONE)
    };
    let val_c = if need_valc {
        mem.read_long(valc_addr(pc, need_regids))?
    } else {
        0
    };

    Ok(RawInstruction {
        icode,
        ifun,
        ra,
        rb,
        val_c,
        val_p: next_pc(pc, need_regids, need_valc),
    })
}

/// Executes the fetch stage of the pipeline.
///
/// An instruction whose bytes cannot all be read is tagged `ADR`; an undefined
/// instruction code or out-of-range function code is tagged `INS`. Either way the
/// instruction travels on as a `nop` so it has no side effects before it reaches
/// Writeback.
///
/// # Returns
///
/// The stage outputs and the values to stage into D.
pub fn fetch_stage(
    f: &FValues,
    m: &MValues,
    w: &WValues,
    mem: &Memory,
) -> (FetchOutputs, DValues) {
    let f_pc = select_pc(f, m, w);

    let next = match read_instruction(mem, f_pc) {
        Ok(raw) => match raw.icode {
            Ok(icode) if icode.accepts_ifun(raw.ifun) => {
                let stat = if icode == Opcode::Halt {
                    Status::Hlt
                } else {
                    Status::Aok
                };
                DValues {
                    stat,
                    icode,
                    ifun: raw.ifun,
                    ra: raw.ra,
                    rb: raw.rb,
                    val_c: raw.val_c,
                    val_p: raw.val_p,
                }
            }
            _ => {
                tracing::debug!(pc = f_pc, "invalid instruction");
                DValues {
                    stat: Status::Ins,
                    val_p: raw.val_p,
                    ..DValues::default()
                }
            }
        },
        Err(fault) => {
            tracing::debug!(pc = f_pc, %fault, "instruction fetch fault");
            DValues {
                stat: Status::Adr,
                val_p: f_pc.wrapping_add(1),
                ..DValues::default()
            }
        }
    };

    let pred_pc = predict_pc(next.icode, next.val_c, next.val_p);
    tracing::trace!(
        stage = "F",
        pc = f_pc,
        inst = mnemonic(next.icode, next.ifun),
        stat = %next.stat,
        pred_pc,
        "fetch"
    );

    let out = FetchOutputs {
        f_pc,
        pred_pc,
        icode: next.icode,
        ifun: next.ifun,
        stat: next.stat,
    };
    (out, next)
}

/// Resolves the Fetch-owned hazard signals.
///
/// Must run after Decode (for `srcA`/`srcB`) and Execute (for `Cnd`).
///
/// * `F_stall` = load-use hazard OR `ret` in D/E/M.
/// * `D_stall` = load-use hazard.
/// * `D_bubble` = mispredicted branch OR (`ret` in D/E/M AND NOT load-use).
pub fn fetch_control(
    d: &DValues,
    e: &EValues,
    m: &MValues,
    decode: &DecodeOutputs,
    execute: &ExecuteOutputs,
) -> FetchControl {
    let load_use = load_use_hazard(e, decode.src_a, decode.src_b);
    let ret = return_in_flight(d, e, m);
    FetchControl {
        f_stall: load_use || ret,
        d_stall: load_use,
        d_bubble: mispredicted_branch(e, execute.cnd) || (ret && !load_use),
    }
}

/// Applies the high-phase control for F and D.
///
/// F is stalled or advanced; D is bubbled, stalled or advanced (bubble wins).
pub fn fetch_commit(f: &mut FReg, d: &mut DReg, ctl: &FetchControl) {
    f.apply(ctl.f());
    d.apply(ctl.d());
}
