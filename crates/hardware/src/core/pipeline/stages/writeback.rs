//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! stages the register-file writes of the instruction in W and reports whether
//! that instruction ends the run. An instruction with a non-`AOK` status writes
//! nothing.

use crate::common::reg::RegisterFile;
use crate::core::pipeline::latches::WValues;
use crate::core::pipeline::signals::{RegWrite, WritebackOutputs};
use crate::isa::opcodes::Opcode;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `w` - Committed W register.
///
/// # Returns
///
/// The pending writes (`valE → dstE`, then `valM → dstM`) and the halt flag.
pub fn writeback_stage(w: &WValues) -> WritebackOutputs {
    if !w.stat.is_ok() {
        tracing::trace!(stage = "W", stat = %w.stat, "writeback halt");
        return WritebackOutputs {
            stat: w.stat,
            halt: true,
            ..WritebackOutputs::default()
        };
    }

    tracing::trace!(
        stage = "W",
        icode = ?w.icode,
        dst_e = %w.dst_e,
        val_e = w.val_e,
        dst_m = %w.dst_m,
        val_m = w.val_m,
        "writeback"
    );

    WritebackOutputs {
        stat: w.stat,
        halt: false,
        retired: w.icode != Opcode::Nop,
        writes: [
            RegWrite {
                dst: w.dst_e,
                val: w.val_e,
            },
            RegWrite {
                dst: w.dst_m,
                val: w.val_m,
            },
        ],
    }
}

/// Applies the pending register writes in order.
pub fn writeback_commit(regs: &mut RegisterFile, out: &WritebackOutputs) {
    for write in out.writes {
        regs.write(write.dst, write.val);
    }
}
