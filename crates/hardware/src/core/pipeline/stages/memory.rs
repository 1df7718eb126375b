//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline. It performs:
//! 1. **Address Selection:** `valE` for stores, `mrmovq` and `call`; `valA` for `popq` and `ret`.
//! 2. **Loads:** One 8-byte little-endian read into `m_valM`.
//! 3. **Stores:** Bounds-checks the write and stages it for the high phase.
//! 4. **Fault Detection:** Out-of-range accesses turn the status into `ADR`.

use crate::common::constants::WORD_SIZE;
use crate::common::error::Status;
use crate::core::pipeline::latches::{MValues, WReg, WValues};
use crate::core::pipeline::signals::{MemoryOutputs, PendingStore};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::opcodes::Opcode;
use crate::soc::Memory;

/// Data address of the instruction in M.
pub const fn mem_addr(m: &MValues) -> u64 {
    match m.icode {
        Opcode::Rmmovq | Opcode::Pushq | Opcode::Call | Opcode::Mrmovq => m.val_e,
        Opcode::Popq | Opcode::Ret => m.val_a,
        _ => 0,
    }
}

/// Whether the instruction in M reads memory.
pub const fn mem_read(m: &MValues) -> bool {
    matches!(m.icode, Opcode::Mrmovq | Opcode::Popq | Opcode::Ret)
}

/// Whether the instruction in M writes memory.
pub const fn mem_write(m: &MValues) -> bool {
    matches!(m.icode, Opcode::Rmmovq | Opcode::Pushq | Opcode::Call)
}

/// Executes the memory stage of the pipeline.
///
/// Reads see memory as committed at the end of the previous cycle; the store is
/// returned as a pending write.
///
/// # Returns
///
/// The stage outputs and the values to stage into W.
pub fn memory_stage(m: &MValues, mem: &Memory) -> (MemoryOutputs, WValues) {
    let addr = mem_addr(m);
    let mut m_val_m = 0;
    let mut store = None;
    let mut fault = None;

    if mem_read(m) {
        match mem.read_long(addr) {
            Ok(val) => m_val_m = val,
            Err(err) => fault = Some(err),
        }
    } else if mem_write(m) {
        match mem.check(addr, WORD_SIZE) {
            Ok(_) => store = Some(PendingStore { addr, val: m.val_a }),
            Err(err) => fault = Some(err),
        }
    }

    let m_stat = if let Some(err) = fault {
        tracing::debug!(%err, "data access fault");
        Status::Adr
    } else {
        m.stat
    };

    tracing::trace!(
        stage = "M",
        icode = ?m.icode,
        addr,
        m_val_m,
        m_stat = %m_stat,
        "memory"
    );

    let out = MemoryOutputs {
        m_val_m,
        m_stat,
        store,
    };
    let next = WValues {
        stat: m_stat,
        icode: m.icode,
        val_e: m.val_e,
        val_m: m_val_m,
        dst_e: m.dst_e,
        dst_m: m.dst_m,
    };
    (out, next)
}

/// Applies the pending store and advances W. W never stalls or bubbles.
pub fn memory_commit(w: &mut WReg, mem: &mut Memory, out: &MemoryOutputs) {
    if let Some(store) = out.store {
        if let Err(err) = mem.write_long(store.addr, store.val) {
            tracing::warn!(%err, "store dropped");
        }
    }
    w.normal();
}
