//! Data and Control Hazard Detection and Forwarding.
//!
//! This module implements the hazard network of the pipeline. It provides:
//! 1. **Load-Use Detection:** A load in E whose destination a decoding instruction reads.
//! 2. **Return Detection:** A `ret` anywhere in D, E or M, which stalls Fetch until the
//!    return address reaches Writeback.
//! 3. **Misprediction Detection:** A `jXX` in E whose condition failed.
//! 4. **Forwarding:** Selection of the youngest in-flight value for a source register.

use crate::common::reg::{RegId, RegisterFile};
use crate::core::pipeline::latches::{DValues, EValues, MValues, WValues};
use crate::core::pipeline::signals::{ExecuteOutputs, MemoryOutputs};
use crate::isa::opcodes::Opcode;

/// Checks for a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in E loads into a register that
/// the instruction in D reads. The loaded value only exists after the Memory stage,
/// so forwarding cannot help and D must wait one cycle.
///
/// # Arguments
///
/// * `e` - Committed E register.
/// * `src_a` - Decode's `srcA`.
/// * `src_b` - Decode's `srcB`.
pub fn load_use_hazard(e: &EValues, src_a: RegId, src_b: RegId) -> bool {
    e.icode.is_load() && (e.dst_m == src_a || e.dst_m == src_b)
}

/// Checks whether a `ret` is in D, E or M.
pub fn return_in_flight(d: &DValues, e: &EValues, m: &MValues) -> bool {
    [d.icode, e.icode, m.icode].contains(&Opcode::Ret)
}

/// Checks whether the `jXX` in E was predicted taken but falls through.
pub fn mispredicted_branch(e: &EValues, cnd: bool) -> bool {
    e.icode == Opcode::Jxx && !cnd
}

/// Origin of a value selected by the forwarding network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForwardSource {
    /// The source id was `RNONE`; the value is zero.
    None,
    /// `e_valE`, produced by Execute this cycle.
    ExecuteE,
    /// `M.valE`.
    MemoryE,
    /// `m_valM`, produced by Memory this cycle.
    MemoryM,
    /// `W.valM`.
    WritebackM,
    /// `W.valE`.
    WritebackE,
    /// The register file.
    RegisterFile,
    /// `D.valP`, used as `valA` by `call` and `jXX`.
    IncrementedPc,
}

/// Every value a decoding instruction may forward from, in priority order.
#[derive(Clone, Copy, Debug)]
pub struct ForwardingPaths<'a> {
    /// Live Execute outputs.
    pub execute: &'a ExecuteOutputs,
    /// Committed M register.
    pub m: &'a MValues,
    /// Live Memory outputs.
    pub memory: &'a MemoryOutputs,
    /// Committed W register.
    pub w: &'a WValues,
    /// Architectural register file.
    pub regs: &'a RegisterFile,
}

impl ForwardingPaths<'_> {
    /// Selects the value for `src`, first match wins.
    ///
    /// Priority: `e_valE`, `m_valM`, `M.valE`, `W.valM`, `W.valE`, register file.
    /// `m_valM` ahead of `M.valE` makes `popq %rsp` forward the loaded value.
    ///
    /// # Returns
    ///
    /// The selected value and where it came from.
    pub fn select(&self, src: RegId) -> (u64, ForwardSource) {
        if src.is_none() {
            return (0, ForwardSource::None);
        }
        if src == self.execute.e_dst_e {
            (self.execute.e_val_e, ForwardSource::ExecuteE)
        } else if src == self.m.dst_m {
            (self.memory.m_val_m, ForwardSource::MemoryM)
        } else if src == self.m.dst_e {
            (self.m.val_e, ForwardSource::MemoryE)
        } else if src == self.w.dst_m {
            (self.w.val_m, ForwardSource::WritebackM)
        } else if src == self.w.dst_e {
            (self.w.val_e, ForwardSource::WritebackE)
        } else {
            (self.regs.read(src), ForwardSource::RegisterFile)
        }
    }
}
