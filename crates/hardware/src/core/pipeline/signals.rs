//! Pipeline control signals and per-stage outputs.
//!
//! This module defines the records each stage publishes during the low phase. It provides:
//! 1. **Register Control:** The normal/stall/bubble decision applied to a pipeline register.
//! 2. **Live Outputs:** Values a stage computes that other stages read in the same cycle
//!    (forwarding sources, branch outcome, memory status).
//! 3. **Pending Writes:** Architectural updates computed in the low phase and applied in the
//!    high phase (condition codes, memory store, register writes).
//!
//! Every record is produced once per cycle and is read-only afterwards.

use crate::common::error::Status;
use crate::common::reg::RegId;
use crate::core::arch::flags::ConditionCodes;
use crate::core::pipeline::hazards::ForwardSource;
use crate::isa::opcodes::Opcode;

/// Commit operation for one pipeline register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LatchControl {
    /// Output takes the staged input.
    #[default]
    Normal,
    /// Output is held.
    Stall,
    /// Output is reset to a `nop`.
    Bubble,
}

impl LatchControl {
    /// Combines stall and bubble requests. A bubble takes precedence over a stall.
    pub const fn resolve(stall: bool, bubble: bool) -> Self {
        if bubble {
            Self::Bubble
        } else if stall {
            Self::Stall
        } else {
            Self::Normal
        }
    }
}

/// Fetch stage outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchOutputs {
    /// Address the instruction was fetched from.
    pub f_pc: u64,
    /// Predicted address of the next instruction.
    pub pred_pc: u64,
    /// Instruction code staged into D.
    pub icode: Opcode,
    /// Function code staged into D.
    pub ifun: u8,
    /// Status staged into D.
    pub stat: Status,
}

/// Fetch-owned hazard signals, resolved after Decode and Execute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchControl {
    /// Hold F (predicted PC).
    pub f_stall: bool,
    /// Hold D.
    pub d_stall: bool,
    /// Squash the instruction entering D.
    pub d_bubble: bool,
}

impl FetchControl {
    /// Control applied to F.
    pub const fn f(&self) -> LatchControl {
        LatchControl::resolve(self.f_stall, false)
    }

    /// Control applied to D.
    pub const fn d(&self) -> LatchControl {
        LatchControl::resolve(self.d_stall, self.d_bubble)
    }
}

/// Decode stage outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOutputs {
    /// Source register of `valA`.
    pub src_a: RegId,
    /// Source register of `valB`.
    pub src_b: RegId,
    /// Selected `valA`.
    pub val_a: u64,
    /// Selected `valB`.
    pub val_b: u64,
    /// Where `valA` came from.
    pub fwd_a: ForwardSource,
    /// Where `valB` came from.
    pub fwd_b: ForwardSource,
    /// Squash the instruction entering E.
    pub e_bubble: bool,
}

impl Default for DecodeOutputs {
    fn default() -> Self {
        Self {
            src_a: RegId::NONE,
            src_b: RegId::NONE,
            val_a: 0,
            val_b: 0,
            fwd_a: ForwardSource::None,
            fwd_b: ForwardSource::None,
            e_bubble: false,
        }
    }
}

impl DecodeOutputs {
    /// Control applied to E.
    pub const fn e(&self) -> LatchControl {
        LatchControl::resolve(false, self.e_bubble)
    }
}

/// Execute stage outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecuteOutputs {
    /// Destination of `valE` after the conditional-move check.
    pub e_dst_e: RegId,
    /// ALU result.
    pub e_val_e: u64,
    /// Branch taken / move performed.
    pub cnd: bool,
    /// Condition codes to install during the high phase.
    pub cc_update: Option<ConditionCodes>,
    /// Squash the instruction entering M.
    pub m_bubble: bool,
}

impl Default for ExecuteOutputs {
    fn default() -> Self {
        Self {
            e_dst_e: RegId::NONE,
            e_val_e: 0,
            cnd: false,
            cc_update: None,
            m_bubble: false,
        }
    }
}

impl ExecuteOutputs {
    /// Control applied to M.
    pub const fn m(&self) -> LatchControl {
        LatchControl::resolve(false, self.m_bubble)
    }
}

/// A memory write staged by the Memory stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingStore {
    /// Target address.
    pub addr: u64,
    /// 8-byte value.
    pub val: u64,
}

/// Memory stage outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryOutputs {
    /// Loaded value (zero when nothing is read).
    pub m_val_m: u64,
    /// Status after the data access.
    pub m_stat: Status,
    /// Store to apply during the high phase.
    pub store: Option<PendingStore>,
}

/// A register write staged by the Writeback stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegWrite {
    /// Destination; `RNONE` is a no-op.
    pub dst: RegId,
    /// Value to write.
    pub val: u64,
}

impl Default for RegWrite {
    fn default() -> Self {
        Self {
            dst: RegId::NONE,
            val: 0,
        }
    }
}

/// Writeback stage outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WritebackOutputs {
    /// Status of the instruction in W.
    pub stat: Status,
    /// The instruction in W ends the run.
    pub halt: bool,
    /// A real instruction completed this cycle.
    pub retired: bool,
    /// `valE → dstE` then `valM → dstM`.
    pub writes: [RegWrite; 2],
}
