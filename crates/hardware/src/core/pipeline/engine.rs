//! Pipeline engine: the two-phase clock.
//!
//! This module drives one clock cycle of the pipeline. It provides:
//! 1. **Low Phase:** Every stage evaluated once, in `LOW_PHASE_ORDER`, each publishing an
//!    outputs record and staging values into its downstream register.
//! 2. **High Phase:** All five registers commit (normal, stall or bubble) together, and the
//!    staged register writes, condition-code update and memory store are applied.
//! 3. **Bookkeeping:** Statistics, hazard events and the optional pipeline view.

use std::fmt;

use crate::core::Cpu;
use crate::core::pipeline::hazards::ForwardingPaths;
use crate::core::pipeline::latches::{DReg, EReg, FReg, FValues, MReg, WReg};
use crate::core::pipeline::signals::{
    DecodeOutputs, ExecuteOutputs, FetchControl, FetchOutputs, LatchControl, MemoryOutputs,
    WritebackOutputs,
};
use crate::core::pipeline::stages::{
    decode_commit, decode_stage, execute_commit, execute_stage, fetch_commit, fetch_control,
    fetch_stage, memory_commit, memory_stage, writeback_commit, writeback_stage,
};
use crate::isa::disasm::mnemonic;

/// A pipeline stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Instruction fetch.
    Fetch,
    /// Decode and operand forwarding.
    Decode,
    /// ALU and condition evaluation.
    Execute,
    /// Data memory access.
    Memory,
    /// Register-file write.
    Writeback,
}

/// Order in which stages are evaluated during the low phase.
///
/// Each stage runs after every stage whose live outputs it reads:
/// * Writeback reads only W.
/// * Memory reads only M and publishes `m_valM` and `m_stat`.
/// * Execute reads `m_stat` (condition-code suppression and the M bubble).
/// * Decode forwards from `e_valE` and `m_valM` and needs `Cnd` for the E bubble.
/// * Fetch resolves its stall and bubble signals from Decode's source registers and
///   Execute's branch outcome.
pub const LOW_PHASE_ORDER: [StageId; 5] = [
    StageId::Writeback,
    StageId::Memory,
    StageId::Execute,
    StageId::Decode,
    StageId::Fetch,
];

/// The five pipeline registers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipeRegs {
    /// Predicted PC.
    pub f: FReg,
    /// Fetch → Decode.
    pub d: DReg,
    /// Decode → Execute.
    pub e: EReg,
    /// Execute → Memory.
    pub m: MReg,
    /// Memory → Writeback.
    pub w: WReg,
}

impl PipeRegs {
    /// Creates pipeline registers in their reset state, with F predicting `start_pc`.
    pub fn new(start_pc: u64) -> Self {
        let mut regs = Self::default();
        regs.f.force(FValues { pred_pc: start_pc });
        regs
    }
}

impl fmt::Display for PipeRegs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fr = self.f.outputs();
        let d = self.d.outputs();
        let e = self.e.outputs();
        let m = self.m.outputs();
        let w = self.w.outputs();
        writeln!(f, "F: predPC={:#06x}", fr.pred_pc)?;
        writeln!(
            f,
            "D: {:<7} {} rA={} rB={} valC={:#x} valP={:#06x}",
            mnemonic(d.icode, d.ifun),
            d.stat,
            d.ra,
            d.rb,
            d.val_c,
            d.val_p
        )?;
        writeln!(
            f,
            "E: {:<7} {} valA={:#x} valB={:#x} dstE={} dstM={}",
            mnemonic(e.icode, e.ifun),
            e.stat,
            e.val_a,
            e.val_b,
            e.dst_e,
            e.dst_m
        )?;
        writeln!(
            f,
            "M: {:<7} {} Cnd={} valE={:#x} valA={:#x} dstE={} dstM={}",
            m.icode.name(),
            m.stat,
            u8::from(m.cnd),
            m.val_e,
            m.val_a,
            m.dst_e,
            m.dst_m
        )?;
        writeln!(
            f,
            "W: {:<7} {} valE={:#x} valM={:#x} dstE={} dstM={}",
            w.icode.name(),
            w.stat,
            w.val_e,
            w.val_m,
            w.dst_e,
            w.dst_m
        )
    }
}

/// Every stage's outputs from one low phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleOutputs {
    /// Fetch outputs.
    pub fetch: FetchOutputs,
    /// Fetch-owned hazard signals.
    pub control: FetchControl,
    /// Decode outputs.
    pub decode: DecodeOutputs,
    /// Execute outputs.
    pub execute: ExecuteOutputs,
    /// Memory outputs.
    pub memory: MemoryOutputs,
    /// Writeback outputs.
    pub writeback: WritebackOutputs,
}

/// The five-stage pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    /// Pipeline registers.
    pub regs: PipeRegs,
    /// Outputs of the most recent low phase.
    pub last: CycleOutputs,
}

impl Pipeline {
    /// Creates a pipeline in its reset state that starts fetching at `start_pc`.
    pub fn new(start_pc: u64) -> Self {
        Self {
            regs: PipeRegs::new(start_pc),
            last: CycleOutputs::default(),
        }
    }

    /// Run one clock cycle.
    ///
    /// # Arguments
    ///
    /// * `cpu` - Architectural state; only modified during the high phase.
    ///
    /// # Returns
    ///
    /// `true` if the instruction in Writeback halts the run.
    pub fn tick(&mut self, cpu: &mut Cpu) -> bool {
        let out = self.low_phase(cpu);
        self.high_phase(cpu, &out);
        self.record(cpu, &out);
        self.last = out;

        if cpu.trace {
            eprintln!("cycle {}\n{}", cpu.stats.cycles, self.regs);
        }
        out.writeback.halt
    }

    fn low_phase(&mut self, cpu: &Cpu) -> CycleOutputs {
        let f = self.regs.f.outputs();
        let d = self.regs.d.outputs();
        let e = self.regs.e.outputs();
        let m = self.regs.m.outputs();
        let w = self.regs.w.outputs();
        let mut out = CycleOutputs::default();

        for stage in LOW_PHASE_ORDER {
            match stage {
                StageId::Writeback => out.writeback = writeback_stage(&w),
                StageId::Memory => {
                    let (memory, next) = memory_stage(&m, &cpu.mem);
                    out.memory = memory;
                    self.regs.w.stage(next);
                }
                StageId::Execute => {
                    let (execute, next) = execute_stage(&e, &cpu.cc, &out.memory, &w);
                    out.execute = execute;
                    self.regs.m.stage(next);
                }
                StageId::Decode => {
                    let paths = ForwardingPaths {
                        execute: &out.execute,
                        m: &m,
                        memory: &out.memory,
                        w: &w,
                        regs: &cpu.regs,
                    };
                    let (decode, next) = decode_stage(&d, &e, &paths);
                    out.decode = decode;
                    self.regs.e.stage(next);
                }
                StageId::Fetch => {
                    let (fetch, next) = fetch_stage(&f, &m, &w, &cpu.mem);
                    out.fetch = fetch;
                    out.control = fetch_control(&d, &e, &m, &out.decode, &out.execute);
                    self.regs.f.stage(FValues {
                        pred_pc: fetch.pred_pc,
                    });
                    self.regs.d.stage(next);
                }
            }
        }
        out
    }

    fn high_phase(&mut self, cpu: &mut Cpu, out: &CycleOutputs) {
        fetch_commit(&mut self.regs.f, &mut self.regs.d, &out.control);
        decode_commit(&mut self.regs.e, &out.decode);
        execute_commit(&mut self.regs.m, &mut cpu.cc, &out.execute);
        memory_commit(&mut self.regs.w, &mut cpu.mem, &out.memory);
        writeback_commit(&mut cpu.regs, &out.writeback);
    }

    fn record(&self, cpu: &mut Cpu, out: &CycleOutputs) {
        let stats = &mut cpu.stats;
        stats.cycles += 1;
        if out.writeback.retired {
            stats.instructions_retired += 1;
        }

        let load_use = out.control.d_stall;
        if load_use {
            stats.stalls_data += 1;
        } else if out.control.f_stall {
            stats.stalls_control += 1;
        }
        if out.decode.e_bubble && !load_use {
            stats.branch_mispredictions += 1;
            tracing::debug!(
                target_pc = self.regs.m.outputs().val_a,
                "branch mispredicted, squashing D and E"
            );
        }
        if out.decode.e() == LatchControl::Bubble {
            stats.bubbles_execute += 1;
        }
        if out.execute.m() == LatchControl::Bubble {
            stats.bubbles_memory += 1;
        }
    }
}
