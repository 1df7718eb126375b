//! Memory Stage Tests.
//!
//! Address selection, loads, staged stores and out-of-range faults.

use y86sim_core::common::{RegId, Status};
use y86sim_core::core::pipeline::latches::{MValues, WReg};
use y86sim_core::core::pipeline::signals::{MemoryOutputs, PendingStore};
use y86sim_core::core::pipeline::stages::memory::{mem_addr, mem_read, mem_write};
use y86sim_core::core::pipeline::stages::{memory_commit, memory_stage};
use y86sim_core::isa::Opcode;
use y86sim_core::soc::Memory;

use crate::common::builder::pipeline_state::m_load;

fn memory() -> Memory {
    let mut mem = Memory::new(0x100);
    mem.write_long(0x40, 0xFEED).unwrap();
    mem
}

#[test]
fn address_and_direction_by_instruction() {
    let m = |icode| MValues {
        icode,
        val_e: 0x10,
        val_a: 0x20,
        ..MValues::default()
    };
    assert_eq!(mem_addr(&m(Opcode::Rmmovq)), 0x10);
    assert_eq!(mem_addr(&m(Opcode::Call)), 0x10);
    assert_eq!(mem_addr(&m(Opcode::Popq)), 0x20);
    assert_eq!(mem_addr(&m(Opcode::Ret)), 0x20);
    assert!(mem_read(&m(Opcode::Mrmovq)));
    assert!(mem_write(&m(Opcode::Pushq)));
    assert!(!mem_read(&m(Opcode::Opq)));
    assert!(!mem_write(&m(Opcode::Opq)));
}

#[test]
fn load_reads_little_endian_word() {
    let (out, next) = memory_stage(&m_load(RegId::RAX, 0x40), &memory());
    assert_eq!(out.m_val_m, 0xFEED);
    assert_eq!(out.m_stat, Status::Aok);
    assert_eq!(next.val_m, 0xFEED);
    assert_eq!(next.dst_m, RegId::RAX);
}

#[test]
fn out_of_range_load_is_adr() {
    let (out, next) = memory_stage(&m_load(RegId::RAX, 0xFC), &memory());
    assert_eq!(out.m_stat, Status::Adr);
    assert_eq!(out.m_val_m, 0);
    assert_eq!(next.stat, Status::Adr);
}

#[test]
fn store_is_staged_not_applied() {
    let m = MValues {
        icode: Opcode::Rmmovq,
        val_e: 0x80,
        val_a: 5,
        ..MValues::default()
    };
    let mem = memory();
    let (out, _) = memory_stage(&m, &mem);
    assert_eq!(out.store, Some(PendingStore { addr: 0x80, val: 5 }));
    assert_eq!(mem.read_long(0x80).unwrap(), 0);
}

#[test]
fn out_of_range_store_is_dropped() {
    let m = MValues {
        icode: Opcode::Pushq,
        val_e: u64::MAX - 7,
        val_a: 5,
        ..MValues::default()
    };
    let (out, _) = memory_stage(&m, &memory());
    assert_eq!(out.m_stat, Status::Adr);
    assert_eq!(out.store, None);
}

#[test]
fn commit_applies_store_and_advances_w() {
    let mut mem = memory();
    let mut w = WReg::default();
    let m = MValues {
        icode: Opcode::Rmmovq,
        val_e: 0x80,
        val_a: 5,
        ..MValues::default()
    };
    let (out, next) = memory_stage(&m, &mem);
    w.stage(next);
    memory_commit(&mut w, &mut mem, &out);
    assert_eq!(mem.read_long(0x80).unwrap(), 5);
    assert_eq!(w.outputs().icode, Opcode::Rmmovq);
}

#[test]
fn non_memory_instruction_passes_status_through() {
    let m = MValues {
        stat: Status::Hlt,
        icode: Opcode::Halt,
        ..MValues::default()
    };
    let (out, _) = memory_stage(&m, &memory());
    let expected = MemoryOutputs {
        m_val_m: 0,
        m_stat: Status::Hlt,
        store: None,
    };
    assert_eq!(out, expected);
}
