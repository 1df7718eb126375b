//! Register Id and Register File Tests.

use pretty_assertions::assert_eq;
use y86sim_core::common::{RegId, RegisterFile};

// ══════════════════════════════════════════════════════════
// 1. Register ids
// ══════════════════════════════════════════════════════════

#[test]
fn new_masks_to_a_nibble() {
    assert_eq!(RegId::new(0x13), RegId::RBX);
    assert_eq!(RegId::new(0xFF), RegId::NONE);
}

#[test]
fn none_is_default_and_has_no_index() {
    assert_eq!(RegId::default(), RegId::NONE);
    assert!(RegId::NONE.is_none());
    assert_eq!(RegId::NONE.index(), None);
    assert_eq!(RegId::R14.index(), Some(14));
}

#[test]
fn names_follow_assembly_syntax() {
    assert_eq!(RegId::RAX.name(), "%rax");
    assert_eq!(RegId::RSP.name(), "%rsp");
    assert_eq!(RegId::R14.name(), "%r14");
    assert_eq!(RegId::NONE.to_string(), "----");
}

// ══════════════════════════════════════════════════════════
// 2. Register file
// ══════════════════════════════════════════════════════════

#[test]
fn registers_start_at_zero() {
    let regs = RegisterFile::new();
    assert!(regs.iter().all(|(_, v)| v == 0));
    assert_eq!(regs.iter().count(), 15);
}

#[test]
fn write_then_read() {
    let mut regs = RegisterFile::new();
    regs.write(RegId::RBX, 0xDEAD_BEEF);
    assert_eq!(regs.read(RegId::RBX), 0xDEAD_BEEF);
    assert_eq!(regs.get(RegId::RBX), Some(0xDEAD_BEEF));
}

#[test]
fn write_to_none_is_dropped() {
    let mut regs = RegisterFile::new();
    regs.write(RegId::NONE, 99);
    assert_eq!(regs, RegisterFile::new());
}

#[test]
fn read_of_none_is_zero() {
    let mut regs = RegisterFile::new();
    regs.write(RegId::R14, 7);
    assert_eq!(regs.read(RegId::NONE), 0);
    assert_eq!(regs.get(RegId::NONE), None);
}

#[test]
fn display_prints_rows_of_three() {
    let mut regs = RegisterFile::new();
    regs.write(RegId::RDX, 0xC);
    let text = regs.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains(" %rdx: 000000000000000c"));
    assert!(lines[4].contains("%r14"));
}
