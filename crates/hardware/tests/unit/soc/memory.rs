//! Flat Memory Tests.

use pretty_assertions::assert_eq;
use y86sim_core::common::MemoryFault;
use y86sim_core::soc::Memory;

#[test]
fn starts_zeroed() {
    let mem = Memory::new(32);
    assert_eq!(mem.len(), 32);
    assert!(!mem.is_empty());
    assert!(mem.as_slice().iter().all(|&b| b == 0));
}

#[test]
fn long_is_little_endian() {
    let mut mem = Memory::new(32);
    mem.write_long(3, 0x0102_0304_0506_0708).unwrap();
    assert_eq!(mem.read_byte(3).unwrap(), 0x08);
    assert_eq!(mem.read_byte(10).unwrap(), 0x01);
    assert_eq!(mem.read_long(3).unwrap(), 0x0102_0304_0506_0708);
}

#[test]
fn unaligned_access_is_allowed() {
    let mut mem = Memory::new(32);
    mem.write_long(5, 9).unwrap();
    assert_eq!(mem.read_long(5).unwrap(), 9);
}

#[test]
fn access_touching_last_byte_succeeds() {
    let mut mem = Memory::new(16);
    mem.write_long(8, 1).unwrap();
    mem.write_byte(15, 2).unwrap();
}

#[test]
fn access_past_end_faults() {
    let mem = Memory::new(16);
    assert_eq!(mem.read_long(9), Err(MemoryFault { addr: 9, len: 8 }));
    assert_eq!(mem.read_byte(16), Err(MemoryFault { addr: 16, len: 1 }));
}

#[test]
fn address_overflow_faults() {
    let mem = Memory::new(16);
    assert!(mem.check(u64::MAX, 8).is_err());
}

#[test]
fn failed_bulk_load_writes_nothing() {
    let mut mem = Memory::new(8);
    assert!(mem.load_bytes(4, &[1, 2, 3, 4, 5]).is_err());
    assert_eq!(mem, Memory::new(8));
}

#[test]
fn dump_collapses_repeated_rows() {
    let mut mem = Memory::new(0x80);
    mem.write_long(0, 0xAB).unwrap();
    mem.write_long(0x78, 0xCD).unwrap();
    let text = mem.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "0000: 00000000000000ab 0000000000000000 0000000000000000 0000000000000000",
            "0020: 0000000000000000 0000000000000000 0000000000000000 0000000000000000",
            "*",
            "0060: 0000000000000000 0000000000000000 0000000000000000 00000000000000cd",
        ]
    );
}
