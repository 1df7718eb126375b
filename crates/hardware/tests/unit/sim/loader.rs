//! Object-Text Loader Tests.
//!
//! Valid files, every malformed-line rule, placement checks and the
//! all-or-nothing guarantee.

use std::io::Write;

use pretty_assertions::assert_eq;
use y86sim_core::common::LoadError;
use y86sim_core::sim::LoadSummary;
use y86sim_core::sim::loader::{load_file, load_str};
use y86sim_core::soc::Memory;

const SAMPLE: &str = "\
                            | # sum two constants
0x000: 30f10500000000000000 |   irmovq $5,%rcx
0x00a: 30f20700000000000000 |   irmovq $7,%rdx
0x014: 6012                 |   addq %rcx,%rdx
0x016:                      | done:
0x016: 00                   |   halt
";

fn malformed_line(text: &str) -> usize {
    let mut mem = Memory::new(0x100);
    match load_str(text, &mut mem) {
        Err(LoadError::Malformed { line, .. }) => line,
        other => panic!("expected a malformed-line error, got {other:?}"),
    }
}

// ══════════════════════════════════════════════════════════
// 1. Valid input
// ══════════════════════════════════════════════════════════

#[test]
fn loads_sample_program() {
    let mut mem = Memory::new(0x100);
    let summary = load_str(SAMPLE, &mut mem).unwrap();
    assert_eq!(
        summary,
        LoadSummary {
            bytes: 23,
            data_lines: 4,
            end: 0x17,
        }
    );
    assert_eq!(&mem.as_slice()[0x14..0x17], &[0x60, 0x12, 0x00]);
    assert_eq!(mem.read_long(2).unwrap(), 5);
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    let mut mem = Memory::new(0x10);
    let summary = load_str("\n   \n      | only a comment\n", &mut mem).unwrap();
    assert_eq!(summary, LoadSummary::default());
}

#[test]
fn leading_blanks_before_address_are_allowed() {
    let mut mem = Memory::new(0x10);
    let _ = load_str("  0x004: abcd | x", &mut mem).unwrap();
    assert_eq!(mem.read_byte(4).unwrap(), 0xab);
    assert_eq!(mem.read_byte(5).unwrap(), 0xcd);
}

#[test]
fn addresses_may_skip_ahead() {
    let text = "0x000: 00 |\n0x080: 0102 |\n";
    let mut mem = Memory::new(0x100);
    let summary = load_str(text, &mut mem).unwrap();
    assert_eq!(summary.end, 0x82);
    assert_eq!(mem.read_byte(0x81).unwrap(), 0x02);
}

// ══════════════════════════════════════════════════════════
// 2. Malformed lines
// ══════════════════════════════════════════════════════════

#[test]
fn missing_bar() {
    assert_eq!(malformed_line("0x000: 00\n"), 1);
}

#[test]
fn missing_address_prefix() {
    assert_eq!(malformed_line("0x000: 00 |\n000: 00 |\n"), 2);
}

#[test]
fn missing_colon() {
    assert_eq!(malformed_line("0x000 00 |"), 1);
}

#[test]
fn no_space_after_colon() {
    assert_eq!(malformed_line("0x000:00 |"), 1);
}

#[test]
fn odd_number_of_digits() {
    assert_eq!(malformed_line("0x000: 123 |"), 1);
}

#[test]
fn non_hex_data() {
    assert_eq!(malformed_line("0x000: zz |"), 1);
    assert_eq!(malformed_line("0x000: +1 |"), 1);
}

#[test]
fn junk_after_data() {
    assert_eq!(malformed_line("0x000: 00 ff |"), 1);
}

#[test]
fn overlapping_data() {
    assert_eq!(malformed_line("0x000: 00000000 |\n0x002: 00 |\n"), 2);
}

#[test]
fn error_message_names_the_line() {
    let mut mem = Memory::new(0x10);
    let err = load_str("0x000: 00 |\n0x001: 0 |\n", &mut mem).unwrap_err();
    assert_eq!(
        err.to_string(),
        "error on line 2: odd number of hex digits: 0x001: 0 |"
    );
}

// ══════════════════════════════════════════════════════════
// 3. Placement
// ══════════════════════════════════════════════════════════

#[test]
fn data_past_end_of_memory() {
    let mut mem = Memory::new(0x10);
    let err = load_str("0x00e: 000000 |", &mut mem).unwrap_err();
    assert!(matches!(
        err,
        LoadError::OutOfMemory {
            line: 1,
            addr: 0xe,
            len: 3
        }
    ));
}

#[test]
fn data_ending_at_last_byte_is_written() {
    let mut mem = Memory::new(0x10);
    let summary = load_str("0x000: 01 |\n0x00d: aabbcc |\n", &mut mem).unwrap();
    assert_eq!(summary.bytes, 4);
    assert_eq!(summary.data_lines, 2);
    assert_eq!(summary.end, 0x10);
    assert_eq!(&mem.as_slice()[0xd..], &[0xaa, 0xbb, 0xcc]);
}

#[test]
fn bad_file_leaves_memory_untouched() {
    let mut mem = Memory::new(0x10);
    let text = "0x000: 30f1 |\n0x002: xyz |\n";
    assert!(load_str(text, &mut mem).is_err());
    assert_eq!(mem, Memory::new(0x10));
}

// ══════════════════════════════════════════════════════════
// 4. Files
// ══════════════════════════════════════════════════════════

#[test]
fn loads_from_yo_file() {
    let mut file = tempfile::Builder::new().suffix(".yo").tempfile().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let mut mem = Memory::new(0x100);
    let summary = load_file(file.path(), &mut mem).unwrap();
    assert_eq!(summary.bytes, 23);
}

#[test]
fn rejects_other_extensions() {
    let mut file = tempfile::Builder::new().suffix(".ys").tempfile().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let mut mem = Memory::new(0x100);
    let err = load_file(file.path(), &mut mem).unwrap_err();
    assert!(matches!(err, LoadError::BadExtension(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut mem = Memory::new(0x100);
    let err = load_file(&dir.path().join("absent.yo"), &mut mem).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}
