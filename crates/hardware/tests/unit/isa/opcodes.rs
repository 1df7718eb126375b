//! Opcode and Function-Code Tests.

use rstest::rstest;
use y86sim_core::isa::{AluFn, Condition, Opcode};

#[test]
fn defined_icodes_round_trip_through_code() {
    for raw in 0x0..=0xB_u8 {
        let op = Opcode::try_from(raw).unwrap();
        assert_eq!(op.code(), raw);
    }
}

#[test]
fn undefined_icodes_are_rejected() {
    for raw in 0xC..=0xF_u8 {
        assert_eq!(Opcode::try_from(raw), Err(raw));
    }
}

#[test]
fn nop_is_the_default() {
    assert_eq!(Opcode::default(), Opcode::Nop);
}

#[rstest]
#[case(Opcode::Halt, false, false, 1)]
#[case(Opcode::Nop, false, false, 1)]
#[case(Opcode::Cmovxx, true, false, 2)]
#[case(Opcode::Irmovq, true, true, 10)]
#[case(Opcode::Rmmovq, true, true, 10)]
#[case(Opcode::Mrmovq, true, true, 10)]
#[case(Opcode::Opq, true, false, 2)]
#[case(Opcode::Jxx, false, true, 9)]
#[case(Opcode::Call, false, true, 9)]
#[case(Opcode::Ret, false, false, 1)]
#[case(Opcode::Pushq, true, false, 2)]
#[case(Opcode::Popq, true, false, 2)]
fn instruction_layout(
    #[case] op: Opcode,
    #[case] regids: bool,
    #[case] valc: bool,
    #[case] len: u64,
) {
    assert_eq!(op.needs_regids(), regids);
    assert_eq!(op.needs_valc(), valc);
    assert_eq!(y86sim_core::isa::instruction::next_pc(0, regids, valc), len);
}

#[test]
fn function_code_ranges() {
    assert!(Opcode::Opq.accepts_ifun(3));
    assert!(!Opcode::Opq.accepts_ifun(4));
    assert!(Opcode::Jxx.accepts_ifun(6));
    assert!(!Opcode::Jxx.accepts_ifun(7));
    assert!(!Opcode::Cmovxx.accepts_ifun(0xF));
    assert!(Opcode::Nop.accepts_ifun(0xF));
}

#[test]
fn only_mrmovq_and_popq_load() {
    let loads: Vec<Opcode> = (0x0..=0xB_u8)
        .filter_map(|raw| Opcode::try_from(raw).ok())
        .filter(|op| op.is_load())
        .collect();
    assert_eq!(loads, [Opcode::Mrmovq, Opcode::Popq]);
}

#[test]
fn alu_and_condition_conversion() {
    assert_eq!(AluFn::try_from(1), Ok(AluFn::Sub));
    assert_eq!(AluFn::try_from(4), Err(4));
    assert_eq!(Condition::try_from(6), Ok(Condition::G));
    assert_eq!(Condition::try_from(7), Err(7));
}

#[test]
fn class_names() {
    assert_eq!(Opcode::Opq.name(), "OPq");
    assert_eq!(Opcode::Jxx.name(), "jXX");
    assert_eq!(Opcode::Cmovxx.name(), "cmovXX");
}
