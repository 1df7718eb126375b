//! ALU Operation and Condition-Code Tests.
//!
//! Fixed cases pin the Y86-64 operand order (`subq` computes `B - A`) and the
//! overflow rules; property tests check the flags against a signed model.

use proptest::prelude::*;
use y86sim_core::core::arch::ConditionCodes;
use y86sim_core::core::units::alu::{Alu, arithmetic};
use y86sim_core::isa::AluFn;

// ══════════════════════════════════════════════════════════
// 1. Results
// ══════════════════════════════════════════════════════════

#[test]
fn sub_is_b_minus_a() {
    assert_eq!(Alu::execute(AluFn::Sub, 3, 10), 7);
    assert_eq!(Alu::execute(AluFn::Sub, 10, 3), (-7i64) as u64);
}

#[test]
fn add_wraps() {
    assert_eq!(Alu::execute(AluFn::Add, u64::MAX, 2), 1);
}

#[test]
fn logic_ops() {
    assert_eq!(Alu::execute(AluFn::And, 0b1100, 0b1010), 0b1000);
    assert_eq!(Alu::execute(AluFn::Xor, 0b1100, 0b1010), 0b0110);
}

// ══════════════════════════════════════════════════════════
// 2. Flags
// ══════════════════════════════════════════════════════════

#[test]
fn zero_result_sets_zf() {
    let r = Alu::execute(AluFn::Xor, 5, 5);
    assert_eq!(
        Alu::flags(AluFn::Xor, 5, 5, r),
        ConditionCodes::new(true, false, false)
    );
}

#[test]
fn negative_result_sets_sf() {
    let r = Alu::execute(AluFn::Sub, 2, 1);
    let cc = Alu::flags(AluFn::Sub, 2, 1, r);
    assert!(cc.sf);
    assert!(!cc.zf);
    assert!(!cc.of);
}

#[test]
fn add_overflow_sets_of() {
    let a = i64::MAX as u64;
    let r = Alu::execute(AluFn::Add, a, 1);
    let cc = Alu::flags(AluFn::Add, a, 1, r);
    assert!(cc.of);
    assert!(cc.sf);
}

#[test]
fn sub_overflow_checks_b_minus_a() {
    // i64::MIN - 1 overflows; 1 - i64::MIN also overflows.
    assert!(arithmetic::sub_overflows(1, i64::MIN as u64));
    assert!(arithmetic::sub_overflows(i64::MIN as u64, 1));
    assert!(!arithmetic::sub_overflows(1, 0));
}

#[test]
fn logic_never_sets_of() {
    let cc = Alu::flags(AluFn::And, u64::MAX, u64::MAX, u64::MAX);
    assert!(!cc.of);
    assert!(cc.sf);
}

proptest! {
    #[test]
    fn add_flags_match_signed_model(a: i64, b: i64) {
        let r = Alu::execute(AluFn::Add, a as u64, b as u64);
        let cc = Alu::flags(AluFn::Add, a as u64, b as u64, r);
        prop_assert_eq!(r as i64, a.wrapping_add(b));
        prop_assert_eq!(cc.of, a.checked_add(b).is_none());
        prop_assert_eq!(cc.zf, r == 0);
        prop_assert_eq!(cc.sf, (r as i64) < 0);
    }

    #[test]
    fn sub_flags_match_signed_model(a: i64, b: i64) {
        let r = Alu::execute(AluFn::Sub, a as u64, b as u64);
        let cc = Alu::flags(AluFn::Sub, a as u64, b as u64, r);
        prop_assert_eq!(r as i64, b.wrapping_sub(a));
        prop_assert_eq!(cc.of, b.checked_sub(a).is_none());
    }
}
