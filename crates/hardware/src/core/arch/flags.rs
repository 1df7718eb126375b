//! Condition-code store.
//!
//! Three single-bit flags set by `OPq` in the Execute stage and consumed by
//! conditional jumps and conditional moves.

use std::fmt;

/// One of the three condition-code bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Signed overflow of the last `addq`/`subq`.
    Overflow,
    /// Last ALU result was zero.
    Zero,
    /// Bit 63 of the last ALU result.
    Sign,
}

/// The OF, ZF and SF bits.
///
/// Reset state is `ZF = 1, SF = 0, OF = 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConditionCodes {
    /// Overflow flag.
    pub of: bool,
    /// Zero flag.
    pub zf: bool,
    /// Sign flag.
    pub sf: bool,
}

impl Default for ConditionCodes {
    fn default() -> Self {
        Self {
            of: false,
            zf: true,
            sf: false,
        }
    }
}

impl ConditionCodes {
    /// Creates a condition-code store from explicit flag values.
    pub const fn new(zf: bool, sf: bool, of: bool) -> Self {
        Self { of, zf, sf }
    }

    /// Reads one flag.
    pub const fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Overflow => self.of,
            Flag::Zero => self.zf,
            Flag::Sign => self.sf,
        }
    }

    /// Writes one flag.
    pub fn set(&mut self, flag: Flag, bit: bool) {
        match flag {
            Flag::Overflow => self.of = bit,
            Flag::Zero => self.zf = bit,
            Flag::Sign => self.sf = bit,
        }
    }
}

impl fmt::Display for ConditionCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZF: {} SF: {} OF: {}",
            u8::from(self.zf),
            u8::from(self.sf),
            u8::from(self.of)
        )
    }
}
