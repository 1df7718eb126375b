//! Register identifiers and the architectural register file.
//!
//! This module provides the `RegId` and `RegisterFile` types. It provides:
//! 1. **Identifiers:** A 4-bit register id with the `RNONE` sentinel (`0xF`).
//! 2. **Storage:** Fifteen 64-bit registers, `%rax` through `%r14`.
//! 3. **Sentinel Semantics:** Reads of `RNONE` yield nothing and writes to it are dropped.
//! 4. **Observability:** Dumping register state at the end of a run.

use std::fmt;

use super::constants::{NIBBLE_MASK, REGISTER_COUNT};

/// Assembly names of the architectural registers, indexed by id.
const REG_NAMES: [&str; REGISTER_COUNT] = [
    "%rax", "%rcx", "%rdx", "%rbx", "%rsp", "%rbp", "%rsi", "%rdi", "%r8", "%r9", "%r10", "%r11",
    "%r12", "%r13", "%r14",
];

/// A 4-bit register identifier.
///
/// Any nibble is representable; `0xF` is the "no register" sentinel. The default
/// value is the sentinel, which is also the reset value of every register-id field
/// in the pipeline registers.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegId(u8);

impl RegId {
    /// `%rax`.
    pub const RAX: Self = Self(0);
    /// `%rcx`.
    pub const RCX: Self = Self(1);
    /// `%rdx`.
    pub const RDX: Self = Self(2);
    /// `%rbx`.
    pub const RBX: Self = Self(3);
    /// `%rsp`, the stack pointer used by push, pop, call and ret.
    pub const RSP: Self = Self(4);
    /// `%rbp`.
    pub const RBP: Self = Self(5);
    /// `%rsi`.
    pub const RSI: Self = Self(6);
    /// `%rdi`.
    pub const RDI: Self = Self(7);
    /// `%r8`.
    pub const R8: Self = Self(8);
    /// `%r9`.
    pub const R9: Self = Self(9);
    /// `%r10`.
    pub const R10: Self = Self(10);
    /// `%r11`.
    pub const R11: Self = Self(11);
    /// `%r12`.
    pub const R12: Self = Self(12);
    /// `%r13`.
    pub const R13: Self = Self(13);
    /// `%r14`.
    pub const R14: Self = Self(14);
    /// No register.
    pub const NONE: Self = Self(0xF);

    /// Creates a register id from the low nibble of `raw`.
    #[inline]
    pub const fn new(raw: u8) -> Self {
        Self(raw & NIBBLE_MASK)
    }

    /// Returns the raw 4-bit id.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns `true` for the "no register" sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }

    /// Index into the register file, or `None` for the sentinel.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_none() {
            None
        } else {
            Some(self.0 as usize)
        }
    }

    /// Assembly name of the register (`----` for the sentinel).
    pub fn name(self) -> &'static str {
        self.index().map_or("----", |i| REG_NAMES[i])
    }
}

impl Default for RegId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Debug for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Architectural register file.
///
/// Only the Writeback stage writes it, and only during the high phase of a cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u64; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register, returning `None` for the sentinel.
    pub fn get(&self, id: RegId) -> Option<u64> {
        id.index().map(|i| self.regs[i])
    }

    /// Reads a register; the sentinel reads as 0.
    pub fn read(&self, id: RegId) -> u64 {
        self.get(id).unwrap_or(0)
    }

    /// Writes a register. Writes to the sentinel are silently dropped.
    pub fn write(&mut self, id: RegId, val: u64) {
        if let Some(i) = id.index() {
            self.regs[i] = val;
        }
    }

    /// Iterates over `(id, value)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (RegId, u64)> + '_ {
        self.regs
            .iter()
            .enumerate()
            .map(|(i, &v)| (RegId::new(i as u8), v))
    }

    /// Dumps the contents of all registers to stdout.
    pub fn dump(&self) {
        print!("{self}");
    }
}

impl fmt::Display for RegisterFile {
    /// Registers in rows of three, hexadecimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.regs.chunks(3).enumerate() {
            let (r, vals) = row;
            for (c, v) in vals.iter().enumerate() {
                let id = RegId::new((r * 3 + c) as u8);
                write!(f, "{:>5}: {:016x}  ", id.name(), v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
