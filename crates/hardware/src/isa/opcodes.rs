//! Y86-64 Opcodes and Function Codes.
//!
//! Defines the instruction codes (high nibble of the opcode byte), the ALU
//! function codes used by `OPq`, and the condition codes used by `jXX` and
//! `cmovXX` (low nibble).

/// Function code for instructions without variants.
pub const FNONE: u8 = 0;

/// Instruction code (`icode`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// `halt`.
    Halt = 0x0,
    /// `nop`. Also the reset and bubble value of every `icode` field.
    #[default]
    Nop = 0x1,
    /// `rrmovq` and `cmovXX`.
    Cmovxx = 0x2,
    /// `irmovq`.
    Irmovq = 0x3,
    /// `rmmovq`.
    Rmmovq = 0x4,
    /// `mrmovq`.
    Mrmovq = 0x5,
    /// `addq`, `subq`, `andq`, `xorq`.
    Opq = 0x6,
    /// `jmp` and `jXX`.
    Jxx = 0x7,
    /// `call`.
    Call = 0x8,
    /// `ret`.
    Ret = 0x9,
    /// `pushq`.
    Pushq = 0xA,
    /// `popq`.
    Popq = 0xB,
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    /// Converts a raw `icode` nibble; undefined codes are returned as the error.
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Ok(match raw {
            0x0 => Self::Halt,
            0x1 => Self::Nop,
            0x2 => Self::Cmovxx,
            0x3 => Self::Irmovq,
            0x4 => Self::Rmmovq,
            0x5 => Self::Mrmovq,
            0x6 => Self::Opq,
            0x7 => Self::Jxx,
            0x8 => Self::Call,
            0x9 => Self::Ret,
            0xA => Self::Pushq,
            0xB => Self::Popq,
            other => return Err(other),
        })
    }
}

impl Opcode {
    /// Returns the raw `icode` nibble.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Name of the instruction class (`OPq`, `jXX`, `cmovXX`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Halt => "halt",
            Self::Nop => "nop",
            Self::Cmovxx => "cmovXX",
            Self::Irmovq => "irmovq",
            Self::Rmmovq => "rmmovq",
            Self::Mrmovq => "mrmovq",
            Self::Opq => "OPq",
            Self::Jxx => "jXX",
            Self::Call => "call",
            Self::Ret => "ret",
            Self::Pushq => "pushq",
            Self::Popq => "popq",
        }
    }

    /// Whether the instruction carries a register-specifier byte.
    pub const fn needs_regids(self) -> bool {
        matches!(
            self,
            Self::Cmovxx
                | Self::Irmovq
                | Self::Rmmovq
                | Self::Mrmovq
                | Self::Opq
                | Self::Pushq
                | Self::Popq
        )
    }

    /// Whether the instruction carries an 8-byte constant.
    pub const fn needs_valc(self) -> bool {
        matches!(
            self,
            Self::Irmovq | Self::Rmmovq | Self::Mrmovq | Self::Jxx | Self::Call
        )
    }

    /// Whether `ifun` is meaningful for this instruction and within range.
    ///
    /// Instructions without variants accept any function code.
    pub fn accepts_ifun(self, ifun: u8) -> bool {
        match self {
            Self::Opq => AluFn::try_from(ifun).is_ok(),
            Self::Jxx | Self::Cmovxx => Condition::try_from(ifun).is_ok(),
            _ => true,
        }
    }

    /// Loads that write `dstM`: the producers behind a load-use hazard.
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Mrmovq | Self::Popq)
    }
}

/// ALU function code (`ifun` of `OPq`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AluFn {
    /// `A + B`.
    #[default]
    Add = 0,
    /// `B - A`.
    Sub = 1,
    /// `A & B`.
    And = 2,
    /// `A ^ B`.
    Xor = 3,
}

impl TryFrom<u8> for AluFn {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Ok(match raw {
            0 => Self::Add,
            1 => Self::Sub,
            2 => Self::And,
            3 => Self::Xor,
            other => return Err(other),
        })
    }
}

/// Branch and conditional-move condition (`ifun` of `jXX` / `cmovXX`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Condition {
    /// Unconditional.
    #[default]
    Always = 0,
    /// Less or equal.
    Le = 1,
    /// Less.
    L = 2,
    /// Equal.
    E = 3,
    /// Not equal.
    Ne = 4,
    /// Greater or equal.
    Ge = 5,
    /// Greater.
    G = 6,
}

impl TryFrom<u8> for Condition {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Ok(match raw {
            0 => Self::Always,
            1 => Self::Le,
            2 => Self::L,
            3 => Self::E,
            4 => Self::Ne,
            5 => Self::Ge,
            6 => Self::G,
            other => return Err(other),
        })
    }
}
