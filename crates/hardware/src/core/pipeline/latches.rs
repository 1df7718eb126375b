//! Pipeline register structures for inter-stage communication.
//!
//! This module defines the five pipeline registers of the Y86-64 pipeline:
//! F (predicted PC) → D → E → M → W.
//!
//! 1. **Fields:** `PipeRegField<T>` holds a staged input, a committed output and a reset value.
//! 2. **Registers:** `pipe_reg!` generates each register from its field list, together with a
//!    plain-value snapshot type used by the stage functions.
//! 3. **Reset State:** Opcodes reset to `nop`, register ids to `RNONE`, status to `AOK`,
//!    values and conditions to zero/false.

use crate::common::error::Status;
use crate::common::reg::RegId;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::opcodes::{FNONE, Opcode};

/// One field of a pipeline register.
///
/// Stages write the input during the low phase and read the output of the
/// upstream register. The output only changes in the high phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipeRegField<T> {
    input: T,
    output: T,
    reset: T,
}

impl<T: Copy> PipeRegField<T> {
    /// Creates a field whose input and output both hold the reset value.
    pub const fn new(reset: T) -> Self {
        Self {
            input: reset,
            output: reset,
            reset,
        }
    }

    /// Stages a value for the next commit.
    #[inline]
    pub fn set_input(&mut self, val: T) {
        self.input = val;
    }

    /// Returns the staged input.
    #[inline]
    pub const fn input(&self) -> T {
        self.input
    }

    /// Returns the committed output.
    #[inline]
    pub const fn output(&self) -> T {
        self.output
    }

    /// Output takes the staged input.
    #[inline]
    pub fn normal(&mut self) {
        self.output = self.input;
    }

    /// Output is held.
    #[inline]
    pub const fn stall(&mut self) {}

    /// Output takes the reset value.
    #[inline]
    pub fn bubble(&mut self) {
        self.output = self.reset;
    }

    /// Sets input and output directly, bypassing the clock.
    ///
    /// Used to seed pipeline state outside of normal operation.
    pub fn force(&mut self, val: T) {
        self.input = val;
        self.output = val;
    }
}

/// Generates a pipeline register, its value snapshot and its `PipelineLatch` impl.
macro_rules! pipe_reg {
    (
        $(#[$meta:meta])*
        $name:ident / $vals:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty = $reset:expr ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: PipeRegField<$ty>, )*
        }

        #[doc = concat!("Plain values of every [`", stringify!($name), "`] field.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $vals {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl Default for $vals {
            fn default() -> Self {
                Self { $( $field: $reset, )* }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self { $( $field: PipeRegField::new($reset), )* }
            }
        }

        impl $name {
            /// Snapshot of the committed outputs.
            pub fn outputs(&self) -> $vals {
                $vals { $( $field: self.$field.output(), )* }
            }

            /// Snapshot of the staged inputs.
            pub fn inputs(&self) -> $vals {
                $vals { $( $field: self.$field.input(), )* }
            }

            /// Stages every field for the next commit.
            pub fn stage(&mut self, vals: $vals) {
                $( self.$field.set_input(vals.$field); )*
            }

            /// Forces every field's input and output, bypassing the clock.
            pub fn force(&mut self, vals: $vals) {
                $( self.$field.force(vals.$field); )*
            }
        }

        impl PipelineLatch for $name {
            fn normal(&mut self) {
                $( self.$field.normal(); )*
            }

            fn stall(&mut self) {
                $( self.$field.stall(); )*
            }

            fn bubble(&mut self) {
                $( self.$field.bubble(); )*
            }
        }
    };
}

pipe_reg! {
    /// F: the predicted PC fed back into Fetch.
    FReg / FValues {
        /// Predicted address of the next instruction.
        pred_pc: u64 = 0,
    }
}

pipe_reg! {
    /// D: Fetch → Decode.
    DReg / DValues {
        /// Status tag.
        stat: Status = Status::Aok,
        /// Instruction code.
        icode: Opcode = Opcode::Nop,
        /// Function code.
        ifun: u8 = FNONE,
        /// First register specifier.
        ra: RegId = RegId::NONE,
        /// Second register specifier.
        rb: RegId = RegId::NONE,
        /// Constant word.
        val_c: u64 = 0,
        /// Address of the following instruction.
        val_p: u64 = 0,
    }
}

pipe_reg! {
    /// E: Decode → Execute.
    EReg / EValues {
        /// Status tag.
        stat: Status = Status::Aok,
        /// Instruction code.
        icode: Opcode = Opcode::Nop,
        /// Function code.
        ifun: u8 = FNONE,
        /// Constant word.
        val_c: u64 = 0,
        /// First operand (forwarded).
        val_a: u64 = 0,
        /// Second operand (forwarded).
        val_b: u64 = 0,
        /// Destination of `valE`.
        dst_e: RegId = RegId::NONE,
        /// Destination of `valM`.
        dst_m: RegId = RegId::NONE,
        /// Source of `valA`.
        src_a: RegId = RegId::NONE,
        /// Source of `valB`.
        src_b: RegId = RegId::NONE,
    }
}

pipe_reg! {
    /// M: Execute → Memory.
    MReg / MValues {
        /// Status tag.
        stat: Status = Status::Aok,
        /// Instruction code.
        icode: Opcode = Opcode::Nop,
        /// Branch taken / move performed.
        cnd: bool = false,
        /// ALU result.
        val_e: u64 = 0,
        /// Store data, or the fall-through PC of a `jXX`.
        val_a: u64 = 0,
        /// Destination of `valE`.
        dst_e: RegId = RegId::NONE,
        /// Destination of `valM`.
        dst_m: RegId = RegId::NONE,
    }
}

pipe_reg! {
    /// W: Memory → Writeback.
    WReg / WValues {
        /// Status tag.
        stat: Status = Status::Aok,
        /// Instruction code.
        icode: Opcode = Opcode::Nop,
        /// ALU result.
        val_e: u64 = 0,
        /// Loaded value.
        val_m: u64 = 0,
        /// Destination of `valE`.
        dst_e: RegId = RegId::NONE,
        /// Destination of `valM`.
        dst_m: RegId = RegId::NONE,
    }
}
