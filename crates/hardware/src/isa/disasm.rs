//! Instruction Disassembler for Y86-64.
//!
//! Converts an `(icode, ifun)` pair into its assembler mnemonic for traces,
//! logging and the CLI pipeline view.
//!
//! # Usage
//!
//! ```
//! use y86sim_core::isa::{Opcode, disasm::mnemonic};
//! assert_eq!(mnemonic(Opcode::Opq, 1), "subq");
//! assert_eq!(mnemonic(Opcode::Jxx, 3), "je");
//! ```

use super::opcodes::{AluFn, Condition, Opcode};

/// Returns the mnemonic of an instruction, or `"????"` for an out-of-range function code.
pub fn mnemonic(icode: Opcode, ifun: u8) -> &'static str {
    match icode {
        Opcode::Halt => "halt",
        Opcode::Nop => "nop",
        Opcode::Irmovq => "irmovq",
        Opcode::Rmmovq => "rmmovq",
        Opcode::Mrmovq => "mrmovq",
        Opcode::Call => "call",
        Opcode::Ret => "ret",
        Opcode::Pushq => "pushq",
        Opcode::Popq => "popq",
        Opcode::Opq => match AluFn::try_from(ifun) {
            Ok(AluFn::Add) => "addq",
            Ok(AluFn::Sub) => "subq",
            Ok(AluFn::And) => "andq",
            Ok(AluFn::Xor) => "xorq",
            Err(_) => "????",
        },
        Opcode::Jxx => match Condition::try_from(ifun) {
            Ok(Condition::Always) => "jmp",
            Ok(Condition::Le) => "jle",
            Ok(Condition::L) => "jl",
            Ok(Condition::E) => "je",
            Ok(Condition::Ne) => "jne",
            Ok(Condition::Ge) => "jge",
            Ok(Condition::G) => "jg",
            Err(_) => "????",
        },
        Opcode::Cmovxx => match Condition::try_from(ifun) {
            Ok(Condition::Always) => "rrmovq",
            Ok(Condition::Le) => "cmovle",
            Ok(Condition::L) => "cmovl",
            Ok(Condition::E) => "cmove",
            Ok(Condition::Ne) => "cmovne",
            Ok(Condition::Ge) => "cmovge",
            Ok(Condition::G) => "cmovg",
            Err(_) => "????",
        },
    }
}
