//! Status tags and error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Status Tag:** The per-instruction outcome that travels through the pipeline registers.
//! 2. **Memory Faults:** Out-of-range accesses reported by the memory store.
//! 3. **Loader and Driver Errors:** Operator-facing failures, integrated with `std::error::Error`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Per-instruction status tag.
///
/// Faults are never thrown; they ride along with the instruction and stop the run
/// once the instruction reaches Writeback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    /// Normal operation.
    #[default]
    Aok = 1,
    /// A `halt` instruction was executed.
    Hlt = 2,
    /// An instruction or data access fell outside memory.
    Adr = 3,
    /// An undefined instruction was fetched.
    Ins = 4,
}

impl Status {
    /// Returns `true` for the normal-operation status.
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Aok)
    }

    /// Returns `true` for halt, address-error and invalid-instruction.
    ///
    /// Any of these squashes younger instructions and ends the run at Writeback.
    #[inline]
    pub const fn is_exception(self) -> bool {
        !self.is_ok()
    }

    /// Numeric code used by the Y86-64 reference tools.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aok => "AOK",
            Self::Hlt => "HLT",
            Self::Adr => "ADR",
            Self::Ins => "INS",
        };
        f.write_str(name)
    }
}

/// A memory access touched bytes beyond the memory capacity.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("memory access out of range: {len} byte(s) at {addr:#x}")]
pub struct MemoryFault {
    /// First byte of the access.
    pub addr: u64,
    /// Width of the access in bytes.
    pub len: u64,
}

/// Errors raised while loading a `.yo` object file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The object file could not be opened or read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file name does not carry the `.yo` extension.
    #[error("'{}' is not a .yo object file", .0.display())]
    BadExtension(PathBuf),

    /// A line does not follow the object-text layout.
    #[error("error on line {line}: {reason}: {text}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// Raw line contents.
        text: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A data line would place bytes beyond the end of memory.
    #[error("error on line {line}: {len} byte(s) at {addr:#x} do not fit in memory")]
    OutOfMemory {
        /// 1-based line number.
        line: usize,
        /// Address of the first byte on the line.
        addr: u64,
        /// Number of bytes on the line.
        len: usize,
    },
}

/// Errors raised by the simulation driver.
#[derive(Debug, Error)]
pub enum SimError {
    /// Loading the program failed; the machine was left un-loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// `run` was called before a program was loaded.
    #[error("no program loaded")]
    NotLoaded,

    /// The run did not halt within the configured cycle budget.
    #[error("cycle limit of {limit} reached without halting")]
    CycleLimit {
        /// The configured limit.
        limit: u64,
    },

    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
