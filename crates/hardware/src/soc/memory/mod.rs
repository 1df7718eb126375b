//! Physical System Memory.
//!
//! This module implements the flat memory store. It provides:
//! 1. **Bounds Checking:** Every access is checked against the capacity; there is no
//!    alignment requirement.
//! 2. **Byte and Long Access:** Single bytes and 8-byte little-endian words.
//! 3. **Bulk Load:** Writing a whole object-file image before simulation starts.
//! 4. **Dump:** Word-per-column hex dump with repeated rows collapsed.

use std::fmt;

use crate::common::constants::WORD_SIZE;
use crate::common::error::MemoryFault;

/// Number of 8-byte words printed per dump row.
const WORDS_PER_ROW: usize = 4;

/// Flat, zero-initialised, byte-addressable memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the capacity in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the memory has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Validates that `len` bytes starting at `addr` lie inside memory.
    ///
    /// # Arguments
    ///
    /// * `addr` - First byte of the access.
    /// * `len` - Width of the access in bytes.
    ///
    /// # Returns
    ///
    /// The starting index into the backing store, or a `MemoryFault`.
    pub fn check(&self, addr: u64, len: u64) -> Result<usize, MemoryFault> {
        let fault = MemoryFault { addr, len };
        let end = addr.checked_add(len).ok_or(fault)?;
        if end > self.bytes.len() as u64 {
            return Err(fault);
        }
        usize::try_from(addr).map_err(|_| fault)
    }

    /// Reads one byte.
    pub fn read_byte(&self, addr: u64) -> Result<u8, MemoryFault> {
        let i = self.check(addr, 1)?;
        Ok(self.bytes[i])
    }

    /// Reads an 8-byte little-endian word.
    pub fn read_long(&self, addr: u64) -> Result<u64, MemoryFault> {
        let i = self.check(addr, WORD_SIZE)?;
        let mut buf = [0u8; WORD_SIZE as usize];
        buf.copy_from_slice(&self.bytes[i..i + WORD_SIZE as usize]);
        Ok(u64::from_le_bytes(buf))
    }

    /// Writes one byte.
    pub fn write_byte(&mut self, addr: u64, val: u8) -> Result<(), MemoryFault> {
        let i = self.check(addr, 1)?;
        self.bytes[i] = val;
        Ok(())
    }

    /// Writes an 8-byte little-endian word.
    pub fn write_long(&mut self, addr: u64, val: u64) -> Result<(), MemoryFault> {
        let i = self.check(addr, WORD_SIZE)?;
        self.bytes[i..i + WORD_SIZE as usize].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Copies `data` into memory starting at `addr`.
    ///
    /// Either the whole slice is written or, on a fault, nothing is.
    pub fn load_bytes(&mut self, addr: u64, data: &[u8]) -> Result<(), MemoryFault> {
        let i = self.check(addr, data.len() as u64)?;
        self.bytes[i..i + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Returns the raw backing bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Dumps the contents of memory to stdout.
    pub fn dump(&self) {
        print!("{self}");
    }

    fn row_words(row: &[u8]) -> impl Iterator<Item = u64> + '_ {
        row.chunks(WORD_SIZE as usize).map(|w| {
            let mut buf = [0u8; WORD_SIZE as usize];
            buf[..w.len()].copy_from_slice(w);
            u64::from_le_bytes(buf)
        })
    }
}

impl fmt::Display for Memory {
    /// Rows of four words. A run of rows equal to the row above prints as a single
    /// `*`; the final row is always printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_len = WORDS_PER_ROW * WORD_SIZE as usize;
        let rows: Vec<&[u8]> = self.bytes.chunks(row_len).collect();
        let mut starred = false;
        for (i, row) in rows.iter().enumerate() {
            let last = i + 1 == rows.len();
            if i > 0 && !last && *row == rows[i - 1] {
                if !starred {
                    writeln!(f, "*")?;
                    starred = true;
                }
                continue;
            }
            starred = false;
            write!(f, "{:04x}:", i * row_len)?;
            for word in Self::row_words(row) {
                write!(f, " {word:016x}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
