//! Object-Text Loader.
//!
//! This module loads Y86-64 `.yo` object files into memory. It performs:
//! 1. **File checks:** The name must carry the `.yo` extension and the file must be readable.
//! 2. **Line parsing:** Every line is validated before anything is written, so a bad file
//!    leaves memory untouched.
//! 3. **Placement checks:** Data lines must not overlap earlier data and must fit in memory.
//!
//! # Format
//!
//! ```text
//! 0x000: 30f20a00000000000000 |   irmovq $10,%rdx
//! 0x00a:                      | loop:
//!                             | # comment
//! ```
//!
//! A line is a comment if everything before `|` is blank. Otherwise it is
//! `0x<hex address>:`, one space, an optional even-length run of hex digits, then
//! only spaces up to `|`.

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;
use crate::soc::Memory;

/// Extension required on object file names.
const OBJECT_EXTENSION: &str = "yo";

/// What a successful load placed in memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of bytes written.
    pub bytes: usize,
    /// Number of lines carrying data.
    pub data_lines: usize,
    /// One past the highest byte written.
    pub end: u64,
}

/// One data line after validation.
struct DataLine {
    addr: u64,
    bytes: Vec<u8>,
}

/// Loads a `.yo` object file into memory.
///
/// # Arguments
///
/// * `path` - Path to the object file.
/// * `mem` - Memory to load into.
///
/// # Errors
///
/// `BadExtension` if the name does not end in `.yo`, `Io` if the file cannot be read,
/// and any error `load_str` reports.
pub fn load_file(path: &Path, mem: &mut Memory) -> Result<LoadSummary, LoadError> {
    if path.extension().and_then(|e| e.to_str()) != Some(OBJECT_EXTENSION) {
        return Err(LoadError::BadExtension(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = load_str(&text, mem)?;
    tracing::info!(
        path = %path.display(),
        bytes = summary.bytes,
        end = summary.end,
        "object file loaded"
    );
    Ok(summary)
}

/// Loads object text into memory.
///
/// Nothing is written unless every line is valid.
///
/// # Errors
///
/// `Malformed` for a line that breaks the format or overlaps earlier data, and
/// `OutOfMemory` for data that would extend past the end of memory.
pub fn load_str(text: &str, mem: &mut Memory) -> Result<LoadSummary, LoadError> {
    let mut lines = Vec::new();
    let mut next_free = 0u64;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let malformed = |reason| LoadError::Malformed {
            line,
            text: raw.to_string(),
            reason,
        };

        let Some(data) = parse_line(raw).map_err(&malformed)? else {
            continue;
        };
        if data.bytes.is_empty() {
            continue;
        }
        if data.addr < next_free {
            return Err(malformed("data overlaps an earlier line"));
        }
        if mem.check(data.addr, data.bytes.len() as u64).is_err() {
            return Err(LoadError::OutOfMemory {
                line,
                addr: data.addr,
                len: data.bytes.len(),
            });
        }
        next_free = data.addr + data.bytes.len() as u64;
        lines.push((line, data));
    }

    let mut summary = LoadSummary {
        end: next_free,
        ..LoadSummary::default()
    };
    for (line, data) in &lines {
        mem.load_bytes(data.addr, &data.bytes)
            .map_err(|_| LoadError::OutOfMemory {
                line: *line,
                addr: data.addr,
                len: data.bytes.len(),
            })?;
        summary.bytes += data.bytes.len();
        summary.data_lines += 1;
    }
    Ok(summary)
}

/// Parses one line.
///
/// # Returns
///
/// `None` for a comment line, otherwise the address and its (possibly empty) data.
fn parse_line(line: &str) -> Result<Option<DataLine>, &'static str> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let (prefix, _comment) = line.split_once('|').ok_or("missing '|'")?;
    if prefix.trim().is_empty() {
        return Ok(None);
    }

    let rest = prefix
        .trim_start()
        .strip_prefix("0x")
        .ok_or("expected an address starting with 0x")?;
    let (addr_text, body) = rest.split_once(':').ok_or("missing ':' after the address")?;
    if addr_text.is_empty() || !addr_text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("malformed address");
    }
    let addr = u64::from_str_radix(addr_text, 16).map_err(|_| "address out of range")?;

    let body = body
        .strip_prefix(' ')
        .ok_or("expected a space after ':'")?;
    let split = body.find(' ').unwrap_or(body.len());
    let (hex, tail) = body.split_at(split);
    if !tail.bytes().all(|b| b == b' ') {
        return Err("unexpected characters before '|'");
    }

    Ok(Some(DataLine {
        addr,
        bytes: decode_hex(hex)?,
    }))
}

/// Decodes a run of hex digit pairs.
fn decode_hex(hex: &str) -> Result<Vec<u8>, &'static str> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err("invalid hex data");
    }
    if hex.len() % 2 != 0 {
        return Err("odd number of hex digits");
    }
    hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or("invalid hex data")
        })
        .collect()
}
