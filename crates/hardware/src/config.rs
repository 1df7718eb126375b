//! Configuration system for the Y86-64 simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (memory size, start PC, cycle limit).
//! 2. **Structures:** Hierarchical config for general and memory settings.
//!
//! Configuration is supplied as JSON (`Config::from_json`, the CLI's `--config`) or
//! built with `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_MAX_CYCLES, DEFAULT_MEMORY_SIZE};
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    use super::{DEFAULT_MAX_CYCLES, DEFAULT_MEMORY_SIZE};

    /// Address of the first instruction fetched.
    pub const START_PC: u64 = 0;

    /// Cycle budget for one run.
    ///
    /// A program that has not halted after this many cycles is reported as a
    /// runaway.
    pub const MAX_CYCLES: u64 = DEFAULT_MAX_CYCLES;

    /// Memory capacity in bytes (4 KiB).
    pub const MEMORY_SIZE: usize = DEFAULT_MEMORY_SIZE;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use y86sim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.trace_instructions, false);
/// assert_eq!(config.memory.size, 0x1000);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use y86sim_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "start_pc": 256,
///         "max_cycles": 500
///     },
///     "memory": {
///         "size": 8192
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.start_pc, 0x100);
/// assert_eq!(config.general.max_cycles, 500);
/// assert_eq!(config.memory.size, 8192);
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON. Missing sections and fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `SimError::Config` if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Print the pipeline registers to stderr after every cycle
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u64,

    /// Maximum number of cycles before the driver gives up
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u64 {
        defaults::START_PC
    }

    /// Returns the default cycle budget.
    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: Self::default_start_pc(),
            max_cycles: Self::default_max_cycles(),
        }
    }
}

/// Memory configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Capacity of the flat memory in bytes
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    /// Returns the default memory capacity.
    const fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: Self::default_size(),
        }
    }
}
