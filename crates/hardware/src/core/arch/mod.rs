//! Y86-64 architectural state components.
//!
//! This module contains architectural elements owned by the CPU that are not plain
//! storage. It includes the following modules:
//! 1. **Flags:** The OF/ZF/SF condition-code store written by Execute.

/// Condition-code store.
pub mod flags;

pub use flags::{ConditionCodes, Flag};
