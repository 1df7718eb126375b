//! Execution units and functional components.
//!
//! This module contains the combinational units the Execute and Fetch stages
//! drive: the integer ALU and the branch resolution unit.

/// Arithmetic Logic Unit for `OPq` and address arithmetic.
pub mod alu;

/// Branch Resolution Unit: condition evaluation and static PC prediction.
pub mod bru;
