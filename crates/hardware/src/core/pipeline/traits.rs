//! Pipeline Register Interface.
//!
//! This module defines the common trait for the F, D, E, M and W pipeline
//! registers. It provides:
//! 1. **Write Disciplines:** `normal`, `stall` and `bubble`, applied to every field at once.
//! 2. **Control Dispatch:** Applying a resolved `LatchControl` in one call.

use crate::core::pipeline::signals::LatchControl;

/// Represents a pipeline register (inter-stage buffer).
///
/// Every field of one register advances with the same operation in a given
/// cycle; the operations only ever run during the high phase.
pub trait PipelineLatch {
    /// Copies every staged input to its output.
    fn normal(&mut self);

    /// Leaves every output unchanged; staged inputs are discarded next cycle.
    fn stall(&mut self);

    /// Resets every output to its field reset value (a `nop` with `AOK` status).
    fn bubble(&mut self);

    /// Applies a resolved control signal.
    ///
    /// # Arguments
    ///
    /// * `ctl` - Normal, stall or bubble.
    fn apply(&mut self, ctl: LatchControl) {
        match ctl {
            LatchControl::Normal => self.normal(),
            LatchControl::Stall => self.stall(),
            LatchControl::Bubble => self.bubble(),
        }
    }
}
