//! # Unit Components
//!
//! This module serves as the central hub for the tests of the simulator's
//! building blocks, from register ids and memory up to whole-program runs.






/// Unit tests for the flat memory store.
pub mod soc;
