//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and the [`machine!`](crate::machine!)
//! macro for declaring machines in code instead of JSON.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;
