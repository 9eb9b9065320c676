//! Core identifier and history types.
//!
//! This module contains the building blocks the machine is made of:
//! - State and event identifiers
//! - The append-only undo/redo history

mod history;
mod state;

pub use history::{History, HistoryEntry};
pub use state::{EventId, StateId};
