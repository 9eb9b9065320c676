//! Retrace: a minimal configuration-driven state machine
//!
//! A machine is described by a declarative configuration: the initial state
//! and, for every state, a table mapping event names to destination states.
//! The machine tracks its current state, moves on named events, and keeps a
//! linear history of visited states that can be walked with undo and redo.
//!
//! # Core Concepts
//!
//! - **Configuration**: initial state plus per-state transition tables
//! - **StateMachine**: current state, transitions, undo/redo
//! - **History**: append-only log of visited states
//!
//! # Example
//!
//! ```rust
//! use retrace::{MachineError, StateMachine};
//!
//! let mut machine = StateMachine::from_json(
//!     r#"{
//!         "initial": "off",
//!         "states": {
//!             "off": {"transitions": {"power": "on"}},
//!             "on": {"transitions": {"power": "off"}}
//!         }
//!     }"#,
//! )?;
//!
//! assert_eq!(machine.state(), "off");
//! machine.trigger("power")?;
//! assert_eq!(machine.state(), "on");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "off");
//! assert!(machine.redo());
//! assert!(!machine.redo());
//!
//! assert_eq!(machine.states(Some("power")).len(), 2);
//! # Ok::<(), MachineError>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use config::{Configuration, StateDefinition};
pub use core::{EventId, History, HistoryEntry, StateId};
pub use error::MachineError;
pub use machine::StateMachine;
