//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for each state, the events
//! it accepts and where they lead. It is usually loaded from JSON:
//!
//! ```json
//! {
//!   "initial": "off",
//!   "states": {
//!     "off": { "transitions": { "power": "on" } },
//!     "on":  { "transitions": { "power": "off" } }
//!   }
//! }
//! ```
//!
//! Loading performs no consistency checks. Call [`Configuration::validate`]
//! to check that the initial state and every transition target are declared.

mod states;

pub use states::{StateDefinition, StateTable};

use crate::core::StateId;
use crate::error::MachineError;
use serde::{Deserialize, Serialize};

/// Immutable description of a state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// State the machine starts in and returns to on reset
    pub initial: StateId,

    /// Declared states, in declaration order
    #[serde(default)]
    pub states: StateTable,
}

impl Configuration {
    pub fn new(initial: impl Into<StateId>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from JSON text.
    ///
    /// A JSON `null` document counts as a missing configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::config::Configuration;
    ///
    /// let config = Configuration::from_json(
    ///     r#"{"initial": "off", "states": {"off": {"transitions": {"power": "on"}}, "on": {}}}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.initial, "off");
    /// assert!(Configuration::from_json("null").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        serde_json::from_str::<Option<Self>>(json)?
            .ok_or_else(|| MachineError::configuration("configuration is missing"))
    }

    /// Build a configuration from an already-parsed JSON value.
    ///
    /// State order survives only if the value was parsed with object order
    /// preserved (this crate enables `serde_json/preserve_order`).
    pub fn from_value(value: serde_json::Value) -> Result<Self, MachineError> {
        if value.is_null() {
            return Err(MachineError::configuration("configuration is missing"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize back to JSON, keeping declaration order.
    pub fn to_json(&self) -> Result<String, MachineError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Definition of a declared state.
    pub fn definition(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    pub fn contains(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    /// Declared state ids in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &StateId> {
        self.states.ids()
    }

    /// Check that the initial state and every transition target are declared.
    pub fn validate(&self) -> Result<(), MachineError> {
        if !self.contains(self.initial.as_str()) {
            return Err(MachineError::configuration(format!(
                "initial state '{}' is not declared",
                self.initial
            )));
        }

        for (state, definition) in self.states.iter() {
            for (event, target) in &definition.transitions {
                if !self.contains(target.as_str()) {
                    return Err(MachineError::configuration(format!(
                        "transition '{}' from '{}' targets undeclared state '{}'",
                        event, state, target
                    )));
                }
            }
        }

        Ok(())
    }
}
