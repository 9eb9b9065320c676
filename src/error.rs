//! Machine error types.

use thiserror::Error;

/// Errors raised by the state machine and its configuration.
///
/// Every failing operation leaves the machine exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// No usable configuration was supplied, or it failed validation
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// A transition targeted a state that is not declared
    #[error("unknown state: '{state}'")]
    UnknownState { state: String },

    /// The event has no transition from the current state
    #[error("unknown event: '{event}' is not defined in state '{state}'")]
    UnknownEvent { state: String, event: String },
}

impl MachineError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Returns a stable code for this error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            MachineError::Configuration { .. } => "CONFIGURATION_ERROR",
            MachineError::UnknownState { .. } => "UNKNOWN_STATE",
            MachineError::UnknownEvent { .. } => "UNKNOWN_EVENT",
        }
    }
}

impl From<serde_json::Error> for MachineError {
    fn from(err: serde_json::Error) -> Self {
        Self::configuration(err.to_string())
    }
}
