//! State machine driven by a declarative configuration.

use crate::config::Configuration;
use crate::core::{EventId, History, HistoryEntry, StateId};
use crate::error::MachineError;

/// Finite state machine with linear undo/redo history.
///
/// The machine tracks a current state, moves between states on named
/// events, and can step back and forth through the states it visited.
/// Every operation either succeeds completely or leaves the machine
/// untouched.
///
/// # Example
///
/// ```rust
/// use retrace::{MachineError, StateMachine};
///
/// let mut machine = StateMachine::from_json(
///     r#"{
///         "initial": "off",
///         "states": {
///             "off": {"transitions": {"power": "on"}},
///             "on": {"transitions": {"power": "off"}}
///         }
///     }"#,
/// )
/// .unwrap();
///
/// machine.trigger("power").unwrap();
/// assert_eq!(machine.state(), "on");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "off");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "on");
///
/// let err = machine.trigger("bogus").unwrap_err();
/// assert!(matches!(err, MachineError::UnknownEvent { .. }));
/// assert_eq!(machine.state(), "on");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Configuration,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The initial state is not required to be declared. A machine built
    /// from such a configuration can still be queried, but `reset` will
    /// fail and no event is valid until it moves to a declared state.
    pub fn new(config: Configuration) -> Self {
        if !config.contains(config.initial.as_str()) {
            tracing::warn!(
                initial = %config.initial,
                "initial state is not declared among configuration states"
            );
        }

        let history = History::new(config.initial.clone());
        Self { config, history }
    }

    /// Create a machine from an optional configuration.
    ///
    /// Fails with [`MachineError::Configuration`] when none is supplied.
    pub fn try_new(config: Option<Configuration>) -> Result<Self, MachineError> {
        let config =
            config.ok_or_else(|| MachineError::configuration("configuration is missing"))?;
        Ok(Self::new(config))
    }

    /// Parse a configuration from JSON and create a machine from it.
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        Configuration::from_json(json).map(Self::new)
    }

    /// Current state.
    pub fn state(&self) -> &StateId {
        self.history.current()
    }

    /// Move directly to `target`.
    ///
    /// This is the only forward mutation; `trigger` and `reset` go through
    /// it. Clears the redo budget.
    pub fn change_state(&mut self, target: &str) -> Result<&StateId, MachineError> {
        if !self.config.contains(target) {
            tracing::debug!(from = %self.state(), to = target, "rejected change to unknown state");
            return Err(MachineError::UnknownState {
                state: target.to_string(),
            });
        }

        let from = self.state().clone();
        self.history.advance(StateId::new(target));
        tracing::debug!(
            from = %from,
            to = target,
            history_len = self.history.len(),
            "state changed"
        );
        Ok(self.state())
    }

    /// Fire `event` from the current state.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .config
            .definition(self.state().as_str())
            .and_then(|definition| definition.target(event))
            .cloned();

        let Some(target) = target else {
            tracing::debug!(state = %self.state(), event, "rejected unknown event");
            return Err(MachineError::UnknownEvent {
                state: self.state().to_string(),
                event: event.to_string(),
            });
        };

        tracing::debug!(state = %self.state(), event, "event triggered");
        self.change_state(target.as_str())?;
        Ok(())
    }

    /// Re-enter the initial state, even if already there.
    pub fn reset(&mut self) -> Result<(), MachineError> {
        let initial = self.config.initial.clone();
        self.change_state(initial.as_str())?;
        Ok(())
    }

    /// Declared states, optionally only those that accept `event`.
    ///
    /// Results follow declaration order and never depend on the current
    /// state.
    pub fn states(&self, event: Option<&str>) -> Vec<StateId> {
        self.config
            .states
            .iter()
            .filter(|(_, definition)| event.is_none_or(|event| definition.handles(event)))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Events that are valid from the current state, sorted.
    pub fn events(&self) -> Vec<EventId> {
        self.config
            .definition(self.state().as_str())
            .map(|definition| definition.transitions.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Step back to the previously recorded state.
    ///
    /// Returns `false` if there is nothing to undo. The earlier state is
    /// appended to the history rather than truncating it.
    pub fn undo(&mut self) -> bool {
        let from = self.state().clone();
        match self.history.step_back() {
            Some(to) => {
                tracing::debug!(
                    from = %from,
                    to = %to,
                    redo_budget = self.history.redo_budget(),
                    "undo"
                );
                true
            }
            None => false,
        }
    }

    /// Reverse the most recent unconsumed `undo`.
    ///
    /// Returns `false` if no undo is pending.
    pub fn redo(&mut self) -> bool {
        let from = self.state().clone();
        match self.history.step_forward() {
            Some(to) => {
                tracing::debug!(
                    from = %from,
                    to = %to,
                    redo_budget = self.history.redo_budget(),
                    "redo"
                );
                true
            }
            None => false,
        }
    }

    /// Forget the history, keeping only the current state.
    pub fn clear_history(&mut self) {
        self.history.clear();
        tracing::debug!(state = %self.state(), "history cleared");
    }

    pub fn can_undo(&self) -> bool {
        self.history.cursor() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history.redo_budget() > 0
    }

    /// Number of `redo` calls that would currently succeed.
    pub fn redo_budget(&self) -> usize {
        self.history.redo_budget()
    }

    /// Position of the current state within the undo timeline.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// Every visit recorded since construction or the last clear.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    /// Visited states, oldest first.
    pub fn path(&self) -> Vec<&StateId> {
        self.history.path()
    }

    pub fn initial(&self) -> &StateId {
        &self.config.initial
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }
}

impl TryFrom<Option<Configuration>> for StateMachine {
    type Error = MachineError;

    fn try_from(config: Option<Configuration>) -> Result<Self, Self::Error> {
        Self::try_new(config)
    }
}

impl From<Configuration> for StateMachine {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}
