//! Builder for constructing state machines.

use crate::config::{Configuration, StateTable};
use crate::core::{EventId, StateId};
use crate::error::MachineError;
use crate::machine::StateMachine;

/// Builder for constructing configurations and machines with a fluent API.
///
/// Unlike loading a configuration from JSON, building always validates it:
/// the initial state and every transition target must be declared.
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    initial: Option<StateId>,
    states: StateTable,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring it again is a no-op.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states.get_mut_or_default(state.into());
        self
    }

    /// Declare several states at once, in order.
    pub fn states<I, T>(self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<StateId>,
    {
        states.into_iter().fold(self, |builder, state| builder.state(state))
    }

    /// Add a transition. Declares `from` if needed; `to` must be declared
    /// separately. A later transition for the same event replaces it.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.states
            .get_mut_or_default(from.into())
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build and validate the configuration.
    pub fn build_configuration(self) -> Result<Configuration, MachineError> {
        let initial = self.initial.ok_or_else(|| {
            MachineError::configuration("initial state not specified, call .initial(state)")
        })?;

        let config = Configuration::new(initial, self.states);
        config.validate()?;
        Ok(config)
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine, MachineError> {
        self.build_configuration().map(StateMachine::new)
    }
}
