//! Property-based tests for the state machine.
//!
//! These tests use proptest to drive machines through random operation
//! sequences and check that the history invariants hold after every step.

use proptest::prelude::*;
use retrace::{MachineBuilder, MachineError, StateId, StateMachine};

const STATES: [&str; 4] = ["idle", "loading", "ready", "failed"];
const EVENTS: [&str; 4] = ["load", "finish", "fail", "retry"];

fn fixture() -> StateMachine {
    MachineBuilder::new()
        .initial("idle")
        .states(STATES)
        .transition("idle", "load", "loading")
        .transition("loading", "finish", "ready")
        .transition("loading", "fail", "failed")
        .transition("failed", "retry", "loading")
        .transition("ready", "load", "loading")
        .build()
        .unwrap()
}

#[derive(Clone, Debug)]
enum Op {
    Change(&'static str),
    Trigger(&'static str),
    Reset,
    Undo,
    Redo,
    Clear,
}

prop_compose! {
    fn arbitrary_name(names: &'static [&'static str])(index in 0..names.len() + 1) -> &'static str {
        names.get(index).copied().unwrap_or("bogus")
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_name(&STATES).prop_map(Op::Change),
        arbitrary_name(&EVENTS).prop_map(Op::Trigger),
        Just(Op::Reset),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Clear),
    ]
}

/// Observable snapshot used to check that failures do not mutate.
fn snapshot(machine: &StateMachine) -> (StateId, usize, usize, usize) {
    (
        machine.state().clone(),
        machine.history().len(),
        machine.cursor(),
        machine.redo_budget(),
    )
}

fn apply(machine: &mut StateMachine, op: &Op) -> Result<(), MachineError> {
    match op {
        Op::Change(state) => machine.change_state(state).map(|_| ()),
        Op::Trigger(event) => machine.trigger(event),
        Op::Reset => machine.reset(),
        Op::Undo => {
            machine.undo();
            Ok(())
        }
        Op::Redo => {
            machine.redo();
            Ok(())
        }
        Op::Clear => {
            machine.clear_history();
            Ok(())
        }
    }
}

proptest! {
    #[test]
    fn history_invariants_hold(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = fixture();

        for op in &ops {
            let before = snapshot(&machine);
            let result = apply(&mut machine, op);

            if result.is_err() {
                prop_assert_eq!(snapshot(&machine), before);
            }

            let history = machine.history();
            prop_assert!(!history.is_empty());
            prop_assert!(machine.cursor() < history.len());
            prop_assert_eq!(&history[machine.cursor()].state, machine.state());
            prop_assert!(STATES.contains(&machine.state().as_str()));
            prop_assert_eq!(machine.can_undo(), machine.cursor() > 0);
            prop_assert_eq!(machine.can_redo(), machine.redo_budget() > 0);
        }
    }

    #[test]
    fn forward_moves_disable_redo(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        target in arbitrary_name(&STATES),
    ) {
        let mut machine = fixture();
        for op in &ops {
            let _ = apply(&mut machine, op);
        }

        if machine.change_state(target).is_ok() {
            prop_assert!(!machine.redo());
        }
        machine.reset().unwrap();
        prop_assert!(!machine.redo());
    }

    #[test]
    fn undo_then_redo_returns_to_same_state(
        ops in prop::collection::vec(arbitrary_op(), 0..20)
    ) {
        let mut machine = fixture();
        for op in &ops {
            let _ = apply(&mut machine, op);
        }

        let state = machine.state().clone();
        if machine.undo() {
            prop_assert!(machine.redo());
            prop_assert_eq!(machine.state(), &state);
        } else {
            prop_assert_eq!(machine.cursor(), 0);
        }
    }

    #[test]
    fn every_operation_appends_at_most_one_entry(
        ops in prop::collection::vec(arbitrary_op(), 1..30)
    ) {
        let mut machine = fixture();

        for op in &ops {
            let before = machine.history().len();
            let _ = apply(&mut machine, op);
            let after = machine.history().len();

            match op {
                Op::Clear => prop_assert_eq!(after, 1),
                _ => prop_assert!(after == before || after == before + 1),
            }
        }
    }

    #[test]
    fn states_filter_matches_transition_tables(event in arbitrary_name(&EVENTS)) {
        let machine = fixture();
        let config = machine.configuration();

        let expected: Vec<StateId> = config
            .state_ids()
            .filter(|id| config.definition(id.as_str()).unwrap().handles(event))
            .cloned()
            .collect();

        prop_assert_eq!(machine.states(Some(event)), expected);
        prop_assert_eq!(machine.states(None).len(), STATES.len());
    }
}
