//! Property-based tests for state machine history bookkeeping.
//!
//! These tests use proptest to drive a machine through random operation
//! sequences and check that the cursor invariants hold after every step.

use proptest::prelude::*;
use waymark::{fsm_config, MachineError, StateMachine};

const STATES: [&str; 4] = ["idle", "active", "paused", "ghost"];
const EVENTS: [&str; 4] = ["run", "pause", "stop", "fly"];

#[derive(Clone, Debug)]
enum Op {
    Change(usize),
    Trigger(usize),
    Undo,
    Redo,
    Reset,
    Clear,
}

fn machine() -> StateMachine {
    StateMachine::new(fsm_config! {
        initial: idle,
        states: {
            idle => { run => active },
            active => { pause => paused, stop => idle },
            paused => { run => active, stop => idle },
        }
    })
}

prop_compose! {
    fn arbitrary_index()(index in 0..4usize) -> usize {
        index
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_index().prop_map(Op::Change),
        arbitrary_index().prop_map(Op::Trigger),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Reset),
        Just(Op::Clear),
    ]
}

fn apply(machine: &mut StateMachine, op: &Op) {
    match op {
        Op::Change(i) => {
            let _ = machine.change_state(STATES[*i]);
        }
        Op::Trigger(i) => {
            let _ = machine.trigger(EVENTS[*i]);
        }
        Op::Undo => {
            machine.undo();
        }
        Op::Redo => {
            machine.redo();
        }
        Op::Reset => machine.reset(),
        Op::Clear => machine.clear_history(),
    }
}

proptest! {
    #[test]
    fn cursor_always_points_at_current_state(
        ops in prop::collection::vec(arbitrary_op(), 0..40)
    ) {
        let mut machine = machine();

        for op in &ops {
            apply(&mut machine, op);

            prop_assert!(!machine.history().is_empty());
            prop_assert!(machine.current_step() < machine.history().len());
            prop_assert_eq!(
                machine.history()[machine.current_step()].as_str(),
                machine.get_state()
            );
        }
    }

    #[test]
    fn successful_transition_disables_redo(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        target in arbitrary_index()
    ) {
        let mut machine = machine();
        for op in &ops {
            apply(&mut machine, op);
        }

        let before = machine.history().len();
        let step = machine.current_step();
        if machine.change_state(STATES[target]).is_ok() {
            prop_assert_eq!(machine.get_state(), STATES[target]);
            prop_assert_eq!(machine.current_step(), step + 1);
            prop_assert_eq!(machine.history().len(), step + 2);
            prop_assert!(machine.history().len() <= before + 1);
            prop_assert!(!machine.redo());
        }
    }

    #[test]
    fn failed_operations_leave_machine_untouched(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        event in arbitrary_index()
    ) {
        let mut machine = machine();
        for op in &ops {
            apply(&mut machine, op);
        }

        let state = machine.get_state().to_string();
        let history = machine.history().to_vec();
        let step = machine.current_step();

        if let Err(error) = machine.trigger(EVENTS[event]) {
            let is_unknown_event = matches!(error, MachineError::UnknownEvent { .. });
            prop_assert!(is_unknown_event);
            prop_assert_eq!(machine.get_state(), state.as_str());
            prop_assert_eq!(machine.history(), history.as_slice());
            prop_assert_eq!(machine.current_step(), step);
        }

        prop_assert!(machine.change_state("ghost").is_err());
    }

    #[test]
    fn undo_then_redo_restores_state(
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        let mut machine = machine();
        for op in &ops {
            apply(&mut machine, op);
        }

        let before = machine.get_state().to_string();
        if machine.undo() {
            prop_assert!(machine.redo());
            prop_assert_eq!(machine.get_state(), before.as_str());
        }
    }

    #[test]
    fn reset_always_returns_to_initial(
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        let mut machine = machine();
        for op in &ops {
            apply(&mut machine, op);
        }

        machine.reset();

        prop_assert_eq!(machine.get_state(), "idle");
        prop_assert_eq!(machine.history().len(), 1);
        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
    }

    #[test]
    fn get_states_ignores_runtime_history(
        ops in prop::collection::vec(arbitrary_op(), 0..30)
    ) {
        let mut machine = machine();
        for op in &ops {
            apply(&mut machine, op);
        }

        prop_assert_eq!(machine.get_states(None), vec!["idle", "active", "paused"]);
        prop_assert_eq!(machine.get_states(Some("stop")), vec!["active", "paused"]);
    }
}
