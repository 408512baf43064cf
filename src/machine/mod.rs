//! The state machine and its operations.
//!
//! A [`StateMachine`] owns its [`Config`] and a [`StateHistory`]. The current
//! state is always the history entry under the cursor, so the two can never
//! drift apart.
//!
//! Explicit transitions ([`change_state`](StateMachine::change_state) and
//! [`trigger`](StateMachine::trigger)) fail with a [`MachineError`] on bad
//! input. [`undo`](StateMachine::undo) and [`redo`](StateMachine::redo) never
//! fail; running out of history is reported as `false`.

pub mod builder;
pub mod error;

pub use builder::StateMachineBuilder;
pub use error::MachineError;

use crate::config::Config;
use crate::core::StateHistory;
use tracing::debug;

/// Finite-state machine with event transitions and undo/redo history.
///
/// # Example
///
/// ```rust
/// use waymark::config::Config;
/// use waymark::StateMachine;
///
/// let config = Config::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "run": "active" } },
///             "active": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("run").unwrap();
/// machine.trigger("stop").unwrap();
/// assert_eq!(machine.get_state(), "idle");
///
/// assert!(machine.undo());
/// assert_eq!(machine.get_state(), "active");
/// assert!(machine.redo());
/// assert_eq!(machine.get_state(), "idle");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Config,
    history: StateHistory,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// The configuration is taken by value, so later edits to the caller's
    /// copy cannot reach the machine. Neither the initial state nor any
    /// transition target is checked here; use [`Config::validate`] for that.
    pub fn new(config: Config) -> Self {
        let history = StateHistory::new(config.initial());
        Self { config, history }
    }

    /// Create a machine from JSON configuration text.
    ///
    /// A `null` document or unparsable text fails with
    /// [`MachineError::Configuration`].
    pub fn from_json(json: &str) -> Result<Self, MachineError> {
        Ok(Self::new(Config::from_json(json)?))
    }

    /// Current state.
    pub fn get_state(&self) -> &str {
        self.history.current()
    }

    /// Jump directly to `state`, ignoring the transition table.
    pub fn change_state(&mut self, state: &str) -> Result<(), MachineError> {
        if !self.config.contains_state(state) {
            let error = MachineError::UnknownState {
                state: state.to_string(),
            };
            debug!(%error, "change_state rejected");
            return Err(error);
        }

        debug!(from = %self.get_state(), to = %state, kind = "change_state", "state changed");
        self.history.push(state);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// The destination is taken as configured, declared or not.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let target = self
            .resolve(event)
            .inspect_err(|error| debug!(%error, "trigger rejected"))?;

        debug!(from = %self.get_state(), to = %target, event, "state changed");
        self.history.push(target);
        Ok(())
    }

    /// Destination of `event` from the current state.
    fn resolve(&self, event: &str) -> Result<String, MachineError> {
        let current = self.get_state();
        let descriptor = self
            .config
            .state(current)
            .ok_or_else(|| MachineError::UnknownState {
                state: current.to_string(),
            })?;
        let target = descriptor
            .target(event)
            .ok_or_else(|| MachineError::UnknownEvent {
                event: event.to_string(),
                state: current.to_string(),
            })?;
        Ok(target.to_string())
    }

    /// Return to the initial state and start a fresh history.
    pub fn reset(&mut self) {
        debug!(initial = %self.config.initial(), "machine reset");
        self.history.clear(self.config.initial());
    }

    /// Forget all history, keeping the current state.
    pub fn clear_history(&mut self) {
        debug!(state = %self.get_state(), "history cleared");
        let current = self.get_state().to_string();
        self.history.clear(current);
    }

    /// Configured states, in declaration order.
    ///
    /// With `Some(event)`, only the states that define a transition for
    /// `event` are returned. Unknown events yield an empty list.
    pub fn get_states(&self, event: Option<&str>) -> Vec<&str> {
        let states = self.config.states().iter();
        match event {
            None => states.map(|(state, _)| state).collect(),
            Some(event) => states
                .filter(|(_, descriptor)| descriptor.transitions.contains_key(event))
                .map(|(state, _)| state)
                .collect(),
        }
    }

    /// Step back to the previous state. Returns `false` at the start of history.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(state) => {
                debug!(to = %state, "undo");
                true
            }
            None => false,
        }
    }

    /// Replay the step most recently undone.
    ///
    /// Returns `false` unless an undo happened with no explicit transition
    /// or reset since, and undone steps remain.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(state) => {
                debug!(to = %state, "redo");
                true
            }
            None => false,
        }
    }

    /// Whether an undo step is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Visited states since construction or the last reset, oldest first.
    pub fn history(&self) -> &[String] {
        self.history.entries()
    }

    /// Index of the current state within [`history`](Self::history).
    pub fn current_step(&self) -> usize {
        self.history.cursor()
    }

    /// Configured initial state
    pub fn initial_state(&self) -> &str {
        self.config.initial()
    }

    /// Configuration the machine was built from
    pub fn config(&self) -> &Config {
        &self.config
    }
}
