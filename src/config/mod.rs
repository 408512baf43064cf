//! Machine configuration: the initial state plus the state table.
//!
//! A [`Config`] mirrors the JSON shape
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle":   { "transitions": { "run": "active" } },
//!     "active": { "transitions": { "stop": "idle" } }
//!   }
//! }
//! ```
//!
//! and can be produced from JSON, with [`ConfigBuilder`], or with the
//! [`fsm_config!`](crate::fsm_config) macro. Nothing is validated on
//! construction; [`Config::validate`] checks the graph on request.

pub mod builder;
pub mod error;

pub use builder::ConfigBuilder;
pub use error::ConfigError;

use crate::core::{EventId, OrderedTable, StateId};
use serde::{Deserialize, Serialize};

/// Outgoing transitions of a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescriptor {
    /// Event name to destination state
    #[serde(default)]
    pub transitions: OrderedTable<StateId>,
}

impl StateDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `event` to move to `target`, replacing any earlier target.
    pub fn add_transition(
        &mut self,
        event: impl Into<EventId>,
        target: impl Into<StateId>,
    ) -> &mut Self {
        self.transitions.insert(event, target.into());
        self
    }

    /// Destination for `event`, if this state defines it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }
}

/// Immutable description of a state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    initial: StateId,
    states: OrderedTable<StateDescriptor>,
}

impl Config {
    /// Create a configuration with an empty state table.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: OrderedTable::new(),
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// A `null` document counts as no configuration at all.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::config::{Config, ConfigError};
    ///
    /// let config = Config::from_json(
    ///     r#"{"initial": "idle", "states": {"idle": {"transitions": {"run": "active"}}}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.target("idle", "run"), Some("active"));
    ///
    /// assert_eq!(Config::from_json("null"), Err(ConfigError::Missing));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let parsed: Option<Self> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        parsed.ok_or(ConfigError::Missing)
    }

    /// Serialize the configuration back to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Declare `state` if needed and return its descriptor for editing.
    pub fn declare_state(&mut self, state: impl Into<StateId>) -> &mut StateDescriptor {
        self.states.get_or_insert_with(state, StateDescriptor::new)
    }

    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn states(&self) -> &OrderedTable<StateDescriptor> {
        &self.states
    }

    pub fn state(&self, state: &str) -> Option<&StateDescriptor> {
        self.states.get(state)
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Destination of `event` from `state`, if both are defined.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state)?.target(event)
    }

    /// Check that the initial state and every transition target are
    /// declared, reporting every problem found.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::config::{ConfigBuilder, ConfigError};
    ///
    /// let config = ConfigBuilder::new()
    ///     .initial("start")
    ///     .transition("idle", "run", "active")
    ///     .build()
    ///     .unwrap();
    ///
    /// let errors = config.validate().unwrap_err();
    /// assert_eq!(errors.len(), 2);
    /// assert!(matches!(errors[0], ConfigError::UnknownInitialState { .. }));
    /// ```
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if !self.contains_state(&self.initial) {
            errors.push(ConfigError::UnknownInitialState {
                initial: self.initial.clone(),
            });
        }

        for (state, descriptor) in self.states.iter() {
            for (event, target) in descriptor.transitions.iter() {
                if !self.contains_state(target) {
                    errors.push(ConfigError::UnknownTarget {
                        state: state.to_string(),
                        event: event.to_string(),
                        target: target.clone(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
