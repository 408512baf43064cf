//! Builder for constructing state machines.

use crate::config::{Config, ConfigError};
use crate::machine::{MachineError, StateMachine};

/// Builder that assembles a [`StateMachine`] from an optional configuration.
///
/// Useful when the configuration is produced conditionally; building
/// without one fails with [`MachineError::Configuration`].
///
/// # Example
///
/// ```rust
/// use waymark::config::ConfigBuilder;
/// use waymark::machine::{MachineError, StateMachineBuilder};
///
/// let missing = StateMachineBuilder::new().build();
/// assert!(matches!(missing, Err(MachineError::Configuration(_))));
///
/// let config = ConfigBuilder::new()
///     .initial("idle")
///     .transition("idle", "run", "active")
///     .build()
///     .unwrap();
/// let machine = StateMachineBuilder::new().config(config).build().unwrap();
/// assert_eq!(machine.get_state(), "idle");
/// ```
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    config: Option<Config>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration (required).
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the configuration from an `Option`, e.g. one loaded lazily.
    pub fn maybe_config(mut self, config: Option<Config>) -> Self {
        self.config = config;
        self
    }

    /// Build the state machine.
    /// Returns an error if no configuration was supplied.
    pub fn build(self) -> Result<StateMachine, MachineError> {
        let config = self.config.ok_or(ConfigError::Missing)?;
        Ok(StateMachine::new(config))
    }
}
