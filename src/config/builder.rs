//! Builder for constructing configurations.

use crate::config::error::ConfigError;
use crate::config::Config;
use crate::core::StateId;

/// Builder for constructing a [`Config`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use waymark::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("idle")
///     .transition("idle", "run", "active")
///     .transition("active", "stop", "idle")
///     .state("broken")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.states().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, with no transitions unless added separately.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.config.declare_state(state);
        self
    }

    /// Add a transition, declaring `from` if it is not declared yet.
    ///
    /// `to` is not declared; see [`Config::validate`].
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<String>,
        to: impl Into<StateId>,
    ) -> Self {
        self.config.declare_state(from).add_transition(event, to);
        self
    }

    /// Build the configuration.
    /// Returns an error if no initial state was given.
    pub fn build(self) -> Result<Config, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;
        let mut config = self.config;
        config.initial = initial;
        Ok(config)
    }
}
