//! Configuration errors.

use thiserror::Error;

/// Errors that can occur while supplying, parsing, building or validating a
/// configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No configuration was supplied at all
    #[error("config must be passed")]
    Missing,

    /// Builder finished without an initial state
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// Configuration text could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Initial state '{initial}' is not declared in the state table")]
    UnknownInitialState { initial: String },

    #[error("Transition '{state}' --{event}--> '{target}' targets an undeclared state")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },
}
