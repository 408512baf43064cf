//! Errors raised by state machine operations.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when constructing or driving a [`StateMachine`].
///
/// A failed operation leaves the machine untouched.
///
/// [`StateMachine`]: crate::machine::StateMachine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// No usable configuration was supplied at construction
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// The requested state is not in the state table
    #[error("No such state '{state}'")]
    UnknownState { state: String },

    /// The current state defines no transition for the event
    #[error("No such event '{event}' from state '{state}'")]
    UnknownEvent { event: String, state: String },
}
