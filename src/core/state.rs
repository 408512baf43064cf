//! State and event identifiers.
//!
//! States and events are named by plain strings, so a configuration can be
//! written by hand, loaded from JSON, or generated by the
//! [`fsm_config!`](crate::fsm_config) macro without any extra trait impls.

/// Identifier of a configured state.
///
/// # Example
///
/// ```rust
/// use waymark::core::StateId;
///
/// let idle: StateId = "idle".to_string();
/// assert_eq!(idle, "idle");
/// ```
pub type StateId = String;

/// Identifier of an event that requests a transition out of the current state.
pub type EventId = String;
