//! Waymark: a small finite-state machine with undo/redo history
//!
//! A machine holds one current state, moves either by jumping straight to a
//! configured state or by firing an event defined on the current state, and
//! records every visited state in a linear history that can be walked with
//! undo and redo.
//!
//! # Core Concepts
//!
//! - **Config**: The initial state plus a table of states and their
//!   event transitions, owned by the machine once supplied
//! - **StateMachine**: The current state, its history, and the operations
//!   that move between them
//! - **History**: Visited states with a cursor; forward motion after an undo
//!   discards the undone steps
//!
//! # Example
//!
//! ```rust
//! use waymark::{fsm_config, MachineError, StateMachine};
//!
//! let mut machine = StateMachine::new(fsm_config! {
//!     initial: idle,
//!     states: {
//!         idle => { run => active },
//!         active => { stop => idle },
//!     }
//! });
//!
//! machine.trigger("run").unwrap();
//! assert_eq!(machine.get_state(), "active");
//!
//! assert!(matches!(
//!     machine.trigger("run"),
//!     Err(MachineError::UnknownEvent { .. })
//! ));
//!
//! assert!(machine.undo());
//! assert_eq!(machine.get_state(), "idle");
//! assert_eq!(machine.get_states(Some("run")), vec!["idle"]);
//! ```

pub mod config;
pub mod core;
pub mod machine;
mod macros;

// Re-export commonly used types
pub use crate::config::{Config, ConfigBuilder, ConfigError, StateDescriptor};
pub use crate::core::{EventId, StateHistory, StateId};
pub use crate::machine::{MachineError, StateMachine, StateMachineBuilder};
