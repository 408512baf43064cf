//! Core state machine types and bookkeeping.
//!
//! This module contains the building blocks the machine is assembled from:
//! - State and event identifiers
//! - The declaration-ordered table used for states and transitions
//! - History tracking with an undo/redo cursor
//!
//! Nothing in this module knows about configuration or errors; the
//! [`machine`](crate::machine) module layers those on top.

mod history;
mod state;
mod table;

pub use history::StateHistory;
pub use state::{EventId, StateId};
pub use table::OrderedTable;
