//! Visited-state history with an undo/redo cursor.
//!
//! The history is a linear sequence of visited states plus a cursor pointing
//! at the current one. Moving forward explicitly abandons anything past the
//! cursor; undo and redo only move the cursor.

use super::state::StateId;

/// Ordered history of visited states with a cursor into it.
///
/// The entry under the cursor is always the machine's current state, and
/// the history is never empty.
///
/// # Example
///
/// ```rust
/// use waymark::core::StateHistory;
///
/// let mut history = StateHistory::new("idle");
/// history.push("active");
/// history.push("done");
///
/// assert_eq!(history.undo(), Some("active"));
/// assert_eq!(history.redo(), Some("done"));
/// assert_eq!(history.entries(), ["idle", "active", "done"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateHistory {
    entries: Vec<StateId>,
    cursor: usize,
    redo_available: bool,
}

impl StateHistory {
    /// Create a history seeded with a single state.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
            redo_available: false,
        }
    }

    /// State under the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Record forward motion to `state`.
    ///
    /// Entries past the cursor are dropped first, so the new state always
    /// lands directly after the current one. Redo becomes unavailable.
    pub fn push(&mut self, state: impl Into<StateId>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(state.into());
        self.cursor += 1;
        self.redo_available = false;
    }

    /// Step the cursor back one entry.
    ///
    /// Returns the new current state, or `None` when already at the start.
    pub fn undo(&mut self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.redo_available = true;
        Some(self.current())
    }

    /// Step the cursor forward one entry.
    ///
    /// Only possible after an undo with no forward motion since, and only
    /// while recorded entries remain past the cursor. Consecutive redos are
    /// allowed.
    pub fn redo(&mut self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    /// Replace the whole history with `[state]`.
    pub fn clear(&mut self, state: impl Into<StateId>) {
        self.entries.clear();
        self.entries.push(state.into());
        self.cursor = 0;
        self.redo_available = false;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.redo_available && self.entries.len() > self.cursor + 1
    }

    /// All recorded states, oldest first.
    pub fn entries(&self) -> &[StateId] {
        &self.entries
    }

    /// Index of the current state within [`entries`](Self::entries).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: a history always holds at least one state.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
