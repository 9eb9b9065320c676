//! Linear undo/redo history of visited states.
//!
//! The log only ever grows. Undo and redo do not move a pointer through a
//! fixed log; they re-enter an earlier (or later) state and append it as a
//! new entry. The `cursor` tracks the logical position within the timeline
//! that existed before the undo, so it can lag behind the physical length.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single visit to a state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state that was entered
    pub state: StateId,
    /// When the state was entered
    pub entered_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn now(state: StateId) -> Self {
        Self {
            state,
            entered_at: Utc::now(),
        }
    }
}

/// Ordered log of visited states with an undo cursor and redo budget.
///
/// Invariants:
/// - the log is never empty
/// - `entries[cursor].state` is the current state
/// - `redo_budget > 0` implies `entries[cursor + 1]` exists
///
/// Serialize-only: a history is only ever built by the machine.
///
/// # Example
///
/// ```rust
/// use retrace::core::{History, StateId};
///
/// let mut history = History::new(StateId::new("a"));
/// history.advance(StateId::new("b"));
///
/// assert_eq!(history.step_back(), Some(StateId::new("a")));
/// assert_eq!(history.step_forward(), Some(StateId::new("b")));
/// assert_eq!(history.step_forward(), None);
///
/// // a, b, a, b
/// assert_eq!(history.len(), 4);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    redo_budget: usize,
}

impl History {
    /// Start a history whose only entry is `first`.
    pub fn new(first: StateId) -> Self {
        Self {
            entries: vec![HistoryEntry::now(first)],
            cursor: 0,
            redo_budget: 0,
        }
    }

    /// The state at the cursor.
    pub fn current(&self) -> &StateId {
        &self.entries[self.cursor].state
    }

    /// Record a forward move. Discards any pending redo budget.
    pub fn advance(&mut self, state: StateId) {
        self.entries.push(HistoryEntry::now(state));
        self.cursor = self.entries.len() - 1;
        self.redo_budget = 0;
    }

    /// Re-enter the state before the cursor, appending it to the log.
    ///
    /// Returns `None` without touching the log when the cursor is at the
    /// first entry.
    pub fn step_back(&mut self) -> Option<StateId> {
        if self.cursor == 0 {
            return None;
        }
        let target = self.entries[self.cursor - 1].state.clone();
        self.entries.push(HistoryEntry::now(target.clone()));
        self.redo_budget += 1;
        self.cursor -= 1;
        Some(target)
    }

    /// Re-enter the state after the cursor, consuming one unit of redo budget.
    pub fn step_forward(&mut self) -> Option<StateId> {
        if self.redo_budget == 0 {
            return None;
        }
        let target = self.entries.get(self.cursor + 1)?.state.clone();
        self.entries.push(HistoryEntry::now(target.clone()));
        self.redo_budget -= 1;
        self.cursor += 1;
        Some(target)
    }

    /// Forget everything except the current state.
    pub fn clear(&mut self) {
        let current = self.current().clone();
        self.entries = vec![HistoryEntry::now(current)];
        self.cursor = 0;
        self.redo_budget = 0;
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// States in the order they were entered.
    pub fn path(&self) -> Vec<&StateId> {
        self.entries.iter().map(|entry| &entry.state).collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn redo_budget(&self) -> usize {
        self.redo_budget
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
