//! Id generation collaborators.
//!
//! # Responsibility
//! - Produce unique integer ids shared by lists and todos.
//! - Keep restored sessions from reusing ids already present in the data.
//!
//! # Invariants
//! - One generator never returns the same value twice.
//! - A generator seeded from existing lists starts above every id they use.

use crate::model::todo::TodoList;

/// Source of unique integer ids for store entities.
pub trait IdGenerator {
    /// Returns the next unused id.
    fn next_id(&mut self) -> u64;
}

/// Monotonic counter generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    /// Starts a fresh sequence at 1.
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Continues above every id used by `lists`, so seeded or restored data
    /// keeps the uniqueness invariant without renumbering.
    pub fn starting_after(lists: &[TodoList]) -> Self {
        let highest = lists.iter().map(TodoList::max_used_id).max().unwrap_or(0);
        Self { next: highest + 1 }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}
