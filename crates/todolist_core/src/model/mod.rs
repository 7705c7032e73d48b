//! Domain model for todo lists and their items.
//!
//! # Responsibility
//! - Define the canonical data structures held by the session store.
//! - Keep completion-state predicates next to the data they describe.
//!
//! # Invariants
//! - Every `Todo` id is unique within its owning `TodoList`.
//! - Every `TodoList` id is unique within one store.

pub mod todo;
