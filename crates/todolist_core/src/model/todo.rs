//! Todo and todo-list domain model.
//!
//! # Responsibility
//! - Define the records owned by the session store.
//! - Provide completion-state helpers shared by store operations and display
//!   projections.
//!
//! # Invariants
//! - Ids are assigned once by an id generator and never reused.
//! - A list counts as done only when it is non-empty and every todo is done.

use serde::{Deserialize, Serialize};

/// Unique integer id for a single todo item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = u64;

/// Unique integer id for a todo list.
pub type TodoListId = u64;

/// A titled, completable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-unique id assigned at creation.
    pub id: TodoId,
    pub title: String,
    /// Completion flag flipped by toggle/complete operations.
    pub done: bool,
}

impl Todo {
    /// Creates a todo that starts undone.
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Flips the completion flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}

/// A named, ordered collection of todo items.
///
/// Item order is insertion order; display order is derived by the sort
/// policy and never stored back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Store-unique id assigned at creation.
    pub id: TodoListId,
    pub title: String,
    pub todos: Vec<Todo>,
}

impl TodoList {
    /// Creates a list with no todos.
    pub fn new(id: TodoListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// True when the list has todos and all of them are done.
    ///
    /// An empty list is never done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(|todo| todo.done)
    }

    /// True when any todo is still open.
    pub fn has_undone(&self) -> bool {
        self.todos.iter().any(|todo| !todo.done)
    }

    /// Finds a todo by id. Linear scan; lists stay session-sized.
    pub fn find_todo(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    /// Mutable counterpart of [`TodoList::find_todo`].
    pub fn find_todo_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }

    /// Removes a todo by id. Returns `false` when the id is unknown.
    pub fn remove_todo(&mut self, todo_id: TodoId) -> bool {
        match self.todos.iter().position(|todo| todo.id == todo_id) {
            Some(index) => {
                self.todos.remove(index);
                true
            }
            None => false,
        }
    }

    /// Marks every todo done. No-op for an empty list.
    pub fn mark_all_done(&mut self) {
        for todo in &mut self.todos {
            todo.done = true;
        }
    }

    /// Highest id used by this list or any of its todos.
    ///
    /// Seeded id generators use this to keep new ids above restored data.
    pub fn max_used_id(&self) -> u64 {
        self.todos.iter().map(|todo| todo.id).fold(self.id, u64::max)
    }
}
