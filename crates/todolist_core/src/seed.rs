//! Seed data providers for store initialization.
//!
//! # Responsibility
//! - Supply the initial lists a session store is built from.
//! - Reject seed data that violates id-uniqueness invariants on load.
//!
//! # Invariants
//! - A provider either returns invariant-clean lists or an error; the store
//!   never holds data it would have to repair.
//! - Todo ids must be unique within their owning list; list ids must be
//!   unique across the seed.

use crate::model::todo::{Todo, TodoId, TodoList, TodoListId};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for seed loading.
pub type SeedResult<T> = Result<T, SeedError>;

/// Seed-layer error for parse and invariant failures.
#[derive(Debug)]
pub enum SeedError {
    /// Seed document is not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// Two lists share one id.
    DuplicateListId(TodoListId),
    /// Two todos in the same list share one id.
    DuplicateTodoId {
        list_id: TodoListId,
        todo_id: TodoId,
    },
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid seed document: {err}"),
            Self::DuplicateListId(list_id) => {
                write!(f, "duplicate todo list id in seed data: {list_id}")
            }
            Self::DuplicateTodoId { list_id, todo_id } => write!(
                f,
                "duplicate todo id {todo_id} within list {list_id} in seed data"
            ),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::DuplicateListId(_) => None,
            Self::DuplicateTodoId { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Source of initial session data.
pub trait SeedDataProvider {
    /// Loads the initial ordered lists for a fresh store.
    fn load(&self) -> SeedResult<Vec<TodoList>>;
}

/// Seed provider backed by a JSON document.
///
/// Expects the plain wire shape of the model types:
/// `[{"id": 1, "title": "...", "todos": [{"id": 2, "title": "...", "done": false}]}]`.
pub struct JsonSeedProvider {
    source: String,
}

impl JsonSeedProvider {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl SeedDataProvider for JsonSeedProvider {
    fn load(&self) -> SeedResult<Vec<TodoList>> {
        let lists: Vec<TodoList> = serde_json::from_str(&self.source)?;
        ensure_unique_ids(&lists)?;
        Ok(lists)
    }
}

/// Seed provider for sessions that start with no lists.
pub struct EmptySeedProvider;

impl SeedDataProvider for EmptySeedProvider {
    fn load(&self) -> SeedResult<Vec<TodoList>> {
        Ok(Vec::new())
    }
}

/// Small built-in fixture used by the CLI probe and tests.
pub fn sample_todo_lists() -> Vec<TodoList> {
    let mut errands = TodoList::new(1, "Errands");
    errands.todos.push(done(4, "Return library books"));
    errands.todos.push(Todo::new(5, "Drop off dry cleaning"));
    errands.todos.push(Todo::new(6, "Pick up package"));

    let mut groceries = TodoList::new(2, "Groceries");
    groceries.todos.push(done(7, "Milk"));
    groceries.todos.push(done(8, "Coffee beans"));

    let reading = TodoList::new(3, "Reading");

    vec![errands, groceries, reading]
}

fn done(id: TodoId, title: &str) -> Todo {
    let mut todo = Todo::new(id, title);
    todo.done = true;
    todo
}

fn ensure_unique_ids(lists: &[TodoList]) -> SeedResult<()> {
    let mut list_ids = HashSet::new();
    for list in lists {
        if !list_ids.insert(list.id) {
            return Err(SeedError::DuplicateListId(list.id));
        }

        let mut todo_ids = HashSet::new();
        for todo in &list.todos {
            if !todo_ids.insert(todo.id) {
                return Err(SeedError::DuplicateTodoId {
                    list_id: list.id,
                    todo_id: todo.id,
                });
            }
        }
    }
    Ok(())
}
