//! In-memory session store for todo lists.
//!
//! # Responsibility
//! - Own all lists and todos for one user session.
//! - Provide CRUD operations plus display-ordered projections.
//!
//! # Invariants
//! - Reads hand out clones; callers never alias store-internal state.
//! - Not-found conditions surface as `None`/`false`, never as panics.
//! - Ids come exclusively from the configured id generator.

use crate::ids::{IdGenerator, SequentialIdGenerator};
use crate::model::todo::{Todo, TodoId, TodoList, TodoListId};
use crate::seed::{SeedDataProvider, SeedResult};
use crate::sort::{sort_todo_lists, sort_todos};
use log::info;
use std::error::Error;

/// Per-session todo store.
///
/// Constructed once per session from seed data or restored state and dropped
/// with the session; there is no cross-session sharing and no locking.
pub struct TodoStore<G: IdGenerator = SequentialIdGenerator> {
    todo_lists: Vec<TodoList>,
    ids: G,
}

impl TodoStore<SequentialIdGenerator> {
    /// Creates an empty store with a fresh id sequence.
    pub fn new() -> Self {
        Self::from_lists(Vec::new())
    }

    /// Builds a store from a seed provider.
    ///
    /// # Errors
    /// Returns the provider's error when seed data cannot be loaded.
    pub fn from_seed<P: SeedDataProvider>(provider: &P) -> SeedResult<Self> {
        let lists = provider.load()?;
        Ok(Self::from_lists(lists))
    }

    /// Resumes a store from prior session state.
    ///
    /// New ids continue above every id present in `todo_lists`.
    pub fn from_lists(todo_lists: Vec<TodoList>) -> Self {
        let ids = SequentialIdGenerator::starting_after(&todo_lists);
        let todo_count: usize = todo_lists.iter().map(|list| list.todos.len()).sum();
        info!(
            "event=store_init module=store status=ok lists={} todos={}",
            todo_lists.len(),
            todo_count
        );
        Self { todo_lists, ids }
    }
}

impl Default for TodoStore<SequentialIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> TodoStore<G> {
    /// Builds a store around a caller-provided id generator.
    ///
    /// The generator must not produce ids already used by `todo_lists`.
    pub fn with_id_generator(todo_lists: Vec<TodoList>, ids: G) -> Self {
        Self { todo_lists, ids }
    }

    /// Returns a cloned list by id.
    pub fn load_todo_list(&self, todo_list_id: TodoListId) -> Option<TodoList> {
        self.find_todo_list(todo_list_id).cloned()
    }

    /// Returns a cloned todo by list and todo id.
    pub fn load_todo(&self, todo_list_id: TodoListId, todo_id: TodoId) -> Option<Todo> {
        self.find_todo(todo_list_id, todo_id).cloned()
    }

    /// True when `todo_list` is non-empty and every todo is done.
    pub fn is_done_todo_list(&self, todo_list: &TodoList) -> bool {
        todo_list.is_done()
    }

    /// True when any todo in `todo_list` is still open.
    pub fn has_undone_todos(&self, todo_list: &TodoList) -> bool {
        todo_list.has_undone()
    }

    /// Flips one todo's completion flag.
    ///
    /// Returns the new state, or `None` when the list or todo is unknown.
    pub fn toggle_done_todo(
        &mut self,
        todo_list_id: TodoListId,
        todo_id: TodoId,
    ) -> Option<bool> {
        let todo = self.find_todo_mut(todo_list_id, todo_id)?;
        Some(todo.toggle())
    }

    /// Removes one todo. Returns `false` when the list or todo is unknown.
    pub fn delete_todo(&mut self, todo_list_id: TodoListId, todo_id: TodoId) -> bool {
        match self.find_todo_list_mut(todo_list_id) {
            Some(todo_list) => todo_list.remove_todo(todo_id),
            None => false,
        }
    }

    /// Appends a new undone todo to a list.
    ///
    /// Returns the generated id, or `None` when the list is unknown.
    pub fn create_todo(
        &mut self,
        todo_list_id: TodoListId,
        title: impl Into<String>,
    ) -> Option<TodoId> {
        let index = self
            .todo_lists
            .iter()
            .position(|list| list.id == todo_list_id)?;
        let id = self.ids.next_id();
        self.todo_lists[index].todos.push(Todo::new(id, title));
        Some(id)
    }

    /// Marks every todo in a list done.
    ///
    /// Returns `false` when the list is unknown. An empty list succeeds but
    /// still does not count as done.
    pub fn mark_all_done(&mut self, todo_list_id: TodoListId) -> bool {
        match self.find_todo_list_mut(todo_list_id) {
            Some(todo_list) => {
                todo_list.mark_all_done();
                true
            }
            None => false,
        }
    }

    /// Case-sensitive exact title scan.
    ///
    /// Title uniqueness is checked here by callers, not enforced by writes.
    pub fn exists_todo_list_title(&self, title: &str) -> bool {
        self.todo_lists.iter().any(|todo_list| todo_list.title == title)
    }

    /// Renames a list. Returns `false` when the list is unknown.
    pub fn set_todo_list_title(
        &mut self,
        todo_list_id: TodoListId,
        title: impl Into<String>,
    ) -> bool {
        match self.find_todo_list_mut(todo_list_id) {
            Some(todo_list) => {
                todo_list.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Removes a list and every todo it owns.
    ///
    /// Returns `false` when the list is unknown.
    pub fn delete_todo_list(&mut self, todo_list_id: TodoListId) -> bool {
        match self
            .todo_lists
            .iter()
            .position(|list| list.id == todo_list_id)
        {
            Some(index) => {
                self.todo_lists.remove(index);
                true
            }
            None => false,
        }
    }

    /// Appends a new empty list and returns its generated id.
    ///
    /// Duplicate titles are allowed; see [`TodoStore::exists_todo_list_title`].
    pub fn create_todo_list(&mut self, title: impl Into<String>) -> TodoListId {
        let id = self.ids.next_id();
        self.todo_lists.push(TodoList::new(id, title));
        id
    }

    /// Display projection of all lists: undone lists first, each partition
    /// sorted by title case-insensitively. Returns clones.
    pub fn sorted_todo_lists(&self) -> Vec<TodoList> {
        let mut undone = Vec::new();
        let mut done = Vec::new();
        for todo_list in &self.todo_lists {
            if todo_list.is_done() {
                done.push(todo_list.clone());
            } else {
                undone.push(todo_list.clone());
            }
        }
        sort_todo_lists(undone, done)
    }

    /// Display projection of one list's todos under the same partition
    /// policy. Returns clones.
    pub fn sorted_todos(&self, todo_list: &TodoList) -> Vec<Todo> {
        let mut undone = Vec::new();
        let mut done = Vec::new();
        for todo in &todo_list.todos {
            if todo.done {
                done.push(todo.clone());
            } else {
                undone.push(todo.clone());
            }
        }
        sort_todos(undone, done)
    }

    /// Cloned full state, for session save or inspection.
    pub fn snapshot(&self) -> Vec<TodoList> {
        self.todo_lists.clone()
    }

    /// Reports whether an error is a title-uniqueness violation.
    ///
    /// Always `false`: the in-memory store carries no integrity constraints,
    /// and real enforcement belongs to a persistence backend outside this
    /// crate.
    pub fn is_unique_constraint_violation(&self, _error: &dyn Error) -> bool {
        false
    }

    fn find_todo_list(&self, todo_list_id: TodoListId) -> Option<&TodoList> {
        self.todo_lists.iter().find(|list| list.id == todo_list_id)
    }

    fn find_todo_list_mut(&mut self, todo_list_id: TodoListId) -> Option<&mut TodoList> {
        self.todo_lists
            .iter_mut()
            .find(|list| list.id == todo_list_id)
    }

    fn find_todo(&self, todo_list_id: TodoListId, todo_id: TodoId) -> Option<&Todo> {
        self.find_todo_list(todo_list_id)?.find_todo(todo_id)
    }

    fn find_todo_mut(&mut self, todo_list_id: TodoListId, todo_id: TodoId) -> Option<&mut Todo> {
        self.find_todo_list_mut(todo_list_id)?.find_todo_mut(todo_id)
    }
}
