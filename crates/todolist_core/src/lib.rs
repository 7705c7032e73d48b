//! Core domain logic for the todolist session store.
//! This crate is the single source of truth for list/todo invariants.

pub mod ids;
pub mod logging;
pub mod model;
pub mod seed;
pub mod sort;
pub mod store;

pub use ids::{IdGenerator, SequentialIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId, TodoList, TodoListId};
pub use seed::{
    sample_todo_lists, EmptySeedProvider, JsonSeedProvider, SeedDataProvider, SeedError,
    SeedResult,
};
pub use store::TodoStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
