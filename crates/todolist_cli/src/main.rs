//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `todolist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use todolist_core::{sample_todo_lists, TodoStore};

fn main() {
    println!("todolist_core ping={}", todolist_core::ping());
    println!("todolist_core version={}", todolist_core::core_version());

    let store = TodoStore::from_lists(sample_todo_lists());
    for todo_list in store.sorted_todo_lists() {
        let state = if store.is_done_todo_list(&todo_list) {
            "done"
        } else {
            "open"
        };
        println!("[{state}] {}", todo_list.title);
        for todo in store.sorted_todos(&todo_list) {
            let mark = if todo.done { "x" } else { " " };
            println!("  [{mark}] {}", todo.title);
        }
    }
}
