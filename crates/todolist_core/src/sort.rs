//! Display ordering policy for lists and todos.
//!
//! # Responsibility
//! - Order each undone/done partition by title, case-insensitively.
//! - Keep undone entries ahead of done entries.
//!
//! # Invariants
//! - Sorting is stable: equal titles keep their relative input order.
//! - Ordering works on owned values; store state is never mutated.

use crate::model::todo::{Todo, TodoList};

/// Orders lists for display: undone first, each partition sorted by title.
///
/// The caller performs the undone/done partitioning; this function only
/// fixes the order within and between the partitions.
pub fn sort_todo_lists(mut undone: Vec<TodoList>, mut done: Vec<TodoList>) -> Vec<TodoList> {
    undone.sort_by_key(|list| title_sort_key(&list.title));
    done.sort_by_key(|list| title_sort_key(&list.title));
    undone.extend(done);
    undone
}

/// Orders todos for display with the same partition policy as lists.
pub fn sort_todos(mut undone: Vec<Todo>, mut done: Vec<Todo>) -> Vec<Todo> {
    undone.sort_by_key(|todo| title_sort_key(&todo.title));
    done.sort_by_key(|todo| title_sort_key(&todo.title));
    undone.extend(done);
    undone
}

/// Case-insensitive ordering key for titles.
fn title_sort_key(title: &str) -> String {
    title.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{sort_todo_lists, sort_todos};
    use crate::model::todo::{Todo, TodoList};

    #[test]
    fn partitions_keep_undone_before_done() {
        let undone = vec![TodoList::new(1, "zulu")];
        let done = vec![TodoList::new(2, "alpha")];

        let ordered = sort_todo_lists(undone, done);
        assert_eq!(ordered[0].title, "zulu");
        assert_eq!(ordered[1].title, "alpha");
    }

    #[test]
    fn title_order_ignores_case() {
        let undone = vec![
            TodoList::new(1, "bravo"),
            TodoList::new(2, "Alpha"),
            TodoList::new(3, "CHARLIE"),
        ];

        let titles: Vec<String> = sort_todo_lists(undone, Vec::new())
            .into_iter()
            .map(|list| list.title)
            .collect();
        assert_eq!(titles, vec!["Alpha", "bravo", "CHARLIE"]);
    }

    #[test]
    fn equal_titles_keep_input_order() {
        let undone = vec![Todo::new(1, "same"), Todo::new(2, "Same")];

        let ordered = sort_todos(undone, Vec::new());
        assert_eq!(ordered[0].id, 1);
        assert_eq!(ordered[1].id, 2);
    }
}
