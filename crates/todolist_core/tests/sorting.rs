use todolist_core::{Todo, TodoList, TodoStore};

#[test]
fn undone_lists_sort_before_done_lists_by_title() {
    let store = TodoStore::from_lists(vec![
        list_with_open_todo(1, "Bravo", 4),
        list_with_open_todo(2, "Alpha", 5),
        list_with_done_todo(3, "Zulu", 6),
    ]);

    let titles: Vec<String> = store
        .sorted_todo_lists()
        .into_iter()
        .map(|list| list.title)
        .collect();
    assert_eq!(titles, vec!["Alpha", "Bravo", "Zulu"]);
}

#[test]
fn empty_list_sorts_with_the_undone_partition() {
    let store = TodoStore::from_lists(vec![
        list_with_done_todo(1, "Archive", 3),
        TodoList::new(2, "Someday"),
    ]);

    let sorted = store.sorted_todo_lists();
    assert_eq!(sorted[0].title, "Someday");
    assert_eq!(sorted[1].title, "Archive");
}

#[test]
fn list_order_ignores_title_case() {
    let store = TodoStore::from_lists(vec![
        list_with_open_todo(1, "beta", 4),
        list_with_open_todo(2, "ALPHA", 5),
        list_with_open_todo(3, "Gamma", 6),
    ]);

    let titles: Vec<String> = store
        .sorted_todo_lists()
        .into_iter()
        .map(|list| list.title)
        .collect();
    assert_eq!(titles, vec!["ALPHA", "beta", "Gamma"]);
}

#[test]
fn sorted_todos_partition_within_one_list() {
    let mut list = TodoList::new(1, "Mixed");
    let mut banana = Todo::new(2, "banana");
    banana.done = true;
    list.todos.push(banana);
    list.todos.push(Todo::new(3, "Cherry"));
    list.todos.push(Todo::new(4, "apple"));

    let store = TodoStore::from_lists(vec![list.clone()]);
    let titles: Vec<String> = store
        .sorted_todos(&list)
        .into_iter()
        .map(|todo| todo.title)
        .collect();
    assert_eq!(titles, vec!["apple", "Cherry", "banana"]);
}

#[test]
fn sorted_projections_are_isolated_copies() {
    let store = TodoStore::from_lists(vec![list_with_open_todo(1, "Inbox", 2)]);

    let mut sorted = store.sorted_todo_lists();
    sorted[0].todos.clear();

    assert_eq!(store.load_todo_list(1).unwrap().todos.len(), 1);
}

fn list_with_open_todo(list_id: u64, title: &str, todo_id: u64) -> TodoList {
    let mut list = TodoList::new(list_id, title);
    list.todos.push(Todo::new(todo_id, "item"));
    list
}

fn list_with_done_todo(list_id: u64, title: &str, todo_id: u64) -> TodoList {
    let mut list = list_with_open_todo(list_id, title, todo_id);
    list.mark_all_done();
    list
}
