use todolist_core::{Todo, TodoList};

#[test]
fn todo_new_sets_defaults() {
    let todo = Todo::new(7, "water plants");

    assert_eq!(todo.id, 7);
    assert_eq!(todo.title, "water plants");
    assert!(!todo.done);
}

#[test]
fn toggle_flips_and_reports_new_state() {
    let mut todo = Todo::new(1, "stretch");

    assert!(todo.toggle());
    assert!(todo.done);

    assert!(!todo.toggle());
    assert!(!todo.done);
}

#[test]
fn empty_list_is_not_done_and_has_no_undone() {
    let list = TodoList::new(1, "someday");

    assert!(!list.is_done());
    assert!(!list.has_undone());
}

#[test]
fn list_is_done_only_when_every_todo_is_done() {
    let mut list = TodoList::new(1, "today");
    list.todos.push(Todo::new(2, "open item"));
    list.todos.push(Todo::new(3, "closed item"));
    list.todos[1].done = true;

    assert!(!list.is_done());
    assert!(list.has_undone());

    list.todos[0].done = true;
    assert!(list.is_done());
    assert!(!list.has_undone());
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut list = TodoList::new(4, "Errands");
    let mut todo = Todo::new(9, "Post office");
    todo.done = true;
    list.todos.push(todo);

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["id"], 4);
    assert_eq!(json["title"], "Errands");
    assert_eq!(json["todos"][0]["id"], 9);
    assert_eq!(json["todos"][0]["title"], "Post office");
    assert_eq!(json["todos"][0]["done"], true);

    let decoded: TodoList = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, list);
}
