//! In-memory todo collection.
//!
//! # Design
//! A `Vec` keeps insertion order (the API contract returns todos in the
//! order they were created) and `next_id` is a monotonic counter, so ids
//! are never reused after a delete. The store holds no locks itself; the
//! server wraps it in `Arc<RwLock<_>>` and each handler mutates it under a
//! single lock acquisition.

use crate::error::StoreError;
use crate::types::Todo;

/// The in-process todo collection. Not persisted; discarded on restart.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// Append a new todo with the given task text.
    ///
    /// # Errors
    /// `StoreError::EmptyTask` when `task` is empty or whitespace-only
    /// after trimming. The stored task is the trimmed text.
    pub fn create(&mut self, task: &str) -> Result<Todo, StoreError> {
        let task = task.trim();
        if task.is_empty() {
            return Err(StoreError::EmptyTask);
        }
        self.next_id += 1;
        let todo = Todo {
            id: self.next_id,
            task: task.to_string(),
            completed: false,
        };
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Remove the todo with the given id.
    ///
    /// # Errors
    /// `StoreError::NotFound` when no todo has that id.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        match self.todos.iter().position(|t| t.id == id) {
            Some(index) => {
                self.todos.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = TodoStore::new();
        let first = store.create("Buy milk").unwrap();
        let second = store.create("Walk dog").unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn create_trims_task_text() {
        let mut store = TodoStore::new();
        let todo = store.create("  Buy milk  ").unwrap();
        assert_eq!(todo.task, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn create_rejects_empty_task() {
        let mut store = TodoStore::new();
        assert_eq!(store.create(""), Err(StoreError::EmptyTask));
        assert_eq!(store.create("   "), Err(StoreError::EmptyTask));
        assert!(store.list().is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = TodoStore::new();
        store.create("first").unwrap();
        store.create("second").unwrap();
        store.create("third").unwrap();
        let tasks: Vec<&str> = store.list().iter().map(|t| t.task.as_str()).collect();
        assert_eq!(tasks, ["first", "second", "third"]);
    }

    #[test]
    fn delete_removes_matching_todo() {
        let mut store = TodoStore::new();
        let keep = store.create("keep").unwrap();
        let gone = store.create("gone").unwrap();
        store.delete(gone.id).unwrap();
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].id, keep.id);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut store = TodoStore::new();
        assert_eq!(store.delete(42), Err(StoreError::NotFound(42)));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = TodoStore::new();
        store.create("a").unwrap();
        let b = store.create("b").unwrap();
        store.delete(b.id).unwrap();
        let c = store.create("c").unwrap();
        assert_eq!(c.id, 3);
        let ids: Vec<u64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn todo_serializes_to_expected_json() {
        let todo = Todo {
            id: 7,
            task: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["task"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn create_todo_defaults_missing_task_to_empty() {
        let input: crate::types::CreateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(input.task, "");
    }
}
