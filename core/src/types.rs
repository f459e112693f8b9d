//! Domain DTOs for the todo API.

use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub task: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
///
/// A missing `task` field deserializes as an empty string and is rejected
/// by store validation, so an absent task and an empty task produce the
/// same 400 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub task: String,
}
