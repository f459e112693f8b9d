//! Error types for the todo store.
//!
//! # Design
//! Exactly two user-facing failures exist in this system: a create with an
//! empty task and a delete of an unknown id. Each gets its own variant so
//! the HTTP layer can map them to 400 and 404 without inspecting strings.

use thiserror::Error;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The task was empty or whitespace-only after trimming.
    #[error("Task is required")]
    EmptyTask,

    /// No todo with the given id exists.
    #[error("Todo not found")]
    NotFound(u64),
}
