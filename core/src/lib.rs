//! Domain layer for the todo service.
//!
//! # Overview
//! Holds the `Todo` record, the request DTOs, and `TodoStore` — the
//! in-process collection the HTTP layer mutates. Everything here is
//! synchronous and free of I/O: validation, id assignment, and ordering
//! rules live in this crate so they can be tested without a runtime.
//!
//! # Design
//! - `TodoStore` owns its records and a monotonic id counter; callers share
//!   it behind whatever synchronization their runtime needs.
//! - DTOs are defined independently from the server crate; the server's
//!   integration tests catch schema drift.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{CreateTodo, Todo};
