//! HTTP layer for the todo service.
//!
//! # Overview
//! Builds the axum `Router`: REST endpoints under `/api/todos`, a health
//! check, and the embedded static frontend at `/`. Domain rules (validation,
//! id assignment, ordering) live in `todo-core`; this crate only translates
//! between HTTP and the store.
//!
//! # Design
//! The store is injected into `app` rather than constructed here, so tests
//! and `main` each own their instance. Handlers take the lock once per
//! request: reads on `GET`, writes on `POST`/`DELETE`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::Html,
    routing::{delete, get},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use todo_core::{CreateTodo, Todo, TodoStore};

pub mod error;

pub use error::ApiError;

/// The store as shared by handlers.
pub type SharedStore = Arc<RwLock<TodoStore>>;

/// Build a shared store wrapping a fresh, empty `TodoStore`.
pub fn shared_store() -> SharedStore {
    Arc::new(RwLock::new(TodoStore::new()))
}

/// Build the application router around an injected store.
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", delete(delete_todo))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .with_state(store)
}

/// Serve the router on the given listener until the process exits.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// Health check response body.
#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    timestamp: DateTime<Utc>,
}

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn list_todos(State(store): State<SharedStore>) -> Json<Vec<Todo>> {
    let store = store.read().await;
    Json(store.list().to_vec())
}

async fn create_todo(
    State(store): State<SharedStore>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = store.write().await.create(&input.task)?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    store.write().await.delete(id)?;
    tracing::info!(id, "deleted todo");
    Ok(StatusCode::NO_CONTENT)
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "OK",
        timestamp: Utc::now(),
    })
}
