//! Axum HTTP surface for the todo list service.
//!
//! This crate exposes [`TodoHandler`](todo_list_core::TodoHandler) over HTTP
//! and contains the `todo-server` binary.
//!
//! # Routes
//!
//! ```text
//! GET    /api/todo?user={userId}            → 200 [TodoItem] | 400 text
//! POST   /api/todo  {"userId","text"}       → 200 TodoItem   | 400 text
//! DELETE /api/todo?user={userId}&text={t}   → 204            | 400 text
//! GET    /health                            → 200 {"status","version"}
//! GET    /metrics                           → 200 Prometheus | 404
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** passes the request-id, tracing and CORS layers
//! 2. **Extract** query string or body
//! 3. **Call** the request handler
//! 4. **Map result** to JSON, `204`, or an [`AppError`] response
//!
//! # Example
//!
//! ```ignore
//! use todo_list_memory::InMemoryTodoStore;
//! use todo_list_web::{AppState, build_router};
//!
//! let app = build_router(AppState::from_store(InMemoryTodoStore::new()));
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use config::Config;
pub use error::AppError;
pub use middleware::{REQUEST_ID_HEADER, with_http_layers};
pub use router::build_router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
