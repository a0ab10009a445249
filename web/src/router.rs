//! Router configuration for the todo server.

use crate::handlers::{add_todo_item, delete_todo_item, get_todo_list, health_check};
use crate::metrics::metrics_handler;
use crate::middleware::with_http_layers;
use crate::state::AppState;
use axum::{Router, routing::get};
use todo_list_core::TodoStore;

/// Build the complete Axum router.
///
/// # Routes
///
/// - `GET /api/todo?user=` - List a user's items
/// - `POST /api/todo` - Add an item
/// - `DELETE /api/todo?user=&text=` - Delete an item
/// - `GET /health` - Liveness
/// - `GET /metrics` - Prometheus metrics (404 when disabled)
///
/// # Example
///
/// ```ignore
/// let state = AppState::from_store(InMemoryTodoStore::new());
/// let app = build_router(state);
/// axum::serve(listener, app).await?;
/// ```
pub fn build_router<S: TodoStore + 'static>(state: AppState<S>) -> Router {
    let api_routes = Router::new().route(
        "/todo",
        get(get_todo_list::<S>)
            .post(add_todo_item::<S>)
            .delete(delete_todo_item::<S>),
    );

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler::<S>))
        .nest("/api", api_routes)
        .with_state(state);

    with_http_layers(router)
}
