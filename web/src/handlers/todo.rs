//! Todo list handlers.
//!
//! Thin adapters between HTTP and [`TodoHandler`](todo_list_core::TodoHandler):
//! they pull parameters out of the query string or body, call the handler,
//! and let [`AppError`] turn failures into responses.

use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use todo_list_core::{TodoItem, TodoParameters, TodoStore};

/// Query string of `GET /api/todo`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// User whose items to list
    pub user: Option<String>,
}

/// Query string of `DELETE /api/todo`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteQuery {
    /// Owner of the item
    pub user: Option<String>,
    /// Exact text of the item
    pub text: Option<String>,
}

/// List a user's todo items.
///
/// # Endpoint
///
/// ```text
/// GET /api/todo?user=alice
/// ```
///
/// # Response
///
/// ```json
/// [
///   { "id": 1, "userId": "alice", "text": "buy milk" }
/// ]
/// ```
///
/// `400` with a plain-text message if the user is missing or has no items.
pub async fn get_todo_list<S: TodoStore + 'static>(
    State(state): State<AppState<S>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    let items = state.handler().list(query.user.as_deref()).await?;
    Ok(Json(items))
}

/// Add a todo item.
///
/// A missing, `null` or unparseable body counts as absent.
///
/// # Endpoint
///
/// ```text
/// POST /api/todo
/// Content-Type: application/json
///
/// { "userId": "alice", "text": "buy milk" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "userId": "alice", "text": "buy milk" }
/// ```
pub async fn add_todo_item<S: TodoStore + 'static>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<Json<TodoItem>, AppError> {
    let item = state.handler().add(parse_parameters(&body)).await?;
    Ok(Json(item))
}

/// Delete a todo item by owner and exact text.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/todo?user=alice&text=buy%20milk
/// ```
///
/// `204 No Content` on success.
pub async fn delete_todo_item<S: TodoStore + 'static>(
    State(state): State<AppState<S>>,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, AppError> {
    state
        .handler()
        .delete(query.user.as_deref(), query.text.as_deref())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_parameters(body: &[u8]) -> Option<TodoParameters> {
    match serde_json::from_slice::<Option<TodoParameters>>(body) {
        Ok(params) => params,
        Err(error) => {
            if !body.is_empty() {
                tracing::debug!(%error, "Unreadable add request body");
            }
            None
        }
    }
}
