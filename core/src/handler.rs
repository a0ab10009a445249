//! Request handler for list, add and delete operations.
//!
//! Each operation is a single validate → check → act sequence against the
//! injected [`TodoStore`]. The handler keeps no state between calls.
//!
//! # Races
//!
//! The existence checks are not atomic with the action that follows them.
//! A concurrent delete between `user_exists` and `find_by_user` makes list
//! return an empty vector; a concurrent delete between `find_one` and
//! `remove` makes the second remove fail with a storage error.

use crate::error::{Result, TodoError};
use crate::item::{NewTodoItem, TodoItem, TodoParameters};
use crate::store::TodoStore;

/// Operation labels used in logs and metrics.
mod operation {
    pub const LIST: &str = "list";
    pub const ADD: &str = "add";
    pub const DELETE: &str = "delete";
}

/// Validates todo list requests and runs them against a store.
///
/// # Example
///
/// ```ignore
/// use todo_list_core::{TodoHandler, TodoParameters};
/// use todo_list_memory::InMemoryTodoStore;
///
/// let handler = TodoHandler::new(InMemoryTodoStore::new());
///
/// handler.add(Some(TodoParameters::new("alice", "buy milk"))).await?;
/// let items = handler.list(Some("alice")).await?;
/// assert_eq!(items.len(), 1);
///
/// handler.delete(Some("alice"), Some("buy milk")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct TodoHandler<S> {
    store: S,
}

impl<S: TodoStore> TodoHandler<S> {
    /// Creates a handler backed by `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The store this handler runs against.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Lists every item owned by `user`.
    ///
    /// # Errors
    ///
    /// - [`TodoError::MissingUser`] if `user` is absent or empty
    /// - [`TodoError::UserNotFound`] if the user has no items
    /// - [`TodoError::Storage`] if the store fails
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, user: Option<&str>) -> Result<Vec<TodoItem>> {
        finish(operation::LIST, self.run_list(user).await)
    }

    /// Adds an item built from `params`.
    ///
    /// The returned item is whatever the store reports for the insert.
    ///
    /// # Errors
    ///
    /// - [`TodoError::MissingBody`] if `params` is absent
    /// - [`TodoError::MissingUserOrText`] if the user id or text is absent or empty
    /// - [`TodoError::Storage`] if the store fails
    #[tracing::instrument(skip(self))]
    pub async fn add(&self, params: Option<TodoParameters>) -> Result<TodoItem> {
        finish(operation::ADD, self.run_add(params).await)
    }

    /// Deletes the item owned by `user` whose text is exactly `text`.
    ///
    /// An absent `user` or `text` is treated as the empty string, which
    /// never matches a stored item.
    ///
    /// # Errors
    ///
    /// - [`TodoError::UserNotFound`] if the user has no items
    /// - [`TodoError::ItemNotFound`] if no item of the user has that text
    /// - [`TodoError::Storage`] if the store fails
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, user: Option<&str>, text: Option<&str>) -> Result<()> {
        finish(operation::DELETE, self.run_delete(user, text).await)
    }

    async fn run_list(&self, user: Option<&str>) -> Result<Vec<TodoItem>> {
        let user = user.filter(|u| !u.is_empty()).ok_or(TodoError::MissingUser)?;

        if !self.store.user_exists(user).await? {
            return Err(TodoError::UserNotFound);
        }

        self.store.find_by_user(user).await
    }

    async fn run_add(&self, params: Option<TodoParameters>) -> Result<TodoItem> {
        let params = params.ok_or(TodoError::MissingBody)?;
        let item = NewTodoItem::try_from(params)?;

        let stored = self.store.insert(item).await?;
        tracing::debug!(id = %stored.id, user_id = %stored.user_id, "Todo item added");
        Ok(stored)
    }

    async fn run_delete(&self, user: Option<&str>, text: Option<&str>) -> Result<()> {
        let user = user.unwrap_or_default();
        let text = text.unwrap_or_default();

        if !self.store.user_exists(user).await? {
            return Err(TodoError::UserNotFound);
        }

        let item = self
            .store
            .find_one(user, text)
            .await?
            .ok_or(TodoError::ItemNotFound)?;

        self.store.remove(&item).await?;
        tracing::debug!(id = %item.id, user_id = %item.user_id, "Todo item deleted");
        Ok(())
    }
}

/// Logs and counts the outcome of one request.
fn finish<T>(operation: &'static str, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => record(operation, "ok"),
        Err(error) => {
            if error.is_client_error() {
                tracing::warn!(operation, error = %error, "Request rejected");
            } else {
                tracing::error!(operation, error = %error, "Request failed");
            }
            record(operation, error.kind().as_str());
        }
    }
    result
}

fn record(operation: &'static str, outcome: &'static str) {
    metrics::counter!("todo_requests_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
}
