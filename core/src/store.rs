//! Item store trait.
//!
//! The store is the only shared mutable resource of the service. It holds
//! [`TodoItem`] records and answers the queries the request handler needs.
//!
//! # Implementations
//!
//! - `InMemoryTodoStore` (in `todo-list-memory` crate): the storage engine used by the server
//! - `MockTodoStore` (in `todo-list-testing` crate): scripted answers and call recording
//!
//! # Consistency
//!
//! Implementations must make [`TodoStore::insert`] and [`TodoStore::remove`]
//! individually atomic. Nothing is transactional across calls: a caller that
//! checks with [`TodoStore::find_one`] and then calls [`TodoStore::remove`]
//! can lose a race against a concurrent remove of the same item.

use crate::error::Result;
use crate::item::{NewTodoItem, TodoItem};
use std::future::Future;

/// Persistent collection of todo items.
pub trait TodoStore: Send + Sync {
    /// Persist a new item and assign its identifier.
    ///
    /// Returns the first stored item belonging to the inserted item's user,
    /// which is not necessarily the item just inserted when that user already
    /// has items. Engines may be configured to return the inserted record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the engine fails.
    fn insert(&self, item: NewTodoItem) -> impl Future<Output = Result<TodoItem>> + Send;

    /// All items owned by `user_id`, empty if there are none.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the engine fails.
    fn find_by_user(&self, user_id: &str) -> impl Future<Output = Result<Vec<TodoItem>>> + Send;

    /// First item owned by `user_id` whose text equals `text` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the engine fails.
    fn find_one(
        &self,
        user_id: &str,
        text: &str,
    ) -> impl Future<Output = Result<Option<TodoItem>>> + Send;

    /// Delete `item` by identifier.
    ///
    /// The caller is expected to have looked the item up first.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the engine
    /// fails or the item is no longer stored.
    fn remove(&self, item: &TodoItem) -> impl Future<Output = Result<()>> + Send;

    /// Whether at least one item owned by `user_id` is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`](crate::TodoError::Storage) if the engine fails.
    fn user_exists(&self, user_id: &str) -> impl Future<Output = Result<bool>> + Send;
}
