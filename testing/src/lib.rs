//! # Todo List Testing
//!
//! Testing utilities and helpers for the todo list service.
//!
//! This crate provides:
//! - [`MockTodoStore`]: a store with scripted answers that records every call
//! - Fixtures for building items and seeded in-memory stores
//! - A tracing initialiser that writes through the test harness
//!
//! ## Example
//!
//! ```ignore
//! use todo_list_core::{TodoError, TodoHandler};
//! use todo_list_testing::MockTodoStore;
//!
//! #[tokio::test]
//! async fn unknown_user_is_rejected() {
//!     let store = MockTodoStore::new().with_user_exists(false);
//!     let handler = TodoHandler::new(store.clone());
//!
//!     let err = handler.list(Some("alice")).await.unwrap_err();
//!     assert_eq!(err, TodoError::UserNotFound);
//!     assert!(!store.was_called(|c| matches!(c, StoreCall::FindByUser(_))));
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod mocks;

/// Fixtures for building items and stores.
pub mod fixtures {
    use todo_list_core::{NewTodoItem, TodoError, TodoId, TodoItem, TodoStore};
    use todo_list_memory::InMemoryTodoStore;

    /// Build a stored item.
    #[must_use]
    pub fn item(id: u64, user_id: &str, text: &str) -> TodoItem {
        TodoItem::new(TodoId::new(id), user_id, text)
    }

    /// Create an in-memory store holding `(user_id, text)` pairs in order.
    ///
    /// Identifiers are assigned from 1 in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::MissingUserOrText`] if a pair has an empty field,
    /// or a storage error from the store.
    pub async fn seeded_store(entries: &[(&str, &str)]) -> Result<InMemoryTodoStore, TodoError> {
        let store = InMemoryTodoStore::new();
        for (user_id, text) in entries {
            store.insert(NewTodoItem::new(*user_id, *text)?).await?;
        }
        Ok(store)
    }
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_list_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use fixtures::{item, seeded_store};
pub use mocks::{MockTodoStore, StoreCall};
