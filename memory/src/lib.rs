//! In-memory item store for the todo list service.
//!
//! This crate provides [`InMemoryTodoStore`], the storage engine behind the
//! server. It implements the `TodoStore` trait from `todo-list-core` and
//! supports:
//!
//! - Sequential identifiers starting at 1
//! - Insertion-ordered queries ("first" means earliest inserted)
//! - Atomic insert and remove (one write lock per operation)
//! - Cheap cloning: clones share the same underlying collection
//!
//! # Example
//!
//! ```ignore
//! use todo_list_core::{NewTodoItem, TodoStore};
//! use todo_list_memory::InMemoryTodoStore;
//!
//! let store = InMemoryTodoStore::new();
//! let item = store.insert(NewTodoItem::new("alice", "buy milk")?).await?;
//! assert!(store.user_exists("alice").await?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod store;

pub use store::{InMemoryTodoStore, InsertEcho};
