//! # Todo List Core
//!
//! Domain types, the item store abstraction and the request handler for a
//! per-user todo list service.
//!
//! ## Components
//!
//! - **Item Store** ([`TodoStore`]): holds [`TodoItem`] records, queryable by
//!   user and by (user, text)
//! - **Request Handler** ([`TodoHandler`]): validates list/add/delete requests,
//!   enforces existence preconditions and returns typed results
//!
//! The HTTP surface lives in `todo-list-web`; the storage engine in
//! `todo-list-memory`.
//!
//! ## Example
//!
//! ```ignore
//! use todo_list_core::{TodoError, TodoHandler, TodoParameters};
//!
//! let handler = TodoHandler::new(store);
//!
//! let item = handler.add(Some(TodoParameters::new("alice", "buy milk"))).await?;
//! assert_eq!(item.user_id, "alice");
//!
//! let err = handler.list(Some("bob")).await.unwrap_err();
//! assert_eq!(err, TodoError::UserNotFound);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod handler;
pub mod item;
pub mod store;

pub use error::{ErrorKind, Result, TodoError};
pub use handler::TodoHandler;
pub use item::{NewTodoItem, TodoId, TodoItem, TodoParameters};
pub use store::TodoStore;
