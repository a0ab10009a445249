//! HTTP request handlers.
//!
//! This module contains all HTTP handlers organized by domain.

pub mod health;
pub mod todo;

// Re-export common handler utilities
pub use health::health_check;
pub use todo::{add_todo_item, delete_todo_item, get_todo_list};
