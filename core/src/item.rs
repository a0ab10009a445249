//! Todo item records and the inputs they are built from.
//!
//! A [`TodoItem`] is immutable once stored: the only way to change the
//! contents of a store is to insert a [`NewTodoItem`] or remove an item.

use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine-assigned identifier of a stored todo item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored todo item.
///
/// Serializes as `{"id": 1, "userId": "alice", "text": "buy milk"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Identifier assigned by the store on insert
    pub id: TodoId,
    /// Owning user
    pub user_id: String,
    /// Item content
    pub text: String,
}

impl TodoItem {
    /// Creates a stored item from its parts.
    #[must_use]
    pub fn new(id: TodoId, user_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            text: text.into(),
        }
    }

    /// Returns `true` if this item belongs to `user_id`.
    #[must_use]
    pub fn belongs_to(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Returns `true` if this item belongs to `user_id` and has exactly `text`.
    #[must_use]
    pub fn matches(&self, user_id: &str, text: &str) -> bool {
        self.belongs_to(user_id) && self.text == text
    }
}

/// An item that has not been stored yet (no identifier).
///
/// Both fields are guaranteed non-empty: the only constructors validate them,
/// so a store never receives an item without an owner or content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodoItem {
    user_id: String,
    text: String,
}

impl NewTodoItem {
    /// Builds a new item from a user id and text.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::MissingUserOrText`] if either string is empty.
    pub fn new(user_id: impl Into<String>, text: impl Into<String>) -> Result<Self, TodoError> {
        let user_id = user_id.into();
        let text = text.into();

        if user_id.is_empty() || text.is_empty() {
            return Err(TodoError::MissingUserOrText);
        }

        Ok(Self { user_id, text })
    }

    /// Owning user.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Item content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attaches the identifier assigned by a store.
    #[must_use]
    pub fn into_item(self, id: TodoId) -> TodoItem {
        TodoItem {
            id,
            user_id: self.user_id,
            text: self.text,
        }
    }
}

impl TryFrom<TodoParameters> for NewTodoItem {
    type Error = TodoError;

    fn try_from(params: TodoParameters) -> Result<Self, Self::Error> {
        match (params.user_id, params.text) {
            (Some(user_id), Some(text)) => Self::new(user_id, text),
            _ => Err(TodoError::MissingUserOrText),
        }
    }
}

/// Body of an add request.
///
/// Either field may be missing or `null`; validation happens in the handler.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoParameters {
    /// Owning user
    #[serde(default, alias = "UserId")]
    pub user_id: Option<String>,
    /// Item content
    #[serde(default, alias = "Text")]
    pub text: Option<String>,
}

impl TodoParameters {
    /// Creates parameters with both fields set.
    #[must_use]
    pub fn new(user_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            text: Some(text.into()),
        }
    }
}
