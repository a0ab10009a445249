//! Error types for todo list operations.

use thiserror::Error;

/// Result type alias for todo list operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Everything that can go wrong while serving a todo list request.
///
/// The taxonomy is flat: no variant wraps another error. The `Display` text of
/// the validation and not-found variants is the exact message returned to
/// clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    // ═══════════════════════════════════════════════════════════
    // Validation Errors
    // ═══════════════════════════════════════════════════════════

    /// List request without a user.
    #[error("User string cannot be empty or null.")]
    MissingUser,

    /// Add request without a body.
    #[error("body parameters cannot be null.")]
    MissingBody,

    /// Add request with an empty or missing user id or text.
    #[error("User or text string cannot be empty or null.")]
    MissingUserOrText,

    // ═══════════════════════════════════════════════════════════
    // Not Found Errors
    // ═══════════════════════════════════════════════════════════

    /// No item is stored for the requested user.
    #[error("User not found, no todo list to delete.")]
    UserNotFound,

    /// No item matches the requested user and text.
    #[error("TODO item not found or does not belong to the user.")]
    ItemNotFound,

    // ═══════════════════════════════════════════════════════════
    // System Errors
    // ═══════════════════════════════════════════════════════════

    /// The storage engine failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Broad category of a [`TodoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing input
    Validation,
    /// Referenced user or item is absent
    NotFound,
    /// Unexpected storage failure
    Internal,
}

impl ErrorKind {
    /// Label used for metrics and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Internal => "internal",
        }
    }
}

impl TodoError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingUser | Self::MissingBody | Self::MissingUserOrText => {
                ErrorKind::Validation
            }
            Self::UserNotFound | Self::ItemNotFound => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Internal,
        }
    }

    /// Returns `true` if the request itself was at fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_list_core::TodoError;
    ///
    /// assert!(TodoError::MissingUser.is_client_error());
    /// assert!(TodoError::ItemNotFound.is_client_error());
    /// assert!(!TodoError::Storage("lock poisoned".into()).is_client_error());
    /// ```
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Internal)
    }
}
