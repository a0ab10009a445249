//! Scripted store for handler tests.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use todo_list_core::{NewTodoItem, Result, TodoError, TodoItem, TodoStore};

/// A call received by [`MockTodoStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// `insert(user_id, text)`
    Insert {
        /// Owning user of the inserted item
        user_id: String,
        /// Text of the inserted item
        text: String,
    },
    /// `find_by_user(user_id)`
    FindByUser(String),
    /// `find_one(user_id, text)`
    FindOne {
        /// Requested user
        user_id: String,
        /// Requested text
        text: String,
    },
    /// `remove(item)`
    Remove(TodoItem),
    /// `user_exists(user_id)`
    UserExists(String),
}

#[derive(Debug, Default)]
struct Script {
    user_exists: bool,
    items: Vec<TodoItem>,
    lookup: Option<TodoItem>,
    insert_result: Option<TodoItem>,
    failure: Option<TodoError>,
    calls: Vec<StoreCall>,
}

/// Mock item store.
///
/// Answers every query from a script set up by the test and records every
/// call so tests can assert on what the handler asked for. Clones share the
/// same script and call log.
///
/// Defaults: no user exists, no items, lookups find nothing, and `insert`
/// echoes the inserted item with id 1.
#[derive(Debug, Clone, Default)]
pub struct MockTodoStore {
    script: Arc<Mutex<Script>>,
}

impl MockTodoStore {
    /// Create a mock with default answers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer for `user_exists`, for every user.
    #[must_use]
    pub fn with_user_exists(self, exists: bool) -> Self {
        self.lock().user_exists = exists;
        self
    }

    /// Answer for `find_by_user`, for every user.
    #[must_use]
    pub fn with_items(self, items: Vec<TodoItem>) -> Self {
        self.lock().items = items;
        self
    }

    /// Answer for `find_one`, for every user and text.
    #[must_use]
    pub fn with_lookup(self, item: Option<TodoItem>) -> Self {
        self.lock().lookup = item;
        self
    }

    /// Answer for `insert`.
    #[must_use]
    pub fn with_insert_result(self, item: TodoItem) -> Self {
        self.lock().insert_result = Some(item);
        self
    }

    /// Make every call fail with `error`.
    #[must_use]
    pub fn failing_with(self, error: TodoError) -> Self {
        self.lock().failure = Some(error);
        self
    }

    /// Every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Whether any received call satisfies `predicate`.
    #[must_use]
    pub fn was_called(&self, predicate: impl Fn(&StoreCall) -> bool) -> bool {
        self.lock().calls.iter().any(predicate)
    }

    #[allow(clippy::unwrap_used)] // a poisoned script means a test already panicked
    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap()
    }

    fn answer<T>(&self, call: StoreCall, respond: impl FnOnce(&Script) -> T) -> Result<T> {
        let mut script = self.lock();
        script.calls.push(call);
        match &script.failure {
            Some(error) => Err(error.clone()),
            None => Ok(respond(&*script)),
        }
    }
}

impl TodoStore for MockTodoStore {
    fn insert(&self, item: NewTodoItem) -> impl Future<Output = Result<TodoItem>> + Send {
        let call = StoreCall::Insert {
            user_id: item.user_id().to_string(),
            text: item.text().to_string(),
        };
        let result = self.answer(call, |script| {
            script
                .insert_result
                .clone()
                .unwrap_or_else(|| item.into_item(todo_list_core::TodoId::new(1)))
        });

        async move { result }
    }

    fn find_by_user(&self, user_id: &str) -> impl Future<Output = Result<Vec<TodoItem>>> + Send {
        let result = self.answer(StoreCall::FindByUser(user_id.to_string()), |script| {
            script.items.clone()
        });

        async move { result }
    }

    fn find_one(
        &self,
        user_id: &str,
        text: &str,
    ) -> impl Future<Output = Result<Option<TodoItem>>> + Send {
        let call = StoreCall::FindOne {
            user_id: user_id.to_string(),
            text: text.to_string(),
        };
        let result = self.answer(call, |script| script.lookup.clone());

        async move { result }
    }

    fn remove(&self, item: &TodoItem) -> impl Future<Output = Result<()>> + Send {
        let result = self.answer(StoreCall::Remove(item.clone()), |_| ());

        async move { result }
    }

    fn user_exists(&self, user_id: &str) -> impl Future<Output = Result<bool>> + Send {
        let result = self.answer(StoreCall::UserExists(user_id.to_string()), |script| {
            script.user_exists
        });

        async move { result }
    }
}
