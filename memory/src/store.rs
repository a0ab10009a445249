//! `Vec`-backed implementation of [`TodoStore`].

use std::future::Future;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use todo_list_core::{NewTodoItem, Result, TodoError, TodoId, TodoItem, TodoStore};

/// What [`TodoStore::insert`] reports back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertEcho {
    /// The first stored item of the inserting user, which is the inserted
    /// item only when the user had no items before.
    #[default]
    FirstForUser,
    /// The item that was just inserted.
    Inserted,
}

#[derive(Debug)]
struct Inner {
    items: Vec<TodoItem>,
    next_id: u64,
}

/// In-memory todo item store.
///
/// Items are kept in insertion order behind a single `RwLock`. Clones share
/// the same collection, so a clone can be handed to every request.
#[derive(Debug, Clone)]
pub struct InMemoryTodoStore {
    inner: Arc<RwLock<Inner>>,
    echo: InsertEcho,
}

impl InMemoryTodoStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                items: Vec::new(),
                next_id: 1,
            })),
            echo: InsertEcho::default(),
        }
    }

    /// Set what `insert` returns.
    #[must_use]
    pub fn with_insert_echo(mut self, echo: InsertEcho) -> Self {
        self.echo = echo;
        self
    }

    /// Current insert echo setting.
    #[must_use]
    pub const fn insert_echo(&self) -> InsertEcho {
        self.echo
    }

    /// Number of stored items.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(read(&self.inner)?.items.len())
    }

    /// Whether the store holds no items.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`] if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(read(&self.inner)?.items.is_empty())
    }

    /// Copy of every stored item in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Storage`] if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Vec<TodoItem>> {
        Ok(read(&self.inner)?.items.clone())
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

fn read(inner: &RwLock<Inner>) -> Result<RwLockReadGuard<'_, Inner>> {
    inner
        .read()
        .map_err(|_| TodoError::Storage("todo store lock poisoned".to_string()))
}

fn write(inner: &RwLock<Inner>) -> Result<RwLockWriteGuard<'_, Inner>> {
    inner
        .write()
        .map_err(|_| TodoError::Storage("todo store lock poisoned".to_string()))
}

#[allow(clippy::cast_precision_loss)]
fn record_size(len: usize) {
    metrics::gauge!("todo_items_stored").set(len as f64);
}

impl TodoStore for InMemoryTodoStore {
    fn insert(&self, item: NewTodoItem) -> impl Future<Output = Result<TodoItem>> + Send {
        let inner = Arc::clone(&self.inner);
        let echo = self.echo;

        async move {
            let mut guard = write(&inner)?;

            let id = TodoId::new(guard.next_id);
            guard.next_id += 1;

            let inserted = item.into_item(id);
            guard.items.push(inserted.clone());
            record_size(guard.items.len());
            tracing::trace!(%id, user_id = %inserted.user_id, "Inserted todo item");

            let reported = match echo {
                InsertEcho::Inserted => inserted,
                InsertEcho::FirstForUser => guard
                    .items
                    .iter()
                    .find(|stored| stored.belongs_to(&inserted.user_id))
                    .cloned()
                    .unwrap_or(inserted),
            };

            Ok(reported)
        }
    }

    fn find_by_user(&self, user_id: &str) -> impl Future<Output = Result<Vec<TodoItem>>> + Send {
        let inner = Arc::clone(&self.inner);
        let user_id = user_id.to_string();

        async move {
            Ok(read(&inner)?
                .items
                .iter()
                .filter(|item| item.belongs_to(&user_id))
                .cloned()
                .collect())
        }
    }

    fn find_one(
        &self,
        user_id: &str,
        text: &str,
    ) -> impl Future<Output = Result<Option<TodoItem>>> + Send {
        let inner = Arc::clone(&self.inner);
        let user_id = user_id.to_string();
        let text = text.to_string();

        async move {
            Ok(read(&inner)?
                .items
                .iter()
                .find(|item| item.matches(&user_id, &text))
                .cloned())
        }
    }

    fn remove(&self, item: &TodoItem) -> impl Future<Output = Result<()>> + Send {
        let inner = Arc::clone(&self.inner);
        let id = item.id;

        async move {
            let mut guard = write(&inner)?;

            let Some(position) = guard.items.iter().position(|stored| stored.id == id) else {
                return Err(TodoError::Storage(format!(
                    "todo item {id} is no longer stored"
                )));
            };

            guard.items.remove(position);
            record_size(guard.items.len());
            tracing::trace!(%id, "Removed todo item");
            Ok(())
        }
    }

    fn user_exists(&self, user_id: &str) -> impl Future<Output = Result<bool>> + Send {
        let inner = Arc::clone(&self.inner);
        let user_id = user_id.to_string();

        async move {
            Ok(read(&inner)?
                .items
                .iter()
                .any(|item| item.belongs_to(&user_id)))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn new_item(user: &str, text: &str) -> NewTodoItem {
        NewTodoItem::new(user, text).expect("valid item")
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = InMemoryTodoStore::new().with_insert_echo(InsertEcho::Inserted);

        let first = store.insert(new_item("alice", "one")).await.unwrap();
        let second = store.insert(new_item("bob", "two")).await.unwrap();

        assert_eq!(first.id, TodoId::new(1));
        assert_eq!(second.id, TodoId::new(2));
        assert_eq!(store.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn insert_reports_first_item_of_user_by_default() {
        let store = InMemoryTodoStore::new();

        store.insert(new_item("alice", "first")).await.unwrap();
        let reported = store.insert(new_item("alice", "second")).await.unwrap();

        assert_eq!(reported.text, "first");
        assert_eq!(reported.id, TodoId::new(1));
        assert_eq!(store.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn insert_can_report_inserted_item() {
        let store = InMemoryTodoStore::new().with_insert_echo(InsertEcho::Inserted);

        store.insert(new_item("alice", "first")).await.unwrap();
        let reported = store.insert(new_item("alice", "second")).await.unwrap();

        assert_eq!(reported.text, "second");
        assert_eq!(reported.id, TodoId::new(2));
    }

    #[tokio::test]
    async fn find_by_user_filters_and_keeps_order() {
        let store = InMemoryTodoStore::new();
        store.insert(new_item("alice", "a1")).await.unwrap();
        store.insert(new_item("bob", "b1")).await.unwrap();
        store.insert(new_item("alice", "a2")).await.unwrap();

        let texts: Vec<String> = store
            .find_by_user("alice")
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.text)
            .collect();

        assert_eq!(texts, vec!["a1", "a2"]);
        assert!(store.find_by_user("carol").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_one_requires_both_fields() {
        let store = InMemoryTodoStore::new();
        store.insert(new_item("alice", "buy milk")).await.unwrap();

        assert!(store.find_one("alice", "buy milk").await.unwrap().is_some());
        assert!(store.find_one("alice", "Buy milk").await.unwrap().is_none());
        assert!(store.find_one("bob", "buy milk").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_one_returns_earliest_duplicate() {
        let store = InMemoryTodoStore::new();
        store.insert(new_item("alice", "same")).await.unwrap();
        store.insert(new_item("alice", "same")).await.unwrap();

        let found = store.find_one("alice", "same").await.unwrap().unwrap();
        assert_eq!(found.id, TodoId::new(1));
    }

    #[tokio::test]
    async fn remove_deletes_by_id() {
        let store = InMemoryTodoStore::new();
        store.insert(new_item("alice", "same")).await.unwrap();
        store.insert(new_item("alice", "same")).await.unwrap();

        let first = store.find_one("alice", "same").await.unwrap().unwrap();
        store.remove(&first).await.unwrap();

        let remaining = store.snapshot().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, TodoId::new(2));
    }

    #[tokio::test]
    async fn remove_of_missing_item_is_a_storage_error() {
        let store = InMemoryTodoStore::new();
        store.insert(new_item("alice", "x")).await.unwrap();
        let item = store.find_one("alice", "x").await.unwrap().unwrap();

        store.remove(&item).await.unwrap();
        let err = store.remove(&item).await.unwrap_err();

        assert!(matches!(err, TodoError::Storage(_)));
    }

    #[tokio::test]
    async fn user_exists_tracks_contents() {
        let store = InMemoryTodoStore::new();
        assert!(!store.user_exists("alice").await.unwrap());
        assert!(!store.user_exists("").await.unwrap());

        store.insert(new_item("alice", "x")).await.unwrap();
        assert!(store.user_exists("alice").await.unwrap());

        let item = store.find_one("alice", "x").await.unwrap().unwrap();
        store.remove(&item).await.unwrap();
        assert!(!store.user_exists("alice").await.unwrap());
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn clones_share_contents() {
        let store = InMemoryTodoStore::new();
        let clone = store.clone();

        clone.insert(new_item("alice", "x")).await.unwrap();

        assert!(store.user_exists("alice").await.unwrap());
    }

    fn stored_gauge(rendered: &str) -> Option<f64> {
        rendered
            .lines()
            .find(|line| line.starts_with("todo_items_stored "))
            .and_then(|line| line.rsplit(' ').next())
            .and_then(|value| value.parse().ok())
    }

    #[test]
    fn stored_gauge_follows_inserts_and_removes() {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let store = InMemoryTodoStore::new();

        metrics::with_local_recorder(&recorder, || {
            tokio_test::block_on(store.insert(new_item("alice", "one"))).unwrap();
            tokio_test::block_on(store.insert(new_item("bob", "two"))).unwrap();
        });
        assert_eq!(stored_gauge(&handle.render()), Some(2.0));

        metrics::with_local_recorder(&recorder, || {
            let item = tokio_test::block_on(store.find_one("alice", "one"))
                .unwrap()
                .unwrap();
            tokio_test::block_on(store.remove(&item)).unwrap();
        });
        assert_eq!(stored_gauge(&handle.render()), Some(1.0));
    }
}
