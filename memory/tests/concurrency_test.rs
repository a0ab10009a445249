//! Concurrent access to the in-memory store.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use todo_list_core::{NewTodoItem, TodoStore};
use todo_list_memory::{InMemoryTodoStore, InsertEcho};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_inserts_get_unique_ids() {
    let store = InMemoryTodoStore::new().with_insert_echo(InsertEcho::Inserted);

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                let item = NewTodoItem::new(format!("user-{}", i % 4), format!("task {i}"))
                    .expect("valid item");
                store.insert(item).await.expect("insert")
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().id);
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 64);
    assert_eq!(store.len().unwrap(), 64);
    assert_eq!(store.find_by_user("user-0").await.unwrap().len(), 16);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_removes_leave_exactly_one_winner() {
    let store = InMemoryTodoStore::new();
    store
        .insert(NewTodoItem::new("alice", "buy milk").unwrap())
        .await
        .unwrap();
    let item = store.find_one("alice", "buy milk").await.unwrap().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            let item = item.clone();
            tokio::spawn(async move { store.remove(&item).await })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert!(store.is_empty().unwrap());
}

#[test]
fn store_works_outside_a_runtime() {
    let store = InMemoryTodoStore::new();

    tokio_test::block_on(store.insert(NewTodoItem::new("alice", "x").unwrap())).unwrap();

    assert!(tokio_test::block_on(store.user_exists("alice")).unwrap());
}
