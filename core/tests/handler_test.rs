//! Request handler behaviour against a scripted store.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use todo_list_core::{ErrorKind, TodoError, TodoHandler, TodoParameters};
use todo_list_testing::{MockTodoStore, StoreCall, item};

fn handler(store: &MockTodoStore) -> TodoHandler<MockTodoStore> {
    TodoHandler::new(store.clone())
}

// ========== List ==========

#[tokio::test]
async fn list_without_user_is_a_validation_error() {
    let store = MockTodoStore::new();

    let err = handler(&store).list(None).await.unwrap_err();

    assert_eq!(err, TodoError::MissingUser);
    assert_eq!(err.to_string(), "User string cannot be empty or null.");
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn list_with_empty_user_is_a_validation_error() {
    let store = MockTodoStore::new().with_user_exists(true);

    let err = handler(&store).list(Some("")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn list_for_unknown_user_is_not_found() {
    let store = MockTodoStore::new().with_user_exists(false);

    let err = handler(&store).list(Some("nonExistingUser")).await.unwrap_err();

    assert_eq!(err, TodoError::UserNotFound);
    assert_eq!(err.to_string(), "User not found, no todo list to delete.");
    assert!(!store.was_called(|c| matches!(c, StoreCall::FindByUser(_))));
}

#[tokio::test]
async fn list_for_existing_user_returns_store_items() {
    let items = vec![item(1, "existingUser", "Todo 1"), item(2, "existingUser", "Todo 2")];
    let store = MockTodoStore::new()
        .with_user_exists(true)
        .with_items(items.clone());

    let listed = handler(&store).list(Some("existingUser")).await.unwrap();

    assert_eq!(listed, items);
    assert_eq!(
        store.calls(),
        vec![
            StoreCall::UserExists("existingUser".to_string()),
            StoreCall::FindByUser("existingUser".to_string()),
        ]
    );
}

// ========== Add ==========

#[tokio::test]
async fn add_without_body_is_a_validation_error() {
    let store = MockTodoStore::new();

    let err = handler(&store).add(None).await.unwrap_err();

    assert_eq!(err, TodoError::MissingBody);
    assert_eq!(err.to_string(), "body parameters cannot be null.");
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn add_with_missing_or_empty_fields_is_a_validation_error() {
    let cases = [
        (None, Some("Todo text")),
        (Some("User"), None),
        (None, None),
        (Some(""), Some("Todo text")),
        (Some("User"), Some("")),
        (Some(""), Some("")),
    ];

    for (user_id, text) in cases {
        let store = MockTodoStore::new();
        let params = TodoParameters {
            user_id: user_id.map(str::to_string),
            text: text.map(str::to_string),
        };

        let err = handler(&store).add(Some(params)).await.unwrap_err();

        assert_eq!(err, TodoError::MissingUserOrText, "case {user_id:?} / {text:?}");
        assert_eq!(err.to_string(), "User or text string cannot be empty or null.");
        assert!(store.calls().is_empty());
    }
}

#[tokio::test]
async fn add_with_valid_parameters_inserts_and_returns_store_result() {
    let reported = item(3, "userId", "earlier text");
    let store = MockTodoStore::new().with_insert_result(reported.clone());

    let result = handler(&store)
        .add(Some(TodoParameters::new("userId", "Todo text")))
        .await
        .unwrap();

    assert_eq!(result, reported);
    assert_eq!(
        store.calls(),
        vec![StoreCall::Insert {
            user_id: "userId".to_string(),
            text: "Todo text".to_string(),
        }]
    );
}

// ========== Delete ==========

#[tokio::test]
async fn delete_for_unknown_user_is_not_found() {
    let store = MockTodoStore::new().with_user_exists(false);

    let err = handler(&store)
        .delete(Some("nonExistingUser"), Some("list1"))
        .await
        .unwrap_err();

    assert_eq!(err, TodoError::UserNotFound);
    assert_eq!(err.to_string(), "User not found, no todo list to delete.");
}

#[tokio::test]
async fn delete_without_user_checks_the_empty_user() {
    let store = MockTodoStore::new().with_user_exists(false);

    let err = handler(&store).delete(None, Some("x")).await.unwrap_err();

    assert_eq!(err, TodoError::UserNotFound);
    assert_eq!(store.calls(), vec![StoreCall::UserExists(String::new())]);
}

#[tokio::test]
async fn delete_of_unknown_item_is_not_found() {
    let store = MockTodoStore::new().with_user_exists(true).with_lookup(None);

    let err = handler(&store)
        .delete(Some("existingUser"), Some("nonExistingItem"))
        .await
        .unwrap_err();

    assert_eq!(err, TodoError::ItemNotFound);
    assert_eq!(
        err.to_string(),
        "TODO item not found or does not belong to the user."
    );
    assert!(!store.was_called(|c| matches!(c, StoreCall::Remove(_))));
}

#[tokio::test]
async fn delete_of_existing_item_removes_it() {
    let target = item(1, "existingUser", "existingItem");
    let store = MockTodoStore::new()
        .with_user_exists(true)
        .with_lookup(Some(target.clone()));

    handler(&store)
        .delete(Some("existingUser"), Some("existingItem"))
        .await
        .unwrap();

    assert_eq!(
        store.calls(),
        vec![
            StoreCall::UserExists("existingUser".to_string()),
            StoreCall::FindOne {
                user_id: "existingUser".to_string(),
                text: "existingItem".to_string(),
            },
            StoreCall::Remove(target),
        ]
    );
}

// ========== Storage failures ==========

#[tokio::test]
async fn storage_failures_propagate_unchanged() {
    let failure = TodoError::Storage("engine unavailable".to_string());
    let store = MockTodoStore::new().failing_with(failure.clone());
    let handler = handler(&store);

    assert_eq!(handler.list(Some("alice")).await.unwrap_err(), failure);
    assert_eq!(
        handler
            .add(Some(TodoParameters::new("alice", "x")))
            .await
            .unwrap_err(),
        failure
    );
    assert_eq!(
        handler.delete(Some("alice"), Some("x")).await.unwrap_err(),
        failure
    );
    assert_eq!(failure.kind(), ErrorKind::Internal);
}
