use postbox_core::types::is_valid_timestamp;
use postbox_storage::messages;

use test_helpers::{new_message, TestDb};

#[tokio::test]
async fn test_create_and_get_message() {
    let db = TestDb::new().await;

    let id = messages::create(db.pool(), new_message(1, 2, "hi"))
        .await
        .unwrap();

    let message = messages::get_by_id(db.pool(), id).await.unwrap().unwrap();
    assert_eq!(message.content, "hi");
    assert_eq!(message.user_id, 1);
    assert_eq!(message.send_to, 2);
    assert_eq!(message.send_at, "2024-01-01 00:00:00");
    assert!(is_valid_timestamp(&message.created_at));
    assert_eq!(message.created_at, message.updated_at);
}

#[tokio::test]
async fn test_sender_need_not_exist() {
    let db = TestDb::new().await;

    // No user rows at all
    let id = messages::create(db.pool(), new_message(77, 78, "orphan"))
        .await
        .unwrap();
    assert!(messages::get_by_id(db.pool(), id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_get_all_messages() {
    let db = TestDb::new().await;

    assert!(messages::get_all(db.pool()).await.unwrap().is_empty());

    messages::create(db.pool(), new_message(1, 2, "one"))
        .await
        .unwrap();
    messages::create(db.pool(), new_message(2, 1, "two"))
        .await
        .unwrap();

    let all = messages::get_all(db.pool()).await.unwrap();
    let contents: Vec<_> = all.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["one", "two"]);
}

#[tokio::test]
async fn test_delete_message() {
    let db = TestDb::new().await;
    let id = messages::create(db.pool(), new_message(1, 2, "bye"))
        .await
        .unwrap();

    assert_eq!(messages::delete(db.pool(), id).await.unwrap(), 1);
    assert_eq!(messages::delete(db.pool(), id).await.unwrap(), 0);
    assert!(messages::get_by_id(db.pool(), id).await.unwrap().is_none());
}
