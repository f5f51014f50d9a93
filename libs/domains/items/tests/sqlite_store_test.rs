//! Integration tests for the SQLite-backed item store.
//!
//! These run against a migrated temp-file database from `test-utils`, so
//! they exercise the real engine-assigned primary-key sequence.

use domain_items::{ItemRepository, NewItem, SqliteItemRepository};
use test_utils::TestDatabase;

fn new_item(name: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        category: "kitchen".to_string(),
        image_filename: "abc.jpg".to_string(),
    }
}

#[tokio::test]
async fn append_assigns_engine_ids_in_order() {
    let db = TestDatabase::new().await;
    let repo = SqliteItemRepository::new(db.connection());

    let first = repo.append(new_item("mug")).await.unwrap();
    let second = repo.append(new_item("plate")).await.unwrap();

    assert!(second.id > first.id);

    let items = repo.list_all().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "mug");
    assert_eq!(items[1].name, "plate");
}

#[tokio::test]
async fn get_by_id_round_trips() {
    let db = TestDatabase::new().await;
    let repo = SqliteItemRepository::new(db.connection());

    let appended = repo.append(new_item("mug")).await.unwrap();

    let fetched = repo.get_by_id(appended.id).await.unwrap().unwrap();
    assert_eq!(fetched, appended);
}

#[tokio::test]
async fn empty_table_lists_empty() {
    let db = TestDatabase::new().await;
    let repo = SqliteItemRepository::new(db.connection());

    assert!(repo.list_all().await.unwrap().is_empty());
    assert!(repo.get_by_id(1).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_outside_key_space_are_absent() {
    let db = TestDatabase::new().await;
    let repo = SqliteItemRepository::new(db.connection());

    repo.append(new_item("mug")).await.unwrap();

    assert!(repo.get_by_id(i64::MAX).await.unwrap().is_none());
    assert!(repo.get_by_id(-1).await.unwrap().is_none());
}

#[tokio::test]
async fn append_monotonicity_across_many_items() {
    let db = TestDatabase::new().await;
    let repo = SqliteItemRepository::new(db.connection());

    let mut appended = Vec::new();
    for i in 0..10 {
        appended.push(repo.append(new_item(&format!("item-{}", i))).await.unwrap());
    }

    let listed = repo.list_all().await.unwrap();
    assert_eq!(listed, appended);

    for item in &appended {
        let fetched = repo.get_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(&fetched, item);
    }
}
