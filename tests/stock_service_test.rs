//! Tests for StockService
//!
//! Exercises the domain rules against a throwaway SQLite database:
//! name uniqueness on create and the [0, max] stock bound.

use beerstock_backend::beers::{BeerDb, BeerType, NewBeer};
use beerstock_backend::error::AppError;
use beerstock_backend::services::StockService;
use tempfile::TempDir;

async fn create_test_service() -> (StockService, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let db = BeerDb::new(db_path.to_str().unwrap())
        .await
        .expect("Failed to create test database");
    (StockService::new(db), temp_dir)
}

fn pilsner() -> NewBeer {
    NewBeer {
        name: "Pilsner".to_string(),
        brand: "Brewer & Co".to_string(),
        max: 50,
        quantity: 10,
        beer_type: BeerType::Lager,
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_persists() {
    let (service, _temp_dir) = create_test_service().await;

    let created = service.create(pilsner()).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "Pilsner");
    assert_eq!(created.quantity, 10);
    assert_eq!(created.beer_type, "LAGER");

    let found = service.find_by_id(created.id).await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_create_duplicate_name_fails_without_altering_storage() {
    let (service, _temp_dir) = create_test_service().await;
    service.create(pilsner()).await.unwrap();

    let mut duplicate = pilsner();
    duplicate.brand = "Another Brewer".to_string();
    let result = service.create(duplicate).await;
    match result.unwrap_err() {
        AppError::BeerAlreadyRegistered(name) => assert_eq!(name, "Pilsner"),
        other => panic!("Expected BeerAlreadyRegistered, got: {:?}", other),
    }

    // Storage still holds exactly the first registration
    let all = service.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].brand, "Brewer & Co");
}

#[tokio::test]
async fn test_list_all_returns_storage_order() {
    let (service, _temp_dir) = create_test_service().await;
    assert!(service.list_all().await.unwrap().is_empty());

    service.create(pilsner()).await.unwrap();
    let mut stout = pilsner();
    stout.name = "Dry Stout".to_string();
    stout.beer_type = BeerType::Stout;
    service.create(stout).await.unwrap();

    let all = service.list_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Pilsner");
    assert_eq!(all[1].name, "Dry Stout");
}

#[tokio::test]
async fn test_find_by_name() {
    let (service, _temp_dir) = create_test_service().await;
    let created = service.create(pilsner()).await.unwrap();

    let found = service.find_by_name("Pilsner").await.unwrap();
    assert_eq!(found, created);
}

#[tokio::test]
async fn test_find_absent_fails_with_not_found() {
    let (service, _temp_dir) = create_test_service().await;

    let by_id = service.find_by_id(123).await;
    assert!(matches!(by_id.unwrap_err(), AppError::BeerNotFound(_)));

    let by_name = service.find_by_name("Unknown").await;
    assert!(matches!(by_name.unwrap_err(), AppError::BeerNotFound(_)));
}

#[tokio::test]
async fn test_delete_then_find_fails_with_not_found() {
    let (service, _temp_dir) = create_test_service().await;
    let created = service.create(pilsner()).await.unwrap();

    service.delete_by_id(created.id).await.unwrap();

    let result = service.find_by_id(created.id).await;
    assert!(matches!(result.unwrap_err(), AppError::BeerNotFound(_)));

    // Deleting an absent id reports not found
    let result = service.delete_by_id(created.id).await;
    assert!(matches!(result.unwrap_err(), AppError::BeerNotFound(_)));
}

#[tokio::test]
async fn test_increment_within_max_succeeds() {
    let (service, _temp_dir) = create_test_service().await;
    let created = service.create(pilsner()).await.unwrap();

    // 10 + 30 = 40, within max 50
    let incremented = service.increment(created.id, 30).await.unwrap();
    assert_eq!(incremented.quantity, 40);

    // Exactly up to max is allowed
    let topped_up = service.increment(created.id, 10).await.unwrap();
    assert_eq!(topped_up.quantity, 50);
}

#[tokio::test]
async fn test_increment_beyond_max_fails_and_leaves_state_unchanged() {
    let (service, _temp_dir) = create_test_service().await;
    let created = service.create(pilsner()).await.unwrap();
    service.increment(created.id, 30).await.unwrap();

    // 40 + 20 = 60 > 50
    let result = service.increment(created.id, 20).await;
    match result.unwrap_err() {
        AppError::StockExceededOnIncrement { id, quantity } => {
            assert_eq!(id, created.id);
            assert_eq!(quantity, 20);
        }
        other => panic!("Expected StockExceededOnIncrement, got: {:?}", other),
    }

    let unchanged = service.find_by_id(created.id).await.unwrap();
    assert_eq!(unchanged.quantity, 40);
}

#[tokio::test]
async fn test_increment_absent_beer_fails_with_not_found() {
    let (service, _temp_dir) = create_test_service().await;
    let result = service.increment(99, 5).await;
    assert!(matches!(result.unwrap_err(), AppError::BeerNotFound(_)));
}

#[tokio::test]
async fn test_decrement_to_zero_succeeds() {
    let (service, _temp_dir) = create_test_service().await;
    let created = service.create(pilsner()).await.unwrap();
    service.increment(created.id, 30).await.unwrap();

    // 40 - 40 = 0, the floor itself is allowed
    let decremented = service.decrement(created.id, 40).await.unwrap();
    assert_eq!(decremented.quantity, 0);
}

#[tokio::test]
async fn test_decrement_below_zero_fails_and_leaves_state_unchanged() {
    let (service, _temp_dir) = create_test_service().await;
    let created = service.create(pilsner()).await.unwrap();
    service.decrement(created.id, 10).await.unwrap();

    // 0 - 1 would go negative
    let result = service.decrement(created.id, 1).await;
    match result.unwrap_err() {
        AppError::StockExceededOnDecrement { id, quantity } => {
            assert_eq!(id, created.id);
            assert_eq!(quantity, 1);
        }
        other => panic!("Expected StockExceededOnDecrement, got: {:?}", other),
    }

    let unchanged = service.find_by_id(created.id).await.unwrap();
    assert_eq!(unchanged.quantity, 0);
}

#[tokio::test]
async fn test_decrement_absent_beer_fails_with_not_found() {
    let (service, _temp_dir) = create_test_service().await;
    let result = service.decrement(99, 5).await;
    assert!(matches!(result.unwrap_err(), AppError::BeerNotFound(_)));
}

#[tokio::test]
async fn test_updated_at_refreshed_on_stock_change() {
    let (service, _temp_dir) = create_test_service().await;
    let created = service.create(pilsner()).await.unwrap();

    let incremented = service.increment(created.id, 5).await.unwrap();
    assert!(incremented.updated_at >= created.updated_at);
    assert_eq!(incremented.created_at, created.created_at);
}
