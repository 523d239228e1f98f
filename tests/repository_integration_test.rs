//! Repository tests against a live PostgreSQL database
//!
//! Uses `TEST_DATABASE_URL` when set, otherwise a PostgreSQL container.

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use lightbnb::config::PropertyBackend;
use lightbnb::models::PropertySearch;
use lightbnb::{LightBnbError, Settings};
use serial_test::serial;

async fn seeded() -> TestDatabase {
    let database = TestDatabase::connect().await;
    database.load_seeds().await.expect("Failed to load seeds");
    database
}

fn listing_ids(listings: &[lightbnb::models::PropertyListing]) -> Vec<i32> {
    listings.iter().map(|listing| listing.property.id).collect()
}

#[tokio::test]
#[serial]
async fn test_unknown_email_on_empty_table_is_absent() {
    let database = TestDatabase::connect().await;
    let service = database.service(&Settings::default());

    let user = service.get_user_with_email("x@example.com").await.expect("query should succeed");
    assert!(user.is_none());
}

#[tokio::test]
#[serial]
async fn test_add_user_then_look_up() {
    let database = TestDatabase::connect().await;
    let service = database.service(&Settings::default());
    let request = fake_user_request();

    let created = service.add_user(request.clone()).await.expect("insert should succeed");
    assert!(created.id > 0);
    assert_eq!(created.email, request.email);

    let by_id = service.get_user_with_id(created.id).await.expect("query should succeed");
    let by_email = service.get_user_with_email(&request.email).await.expect("query should succeed");
    assert_eq!(by_id, Some(created.clone()));
    assert_eq!(by_email, Some(created));
    assert_eq!(database.count_records("users").await.expect("count"), 1);
}

#[tokio::test]
#[serial]
async fn test_duplicate_email_is_a_constraint_violation() {
    let database = TestDatabase::connect().await;
    let service = database.service(&Settings::default());
    let request = fake_user_request();

    service.add_user(request.clone()).await.expect("first insert should succeed");
    let result = service.add_user(request).await;

    assert_matches!(result, Err(LightBnbError::ConstraintViolation(_)));
}

#[tokio::test]
#[serial]
async fn test_search_without_filters_orders_by_price() {
    let database = seeded().await;
    let service = database.service(&Settings::default());

    let listings = service
        .get_all_properties(&PropertySearch::default(), None)
        .await
        .expect("search should succeed");

    // the unreviewed studio drops out of the review join
    assert_eq!(listing_ids(&listings), vec![3, 2, 1]);
    assert_eq!(listings[2].average_rating, 4.5);
}

#[tokio::test]
#[serial]
async fn test_search_city_is_case_sensitive_substring() {
    let database = seeded().await;
    let service = database.service(&Settings::default());

    let matches = service
        .get_all_properties(&PropertySearch::default().with_city("Vancouver"), None)
        .await
        .expect("search should succeed");
    assert_eq!(listing_ids(&matches), vec![2, 1]);

    let lowercase = service
        .get_all_properties(&PropertySearch::default().with_city("van"), None)
        .await
        .expect("search should succeed");
    assert!(lowercase.is_empty());
}

#[tokio::test]
#[serial]
async fn test_search_owner_and_price_range() {
    let database = seeded().await;
    let service = database.service(&Settings::default());

    let criteria = PropertySearch::default()
        .with_owner(1)
        .with_price_range(Some(50.0), Some(100.0));
    let listings = service
        .get_all_properties(&criteria, None)
        .await
        .expect("search should succeed");

    assert_eq!(listing_ids(&listings), vec![2]);
}

#[tokio::test]
#[serial]
async fn test_search_minimum_rating_and_limit() {
    let database = seeded().await;
    let service = database.service(&Settings::default());
    let criteria = PropertySearch::default().with_minimum_rating(4.0);

    let listings = service
        .get_all_properties(&criteria, None)
        .await
        .expect("search should succeed");
    assert_eq!(listing_ids(&listings), vec![3, 1]);

    let limited = service
        .get_all_properties(&criteria, Some(1))
        .await
        .expect("search should succeed");
    assert_eq!(listing_ids(&limited), vec![3]);
}

#[tokio::test]
#[serial]
async fn test_reservations_ordered_by_start_date() {
    let database = seeded().await;
    let service = database.service(&Settings::default());

    let reservations = service
        .get_all_reservations(2, None)
        .await
        .expect("query should succeed");

    let property_ids: Vec<i32> = reservations.iter().map(|r| r.property.id).collect();
    assert_eq!(property_ids, vec![3, 2, 1]);
    assert!(reservations.iter().all(|r| r.reservation.guest_id == 2));
    assert_eq!(reservations[0].property.title, "Bow river condo");
    assert_eq!(reservations[2].average_rating, Some(4.5));

    let limited = service
        .get_all_reservations(2, Some(2))
        .await
        .expect("query should succeed");
    assert_eq!(limited.len(), 2);
}

#[tokio::test]
#[serial]
async fn test_guest_without_reservations_gets_empty_list() {
    let database = seeded().await;
    let service = database.service(&Settings::default());

    let reservations = service
        .get_all_reservations(1, None)
        .await
        .expect("query should succeed");
    assert!(reservations.is_empty());
}

#[tokio::test]
#[serial]
async fn test_add_property_database_backend() {
    let database = seeded().await;
    let mut settings = Settings::default();
    settings.features.property_backend = PropertyBackend::Database;
    let service = database.service(&settings);

    let property = service
        .add_property(create_property_request(1, "Victoria", 12000))
        .await
        .expect("insert should succeed");

    assert_eq!(property.id, 5);
    assert_eq!(property.city, "Victoria");
    assert!(property.active);
    assert_eq!(database.count_records("properties").await.expect("count"), 5);
    assert!(service.store().is_empty().await);
}

#[tokio::test]
#[serial]
async fn test_add_property_unknown_owner_is_a_constraint_violation() {
    let database = seeded().await;
    let mut settings = Settings::default();
    settings.features.property_backend = PropertyBackend::Database;
    let service = database.service(&settings);

    let result = service
        .add_property(create_property_request(999, "Victoria", 12000))
        .await;

    assert_matches!(result, Err(LightBnbError::ConstraintViolation(_)));
}
