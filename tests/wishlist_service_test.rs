mod common;

use chrono::NaiveDate;
use common::TestApp;
use rust_decimal_macros::dec;
use wishlist_api::{
    dto::{NewItem, NewWishlist},
    entities::ItemStatus,
    errors::ServiceError,
    services::WishlistFilter,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_wishlist(name: &str, userid: &str, created: NaiveDate) -> NewWishlist {
    NewWishlist {
        name: name.to_string(),
        userid: userid.to_string(),
        date_created: created,
        items: Vec::new(),
    }
}

fn new_item(name: &str) -> NewItem {
    NewItem {
        name: name.to_string(),
        description: "service test item".to_string(),
        price: dec!(9.99),
        status: ItemStatus::Pending,
    }
}

#[tokio::test]
async fn create_with_nested_items_is_atomic() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    let mut input = new_wishlist("Nested", "U1", date(2024, 1, 1));
    input.items = vec![new_item("A"), new_item("B")];

    let created = services.wishlists.create(input).await.unwrap();
    assert_eq!(created.items.len(), 2);
    assert!(created
        .items
        .iter()
        .all(|i| i.wishlist_id == created.id()));

    let fetched = services.wishlists.get(created.id()).await.unwrap();
    assert_eq!(fetched.items.len(), 2);
}

#[tokio::test]
async fn list_filters_match_expected_subsets() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    services
        .wishlists
        .create(new_wishlist("Books", "U1", date(2024, 1, 1)))
        .await
        .unwrap();
    services
        .wishlists
        .create(new_wishlist("Books", "U2", date(2024, 2, 1)))
        .await
        .unwrap();
    services
        .wishlists
        .create(new_wishlist("Games", "U1", date(2024, 3, 1)))
        .await
        .unwrap();

    let all = services.wishlists.list(WishlistFilter::All).await.unwrap();
    assert_eq!(all.len(), 3);
    // Stable ordering by id
    let ids: Vec<_> = all.iter().map(|w| w.id()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);

    let by_name = services
        .wishlists
        .list(WishlistFilter::Name("Books".into()))
        .await
        .unwrap();
    assert_eq!(by_name.len(), 2);

    let by_user = services
        .wishlists
        .list(WishlistFilter::Userid("U1".into()))
        .await
        .unwrap();
    assert_eq!(by_user.len(), 2);

    let on_date = services
        .wishlists
        .list(WishlistFilter::CreatedOn(date(2024, 2, 1)))
        .await
        .unwrap();
    assert_eq!(on_date.len(), 1);
    assert_eq!(on_date[0].wishlist.name, "Books");

    // Inclusive lower bound
    let since = services
        .wishlists
        .list(WishlistFilter::CreatedSince(date(2024, 2, 1)))
        .await
        .unwrap();
    assert_eq!(since.len(), 2);
}

#[tokio::test]
async fn update_missing_wishlist_is_not_found() {
    let app = TestApp::new().await;
    let err = app
        .state
        .services
        .wishlists
        .update(4242, new_wishlist("n", "u", date(2024, 1, 1)))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_wishlist_and_items() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    let mut input = new_wishlist("Doomed", "U1", date(2024, 1, 1));
    input.items = vec![new_item("A")];
    let created = services.wishlists.create(input).await.unwrap();
    let id = created.id();

    services.wishlists.delete(id).await.unwrap();

    let err = services.wishlists.get(id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    let err = services.items.list(id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // Idempotent
    services.wishlists.delete(id).await.unwrap();
}

#[tokio::test]
async fn duplicate_item_name_is_a_conflict() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    let wishlist = services
        .wishlists
        .create(new_wishlist("Gifts", "U1", date(2024, 1, 1)))
        .await
        .unwrap();
    let id = wishlist.id();

    services.items.create(id, new_item("Camera")).await.unwrap();
    let err = services
        .items
        .create(id, new_item("Camera"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
    assert!(err.to_string().contains("already exists"));

    // The failed insert must not have left a second row behind
    let items = services.items.list(id).await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn purchase_updates_status_in_place() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    let wishlist = services
        .wishlists
        .create(new_wishlist("Gifts", "U1", date(2024, 1, 1)))
        .await
        .unwrap();
    let id = wishlist.id();
    let item = services.items.create(id, new_item("Bike")).await.unwrap();

    let purchased = services.items.purchase(id, item.id).await.unwrap();
    assert_eq!(purchased.id, item.id);
    assert_eq!(purchased.status, ItemStatus::Purchased);

    let fetched = services.items.get(id, item.id).await.unwrap();
    assert_eq!(fetched.status, ItemStatus::Purchased);
}

#[tokio::test]
async fn item_update_keeps_status_untouched() {
    let app = TestApp::new().await;
    let services = &app.state.services;

    let wishlist = services
        .wishlists
        .create(new_wishlist("Gifts", "U1", date(2024, 1, 1)))
        .await
        .unwrap();
    let id = wishlist.id();
    let item = services.items.create(id, new_item("Bike")).await.unwrap();
    services.items.purchase(id, item.id).await.unwrap();

    let mut change = new_item("Bike");
    change.price = dec!(123.45);
    let updated = services.items.update(id, item.id, change).await.unwrap();

    assert_eq!(updated.price, dec!(123.45));
    assert_eq!(updated.status, ItemStatus::Purchased);
}
