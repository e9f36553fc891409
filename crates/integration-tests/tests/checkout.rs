//! Checkout flow end to end: validation, submission, cart clearing.

#![allow(clippy::unwrap_used)]

use rave_core::{AddressId, OrderId, ProductId};
use rave_integration_tests::{AcceptingGateway, RejectingGateway, product};
use rave_storefront::api::OrderItem;
use rave_storefront::cart::{CartService, CheckoutFlow, CheckoutState, JsonFileStore};
use rave_storefront::error::AppError;

fn seeded_service(dir: &tempfile::TempDir) -> CartService<JsonFileStore> {
    let service = CartService::new(JsonFileStore::new(dir.path().join("cart.json")));
    service.add_item(&product(1, 4500), 2).unwrap();
    service.add_item(&product(2, 1999), 1).unwrap();
    service
}

#[tokio::test]
async fn checkout_without_address_is_rejected_and_cart_kept() {
    let dir = tempfile::tempdir().unwrap();
    let service = seeded_service(&dir);
    let gateway = AcceptingGateway::new();
    let mut flow = CheckoutFlow::new(&service, &gateway);

    let err = flow.submit(None, "").await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(err.user_message(), "Please select an address");
    assert_eq!(flow.state(), &CheckoutState::Idle);
    assert!(gateway.last_draft().is_none());
    assert_eq!(service.item_count(), 3);
}

#[tokio::test]
async fn checkout_with_empty_cart_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let service = CartService::new(JsonFileStore::new(dir.path().join("cart.json")));
    let gateway = AcceptingGateway::new();
    let mut flow = CheckoutFlow::new(&service, &gateway);

    let err = flow.submit(Some(AddressId::new(1)), "").await.unwrap_err();

    assert_eq!(err.user_message(), "Your cart is empty");
    assert!(gateway.last_draft().is_none());
}

#[tokio::test]
async fn successful_checkout_clears_store_and_fires_signal() {
    let dir = tempfile::tempdir().unwrap();
    let service = seeded_service(&dir);
    let mut subscription = service.subscribe();
    let gateway = AcceptingGateway::new();
    let mut flow = CheckoutFlow::new(&service, &gateway);

    let state = flow
        .submit(Some(AddressId::new(3)), "Ring the bell twice")
        .await
        .unwrap();

    let CheckoutState::Success(confirmation) = state else {
        panic!("expected success, got {state:?}");
    };
    assert_eq!(confirmation.order_id, OrderId::new(991));

    // The payload is the cart reduced to {product_id, quantity}.
    let draft = gateway.last_draft().unwrap();
    assert_eq!(draft.address_id, AddressId::new(3));
    assert_eq!(draft.notes, "Ring the bell twice");
    assert_eq!(
        draft.items,
        vec![
            OrderItem {
                product_id: ProductId::new(1),
                quantity: 2,
            },
            OrderItem {
                product_id: ProductId::new(2),
                quantity: 1,
            },
        ]
    );

    // Cart emptied, persisted empty, and the change broadcast.
    assert!(service.cart().is_empty());
    assert!(subscription.try_changed());
    let fresh = CartService::new(JsonFileStore::new(dir.path().join("cart.json")));
    assert!(fresh.cart().is_empty());
}

#[tokio::test]
async fn failed_checkout_surfaces_service_message_and_keeps_cart() {
    let dir = tempfile::tempdir().unwrap();
    let service = seeded_service(&dir);
    let gateway = RejectingGateway("Product 2 is out of stock");
    let mut flow = CheckoutFlow::new(&service, &gateway);

    let state = flow.submit(Some(AddressId::new(3)), "").await.unwrap();

    assert_eq!(
        state,
        &CheckoutState::Failed("Product 2 is out of stock".to_string())
    );
    // Untouched for retry, in memory and on disk.
    assert_eq!(service.item_count(), 3);
    let fresh = CartService::new(JsonFileStore::new(dir.path().join("cart.json")));
    assert_eq!(fresh.item_count(), 3);
}

#[tokio::test]
async fn retry_after_failure_succeeds_with_same_cart() {
    let dir = tempfile::tempdir().unwrap();
    let service = seeded_service(&dir);

    let rejecting = RejectingGateway("temporary outage");
    let mut flow = CheckoutFlow::new(&service, &rejecting);
    flow.submit(Some(AddressId::new(3)), "").await.unwrap();
    assert!(matches!(flow.state(), CheckoutState::Failed(_)));

    let accepting = AcceptingGateway::new();
    let mut flow = CheckoutFlow::new(&service, &accepting);
    let state = flow.submit(Some(AddressId::new(3)), "").await.unwrap();

    assert!(matches!(state, CheckoutState::Success(_)));
    assert_eq!(accepting.last_draft().unwrap().items.len(), 2);
    assert!(service.cart().is_empty());
}
