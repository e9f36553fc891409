//! Integration tests for Rave Collection.
//!
//! These tests exercise the cart subsystem across crate boundaries the way
//! the application uses it: several services sharing one persisted store
//! (the multi-window case), the checkout flow end to end against a stub
//! order gateway, and the documented last-writer-wins behavior of
//! concurrent writers.
//!
//! # Test Categories
//!
//! - `cart_sync` - Persistence, cross-instance visibility, change signals
//! - `checkout` - Validation, submission, and cart clearing

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Mutex;

use rave_core::{CartProduct, OrderId, OrderStatus, ProductId};
use rave_storefront::api::{ApiError, OrderConfirmation, OrderDraft};
use rave_storefront::cart::OrderGateway;
use rust_decimal::Decimal;

/// A catalog product snapshot for seeding carts in tests.
#[must_use]
pub fn product(id: i32, price: i64) -> CartProduct {
    CartProduct {
        id: ProductId::new(id),
        name: format!("Trail Runner {id}"),
        brand: "Apex".to_string(),
        price: Decimal::new(price, 0),
        image: None,
    }
}

/// Order gateway double that accepts every draft and records the last one.
#[derive(Default)]
pub struct AcceptingGateway {
    last_draft: Mutex<Option<OrderDraft>>,
}

impl AcceptingGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The draft from the most recent submission, if any.
    #[must_use]
    pub fn last_draft(&self) -> Option<OrderDraft> {
        self.last_draft.lock().ok().and_then(|guard| guard.clone())
    }
}

impl OrderGateway for AcceptingGateway {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderConfirmation, ApiError> {
        if let Ok(mut guard) = self.last_draft.lock() {
            *guard = Some(draft.clone());
        }
        Ok(OrderConfirmation {
            order_id: OrderId::new(991),
            status: OrderStatus::Pending,
        })
    }
}

/// Order gateway double that rejects every draft with the given message,
/// the way the order service rejects e.g. an out-of-stock line.
pub struct RejectingGateway(pub &'static str);

impl OrderGateway for RejectingGateway {
    async fn submit(&self, _draft: &OrderDraft) -> Result<OrderConfirmation, ApiError> {
        Err(ApiError::Api {
            status: 422,
            message: self.0.to_string(),
        })
    }
}
