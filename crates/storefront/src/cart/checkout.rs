//! Checkout: validate the cart and shipping selection, submit the order,
//! clear the cart on success.
//!
//! States move `Idle -> Submitting -> Success | Failed`. Validation
//! failures keep the flow `Idle` and the cart untouched; a failed
//! submission keeps the cart so the user can retry; a successful one
//! clears the store and broadcasts the change.

use rave_core::AddressId;

use crate::api::{ApiError, OrderConfirmation, OrderDraft, OrderItem};
use crate::error::AppError;

use super::service::CartService;
use super::store::CartStore;

/// Seam between the checkout flow and the external order service.
pub trait OrderGateway {
    /// Submit an order draft for creation.
    fn submit(
        &self,
        draft: &OrderDraft,
    ) -> impl Future<Output = Result<OrderConfirmation, ApiError>> + Send;
}

/// Where a checkout attempt currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutState {
    /// Nothing submitted yet; validation failures keep the flow here.
    #[default]
    Idle,
    /// A submission is in flight; duplicates are rejected until it lands.
    Submitting,
    /// The order was accepted and the cart cleared.
    Success(OrderConfirmation),
    /// The service rejected the order; the cart is untouched for retry.
    Failed(String),
}

/// Drives one checkout attempt over a cart service and an order gateway.
pub struct CheckoutFlow<'a, S, G> {
    cart: &'a CartService<S>,
    gateway: &'a G,
    state: CheckoutState,
}

impl<'a, S: CartStore, G: OrderGateway> CheckoutFlow<'a, S, G> {
    pub const fn new(cart: &'a CartService<S>, gateway: &'a G) -> Self {
        Self {
            cart,
            gateway,
            state: CheckoutState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Validate and submit the current cart as an order.
    ///
    /// Preconditions: the cart is non-empty and an address is selected.
    /// When either fails, the returned `AppError::Validation` carries the
    /// message to surface and neither the state nor the cart changes.
    ///
    /// On success the persisted cart is cleared and the change broadcast;
    /// on a service failure the state carries the service's message and the
    /// cart is left as it was.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for precondition failures, or
    /// `AppError::Storage` if clearing the cart after a successful
    /// submission fails.
    pub async fn submit(
        &mut self,
        address_id: Option<AddressId>,
        notes: &str,
    ) -> Result<&CheckoutState, AppError> {
        if self.state == CheckoutState::Submitting {
            return Err(AppError::Validation(
                "An order is already being submitted".to_string(),
            ));
        }

        let snapshot = self.cart.cart();
        if snapshot.is_empty() {
            return Err(AppError::Validation("Your cart is empty".to_string()));
        }
        let Some(address_id) = address_id else {
            return Err(AppError::Validation(
                "Please select an address".to_string(),
            ));
        };

        self.state = CheckoutState::Submitting;
        let draft = OrderDraft {
            items: snapshot
                .lines()
                .iter()
                .map(|line| OrderItem {
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .collect(),
            address_id,
            notes: notes.to_owned(),
        };

        match self.gateway.submit(&draft).await {
            Ok(confirmation) => {
                tracing::info!(order_id = %confirmation.order_id, "order placed");
                self.state = CheckoutState::Success(confirmation);
                self.cart.clear()?;
            }
            Err(err) => {
                tracing::warn!("order submission failed: {err}");
                self.state = CheckoutState::Failed(err.user_message());
            }
        }

        Ok(&self.state)
    }
}
