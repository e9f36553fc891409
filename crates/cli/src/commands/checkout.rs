//! Checkout command: submit the cart as an order.

#![allow(clippy::print_stdout)]

use rave_core::AddressId;
use rave_storefront::api::default_address;
use rave_storefront::cart::{CheckoutFlow, CheckoutState};
use rave_storefront::error::Result;
use rave_storefront::state::AppState;

/// Submit the cart against the given address, falling back to the saved
/// default address when none is passed.
pub async fn run(state: &AppState, address: Option<i32>, notes: &str) -> Result<()> {
    let address_id = match address {
        Some(id) => Some(AddressId::new(id)),
        None => {
            let addresses = state.addresses().list().await?;
            default_address(&addresses).map(|addr| addr.id)
        }
    };

    let mut flow = CheckoutFlow::new(state.cart(), state.orders());
    let state_after = flow.submit(address_id, notes).await?;

    match state_after {
        CheckoutState::Success(confirmation) => {
            println!(
                "Order placed successfully! Order #{} ({})",
                confirmation.order_id, confirmation.status
            );
        }
        CheckoutState::Failed(message) => {
            println!("Error placing order: {message}");
        }
        CheckoutState::Idle | CheckoutState::Submitting => {}
    }
    Ok(())
}
