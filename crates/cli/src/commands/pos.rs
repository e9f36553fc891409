//! POS command: ring up an in-store sale.
//!
//! A walk-in sale has no cart and no shipping address: the employee keys
//! product/quantity pairs, optionally attaches the customer by phone
//! number, and the order service decrements stock on acceptance.

#![allow(clippy::print_stdout)]

use rave_core::ProductId;
use rave_storefront::api::{OrderItem, PosOrderDraft};
use rave_storefront::error::{AppError, Result};
use rave_storefront::state::AppState;

/// Submit an in-store sale from `id:qty` pairs.
pub async fn run(state: &AppState, items: &[String], phone: Option<String>) -> Result<()> {
    if state.config().api_token.is_none() {
        return Err(AppError::NotAuthenticated);
    }
    let employee = state.auth().profile().await?;

    let items = items
        .iter()
        .map(|spec| parse_item(spec))
        .collect::<Result<Vec<_>>>()?;
    if items.is_empty() {
        return Err(AppError::Validation("No items given".to_string()));
    }

    let mut draft = PosOrderDraft::new(items, employee.id);
    if let Some(phone) = phone {
        // An unknown phone still completes the sale; it just stays
        // unattached to an account.
        match state.auth().by_phone(&phone).await? {
            Some(customer) => draft.customer_id = Some(customer.id),
            None => println!("No account for {phone}, recording sale without one"),
        }
        draft.customer_phone = Some(phone);
    }

    let confirmation = state.orders().create_pos(&draft).await?;
    println!("Sale completed! Order #{}", confirmation.order_id);
    Ok(())
}

/// Parse an `id:qty` pair; a bare `id` means one unit.
fn parse_item(spec: &str) -> Result<OrderItem> {
    let invalid = || AppError::Validation(format!("Invalid item spec: {spec} (expected id:qty)"));

    let (id, quantity) = match spec.split_once(':') {
        Some((id, quantity)) => (
            id.parse::<i32>().map_err(|_| invalid())?,
            quantity.parse::<u32>().map_err(|_| invalid())?,
        ),
        None => (spec.parse::<i32>().map_err(|_| invalid())?, 1),
    };
    if quantity == 0 {
        return Err(invalid());
    }

    Ok(OrderItem {
        product_id: ProductId::new(id),
        quantity,
    })
}
