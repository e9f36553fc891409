//! Admin commands: role management, inventory, order statuses, and
//! commission rates.
//!
//! The service enforces permissions; these commands only shape the calls.
//! A non-admin token gets the service's own rejection message back.

#![allow(clippy::print_stdout)]

use rave_core::{CommissionRateId, OrderId, OrderStatus, ProductId, UserId, UserRole};
use rave_storefront::api::{CommissionPeriod, NewCommissionRate};
use rave_storefront::error::{AppError, Result};
use rave_storefront::state::AppState;
use rust_decimal::Decimal;

/// Change an account's role.
pub async fn promote(state: &AppState, user_id: i32, role: &str) -> Result<()> {
    let role: UserRole = role
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid role: {role}")))?;
    state.auth().update_role(UserId::new(user_id), role).await?;
    println!("User #{user_id} is now {role}");
    Ok(())
}

/// Move an order to a new status.
pub async fn order_status(state: &AppState, order_id: i32, status: &str) -> Result<()> {
    let status: OrderStatus = status
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid status: {status}")))?;
    state
        .orders()
        .update_status(OrderId::new(order_id), status)
        .await?;
    println!("Order #{order_id} -> {status}");
    Ok(())
}

/// Overwrite a product's stock level.
pub async fn stock(state: &AppState, product_id: i32, stock: i32) -> Result<()> {
    state
        .catalog()
        .update_stock(ProductId::new(product_id), stock)
        .await?;
    println!("Product #{product_id} stock set to {stock}");
    Ok(())
}

/// Remove a product from the catalog.
pub async fn delete_product(state: &AppState, product_id: i32) -> Result<()> {
    state.catalog().delete(ProductId::new(product_id)).await?;
    println!("Product #{product_id} deleted");
    Ok(())
}

/// Create a commission rate tier.
pub async fn add_rate(
    state: &AppState,
    name: String,
    min_sales: Decimal,
    max_sales: Option<Decimal>,
    rate: Decimal,
) -> Result<()> {
    let created = state
        .commissions()
        .create_rate(&NewCommissionRate {
            name,
            min_sales,
            max_sales,
            commission_rate: rate,
            is_active: true,
        })
        .await?;
    println!("Rate #{} ({}) created", created.id, created.name);
    Ok(())
}

/// Overwrite a commission rate tier.
pub async fn update_rate(
    state: &AppState,
    id: i32,
    name: String,
    min_sales: Decimal,
    max_sales: Option<Decimal>,
    rate: Decimal,
    active: bool,
) -> Result<()> {
    state
        .commissions()
        .update_rate(
            CommissionRateId::new(id),
            &NewCommissionRate {
                name,
                min_sales,
                max_sales,
                commission_rate: rate,
                is_active: active,
            },
        )
        .await?;
    println!("Rate #{id} updated");
    Ok(())
}

/// Delete a commission rate tier.
pub async fn delete_rate(state: &AppState, id: i32) -> Result<()> {
    state
        .commissions()
        .delete_rate(CommissionRateId::new(id))
        .await?;
    println!("Rate #{id} deleted");
    Ok(())
}

/// Run the commission calculation for a month.
pub async fn calculate(state: &AppState, month: u32, year: i32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation(format!("Invalid month: {month}")));
    }
    state
        .commissions()
        .calculate(CommissionPeriod { month, year })
        .await?;
    println!("Commissions calculated for {month}/{year}");
    Ok(())
}

/// Store-wide commission totals.
pub async fn commission_summary(state: &AppState) -> Result<()> {
    let summary = state.commissions().summary().await?;
    println!("{summary:#}");
    Ok(())
}
