//! Browsing commands: products and order history.

#![allow(clippy::print_stdout)]

use rave_storefront::api::ProductFilters;
use rave_storefront::error::Result;
use rave_storefront::state::AppState;

/// List catalog products matching the filters.
pub async fn products(state: &AppState, filters: ProductFilters) -> Result<()> {
    let products = state.catalog().list(&filters).await?;
    if products.is_empty() {
        println!("No products found");
        return Ok(());
    }

    for product in products {
        let stock = if product.in_stock() {
            format!("{} in stock", product.stock)
        } else {
            "out of stock".to_string()
        };
        println!(
            "#{:<5} {:<30} {:<12} LKR {:<10.2} {stock}",
            product.id, product.name, product.brand, product.price
        );
    }
    Ok(())
}

/// List the current account's orders, or show one.
pub async fn orders(state: &AppState, id: Option<i32>) -> Result<()> {
    if let Some(id) = id {
        let order = state.orders().get(rave_core::OrderId::new(id)).await?;
        println!(
            "#{} {} placed {}",
            order.id,
            order.status,
            order.created_at.format("%Y-%m-%d %H:%M")
        );
        return Ok(());
    }

    let orders = state.orders().my_orders().await?;
    if orders.is_empty() {
        println!("No orders yet");
        return Ok(());
    }

    for order in orders {
        let total = order
            .total_price
            .map_or_else(|| "-".to_string(), |total| format!("LKR {total:.2}"));
        println!(
            "#{:<6} {:<12} {:<12} {}",
            order.id,
            order.status,
            total,
            order.created_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}
