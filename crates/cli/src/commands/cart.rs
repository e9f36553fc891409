//! Cart commands: show and mutate the persisted cart.
//!
//! Mutations go through the cart service, so every change is persisted and
//! broadcast before the command prints the resulting snapshot.

#![allow(clippy::print_stdout)]

use rave_core::{Cart, CartProduct, Price, ProductId};
use rave_storefront::error::{AppError, Result};
use rave_storefront::state::AppState;

/// Print the cart with its derived count and total.
pub fn show(state: &AppState) -> Result<()> {
    print_cart(&state.cart().cart());
    Ok(())
}

/// Fetch the product from the catalog and add it to the cart.
pub async fn add(state: &AppState, product_id: i32, quantity: u32) -> Result<()> {
    let product = state.catalog().get(ProductId::new(product_id)).await?;
    if !product.in_stock() {
        return Err(AppError::Validation(format!(
            "{} is out of stock",
            product.name
        )));
    }

    let cart = state
        .cart()
        .add_item(&CartProduct::from(&product), quantity)?;
    println!("Added {} x{quantity}", product.name);
    print_cart(&cart);
    Ok(())
}

/// Overwrite a line's quantity; zero removes the line.
pub fn set(state: &AppState, product_id: i32, quantity: u32) -> Result<()> {
    let cart = state
        .cart()
        .set_quantity(ProductId::new(product_id), quantity)?;
    print_cart(&cart);
    Ok(())
}

/// Remove a line.
pub fn remove(state: &AppState, product_id: i32) -> Result<()> {
    let cart = state.cart().remove_item(ProductId::new(product_id))?;
    print_cart(&cart);
    Ok(())
}

/// Empty the cart.
pub fn clear(state: &AppState) -> Result<()> {
    state.cart().clear()?;
    println!("Cart cleared");
    Ok(())
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }
    for line in cart.lines() {
        println!(
            "#{:<5} {:<30} {:<12} x{:<3} LKR {:.2}",
            line.product_id,
            line.name,
            line.brand,
            line.quantity,
            line.line_total()
        );
    }
    println!(
        "{} items, total {}",
        cart.item_count(),
        Price::lkr(cart.total_price()).display()
    );
}
