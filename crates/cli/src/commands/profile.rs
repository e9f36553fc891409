//! Profile commands: account details, order history, and reviews.

#![allow(clippy::print_stdout)]

use rave_core::{OrderId, ProductId};
use rave_storefront::api::{NewReview, ProfileUpdate};
use rave_storefront::error::{AppError, Result};
use rave_storefront::state::AppState;

/// Print the account's profile.
pub async fn show(state: &AppState) -> Result<()> {
    let user = current_user(state).await?;
    let profile = state.profile().get(user.id).await?;
    println!("{} <{}> - {}", profile.name, profile.email, profile.role);
    if let Some(phone) = profile.phone {
        println!("Phone: {phone}");
    }
    Ok(())
}

/// Update profile fields.
pub async fn update(state: &AppState, name: Option<String>, phone: Option<String>) -> Result<()> {
    if name.is_none() && phone.is_none() {
        return Err(AppError::Validation("Nothing to update".to_string()));
    }
    let user = current_user(state).await?;
    state
        .profile()
        .update(user.id, &ProfileUpdate { name, phone })
        .await?;
    println!("Profile updated");
    Ok(())
}

/// List the account's orders via the profile service.
pub async fn orders(state: &AppState) -> Result<()> {
    let user = current_user(state).await?;
    for order in state.profile().orders(user.id).await? {
        println!(
            "#{:<6} {:<12} {}",
            order.id,
            order.status,
            order.created_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

/// Cancel one of the account's pending orders.
pub async fn cancel_order(state: &AppState, order_id: i32) -> Result<()> {
    let user = current_user(state).await?;
    state
        .profile()
        .cancel_order(user.id, OrderId::new(order_id))
        .await?;
    println!("Order #{order_id} cancelled");
    Ok(())
}

/// List the account's reviews.
pub async fn reviews(state: &AppState) -> Result<()> {
    let user = current_user(state).await?;
    let reviews = state.profile().reviews(user.id).await?;
    if reviews.is_empty() {
        println!("No reviews yet");
        return Ok(());
    }
    for review in reviews {
        println!(
            "product #{} - {}/5 {}",
            review.product_id, review.rating, review.comment
        );
    }
    Ok(())
}

/// Submit a review for a purchased product.
pub async fn review(
    state: &AppState,
    product_id: i32,
    order_id: Option<i32>,
    rating: u8,
    comment: String,
) -> Result<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::Validation(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    let user = current_user(state).await?;
    state
        .profile()
        .submit_review(
            user.id,
            &NewReview {
                product_id: ProductId::new(product_id),
                order_id: order_id.map(OrderId::new),
                rating,
                comment,
            },
        )
        .await?;
    println!("Review submitted");
    Ok(())
}

async fn current_user(state: &AppState) -> Result<rave_storefront::api::User> {
    if state.config().api_token.is_none() {
        return Err(AppError::NotAuthenticated);
    }
    Ok(state.auth().profile().await?)
}
