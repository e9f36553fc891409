//! Profile service client: account details, order history, and reviews.

use rave_core::{OrderId, ProductId, ReviewId, UserId};
use serde::{Deserialize, Serialize};

use super::orders::Order;
use super::{ApiClient, ApiError, User};

/// Editable profile fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A product review left by the account.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    #[serde(default)]
    pub order_id: Option<OrderId>,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
}

/// Payload for submitting a review against a delivered order line.
#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub product_id: ProductId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    pub rating: u8,
    pub comment: String,
}

/// Client for the profile endpoints.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    api: ApiClient,
}

impl ProfileClient {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The account's profile.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn get(&self, user_id: UserId) -> Result<User, ApiError> {
        self.api.get(&format!("profile/{user_id}")).await
    }

    /// Update profile fields.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn update(&self, user_id: UserId, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.api
            .put_no_response(&format!("profile/{user_id}"), update)
            .await
    }

    /// The account's order history.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn orders(&self, user_id: UserId) -> Result<Vec<Order>, ApiError> {
        self.api.get(&format!("profile/{user_id}/orders")).await
    }

    /// Cancel one of the account's pending orders.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the order can no longer
    /// be cancelled.
    pub async fn cancel_order(&self, user_id: UserId, order_id: OrderId) -> Result<(), ApiError> {
        self.api
            .put_no_response(
                &format!("profile/{user_id}/orders/{order_id}/cancel"),
                &serde_json::json!({}),
            )
            .await
    }

    /// The account's reviews.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn reviews(&self, user_id: UserId) -> Result<Vec<Review>, ApiError> {
        self.api.get(&format!("profile/{user_id}/reviews")).await
    }

    /// Submit a review.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn submit_review(&self, user_id: UserId, review: &NewReview) -> Result<(), ApiError> {
        self.api
            .post::<_, serde_json::Value>(&format!("profile/{user_id}/reviews"), review)
            .await
            .map(|_| ())
    }
}
