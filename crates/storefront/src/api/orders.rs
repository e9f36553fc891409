//! Order service client: checkout submission, order history, and the
//! admin/POS order operations.

use chrono::{DateTime, Utc};
use rave_core::{AddressId, OrderId, OrderStatus, ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

/// One order line as the order service expects it: the cart line reduced
/// to its product id and quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Checkout submission payload.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDraft {
    pub items: Vec<OrderItem>,
    pub address_id: AddressId,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

/// In-store sale payload submitted by the POS view.
#[derive(Debug, Clone, Serialize)]
pub struct PosOrderDraft {
    pub items: Vec<OrderItem>,
    /// Always `"pos"`; the service uses it to skip shipping.
    pub order_type: &'static str,
    pub employee_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
}

impl PosOrderDraft {
    #[must_use]
    pub fn new(items: Vec<OrderItem>, employee_id: UserId) -> Self {
        Self {
            items,
            order_type: "pos",
            employee_id,
            customer_id: None,
            customer_phone: None,
        }
    }
}

/// What the order service answers a successful submission with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderConfirmation {
    #[serde(alias = "orderId", alias = "id")]
    pub order_id: OrderId,
    #[serde(default)]
    pub status: OrderStatus,
}

/// An order as listings return it.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub total_price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: OrderStatus,
}

/// Client for the order service endpoints.
#[derive(Debug, Clone)]
pub struct OrdersClient {
    api: ApiClient,
}

impl OrdersClient {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit an order draft for creation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails; the error carries the
    /// service's message (e.g. an out-of-stock rejection) when it sent one.
    pub async fn create(&self, draft: &OrderDraft) -> Result<OrderConfirmation, ApiError> {
        self.api.post("orders", draft).await
    }

    /// Submit an in-store sale (employee/admin).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn create_pos(&self, draft: &PosOrderDraft) -> Result<OrderConfirmation, ApiError> {
        self.api.post("orders/pos", draft).await
    }

    /// The current account's orders.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn my_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.api.get("orders/my-orders").await
    }

    /// Fetch a single order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn get(&self, id: OrderId) -> Result<Order, ApiError> {
        self.api.get(&format!("orders/{id}")).await
    }

    /// Every order in the store (admin/employee).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn all(&self) -> Result<Vec<Order>, ApiError> {
        self.api.get("orders").await
    }

    /// Move an order to a new status (admin/employee).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<(), ApiError> {
        self.api
            .put_no_response(&format!("orders/{id}/status"), &StatusUpdate { status })
            .await
    }
}

impl crate::cart::OrderGateway for OrdersClient {
    async fn submit(&self, draft: &OrderDraft) -> Result<OrderConfirmation, ApiError> {
        self.create(draft).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_serializes_reduced_lines() {
        let draft = OrderDraft {
            items: vec![
                OrderItem {
                    product_id: ProductId::new(1),
                    quantity: 2,
                },
                OrderItem {
                    product_id: ProductId::new(7),
                    quantity: 1,
                },
            ],
            address_id: AddressId::new(3),
            notes: "Leave at the gate".to_string(),
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["items"][0]["product_id"], 1);
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["address_id"], 3);
        assert_eq!(json["notes"], "Leave at the gate");
        // Only the reduced fields go over the wire.
        assert!(json["items"][0].get("name").is_none());
    }

    #[test]
    fn test_draft_omits_empty_notes() {
        let draft = OrderDraft {
            items: vec![],
            address_id: AddressId::new(3),
            notes: String::new(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_pos_draft_carries_order_type() {
        let draft = PosOrderDraft::new(
            vec![OrderItem {
                product_id: ProductId::new(2),
                quantity: 1,
            }],
            UserId::new(11),
        );
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["order_type"], "pos");
        assert_eq!(json["employee_id"], 11);
        assert!(json.get("customer_id").is_none());
    }

    #[test]
    fn test_confirmation_accepts_order_id_aliases() {
        let confirmation: OrderConfirmation =
            serde_json::from_str(r#"{"orderId": 42, "status": "pending"}"#).unwrap();
        assert_eq!(confirmation.order_id, OrderId::new(42));

        let confirmation: OrderConfirmation =
            serde_json::from_str(r#"{"order_id": 42}"#).unwrap();
        assert_eq!(confirmation.status, OrderStatus::Pending);
    }
}
