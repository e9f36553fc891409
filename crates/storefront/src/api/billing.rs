//! Billing service client: the aggregates behind the admin overview.

use chrono::{DateTime, Utc};
use rave_core::{OrderId, OrderStatus};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{ApiClient, ApiError};

/// Store-wide totals for the overview summary cards.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingSummary {
    #[serde(default)]
    pub total_orders: i64,
    #[serde(default)]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub avg_order_value: Decimal,
    #[serde(default)]
    pub total_customers: i64,
}

/// A recently placed order, as the overview table shows it.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentOrder {
    pub id: OrderId,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// A best-selling product.
#[derive(Debug, Clone, Deserialize)]
pub struct BestProduct {
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub total_sold: i64,
    #[serde(default)]
    pub total_revenue: Decimal,
}

/// One day of sales.
#[derive(Debug, Clone, Deserialize)]
pub struct DailySales {
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub orders_count: i64,
    #[serde(default)]
    pub daily_revenue: Decimal,
}

/// Client for the billing endpoints (admin).
#[derive(Debug, Clone)]
pub struct BillingClient {
    api: ApiClient,
}

impl BillingClient {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Store-wide totals.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn summary(&self) -> Result<BillingSummary, ApiError> {
        self.api.get("billing/summary").await
    }

    /// The most recently placed orders.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn recent_orders(&self) -> Result<Vec<RecentOrder>, ApiError> {
        self.api.get("billing/recent-orders").await
    }

    /// Best-selling products.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn best_products(&self) -> Result<Vec<BestProduct>, ApiError> {
        self.api.get("billing/best-products").await
    }

    /// Per-day sales totals.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn daily_sales(&self) -> Result<Vec<DailySales>, ApiError> {
        self.api.get("billing/daily-sales").await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_tolerates_missing_fields() {
        let summary: BillingSummary = serde_json::from_str(r#"{"total_orders": 12}"#).unwrap();
        assert_eq!(summary.total_orders, 12);
        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.total_customers, 0);
    }
}
