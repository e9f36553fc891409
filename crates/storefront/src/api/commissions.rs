//! Commission service client: rate management and employee payouts.

use rave_core::{CommissionRateId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

/// A commission rate tier: sales within the band earn the given fraction.
#[derive(Debug, Clone, Deserialize)]
pub struct CommissionRate {
    pub id: CommissionRateId,
    pub name: String,
    pub min_sales: Decimal,
    /// Open-ended band when absent.
    #[serde(default)]
    pub max_sales: Option<Decimal>,
    /// Fraction, not a percentage: 0.05 is five percent.
    pub commission_rate: Decimal,
    #[serde(default)]
    pub is_active: bool,
}

/// Payload for creating or updating a rate tier.
#[derive(Debug, Clone, Serialize)]
pub struct NewCommissionRate {
    pub name: String,
    pub min_sales: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sales: Option<Decimal>,
    pub commission_rate: Decimal,
    pub is_active: bool,
}

/// The month a commission run covers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommissionPeriod {
    pub month: u32,
    pub year: i32,
}

/// One employee's commission for a period.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeCommission {
    pub id: i64,
    #[serde(default)]
    pub employee_id: Option<UserId>,
    pub employee_name: String,
    pub month: u32,
    pub year: i32,
    pub total_sales: Decimal,
    pub commission_rate: Decimal,
    pub commission_amount: Decimal,
    #[serde(default)]
    pub commission_rate_name: Option<String>,
}

/// Client for the commission endpoints (admin, plus the employee's own view).
#[derive(Debug, Clone)]
pub struct CommissionsClient {
    api: ApiClient,
}

impl CommissionsClient {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Every configured rate tier.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn rates(&self) -> Result<Vec<CommissionRate>, ApiError> {
        self.api.get("commissions/rates").await
    }

    /// Create a rate tier.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn create_rate(&self, rate: &NewCommissionRate) -> Result<CommissionRate, ApiError> {
        self.api.post("commissions/rates", rate).await
    }

    /// Overwrite a rate tier.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn update_rate(
        &self,
        id: CommissionRateId,
        rate: &NewCommissionRate,
    ) -> Result<(), ApiError> {
        self.api
            .put_no_response(&format!("commissions/rates/{id}"), rate)
            .await
    }

    /// Delete a rate tier.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn delete_rate(&self, id: CommissionRateId) -> Result<(), ApiError> {
        self.api.delete(&format!("commissions/rates/{id}")).await
    }

    /// Run the commission calculation for a period.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn calculate(&self, period: CommissionPeriod) -> Result<(), ApiError> {
        self.api
            .post::<_, serde_json::Value>("commissions/calculate", &period)
            .await
            .map(|_| ())
    }

    /// Store-wide commission totals.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn summary(&self) -> Result<serde_json::Value, ApiError> {
        self.api.get("commissions/summary").await
    }

    /// Calculated commissions per employee.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn employee_commissions(&self) -> Result<Vec<EmployeeCommission>, ApiError> {
        self.api.get("commissions/employee-commissions").await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_open_ended_band() {
        let rate: CommissionRate = serde_json::from_str(
            r#"{"id": 1, "name": "Senior", "min_sales": 100000.0,
                "commission_rate": 0.05, "is_active": true}"#,
        )
        .unwrap();
        assert!(rate.max_sales.is_none());
        assert_eq!(rate.commission_rate, Decimal::new(5, 2));
    }

    #[test]
    fn test_new_rate_omits_absent_max() {
        let rate = NewCommissionRate {
            name: "Junior".to_string(),
            min_sales: Decimal::ZERO,
            max_sales: None,
            commission_rate: Decimal::new(2, 2),
            is_active: true,
        };
        let json = serde_json::to_value(&rate).unwrap();
        assert!(json.get("max_sales").is_none());
    }
}
