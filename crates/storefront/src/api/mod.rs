//! Typed clients for the remote Rave REST API.
//!
//! All persistence and business rules live server-side; these clients are
//! thin JSON pass-throughs sharing one [`ApiClient`] for auth, request ids,
//! and error extraction. Service errors carry the body's `message` field
//! when the service sent one.

mod addresses;
mod auth;
mod billing;
mod catalog;
mod commissions;
mod orders;
mod profile;

pub use addresses::{Address, AddressesClient, NewAddress, default_address};
pub use auth::{AuthClient, AuthSession, Credentials, NewUser, User};
pub use billing::{BestProduct, BillingClient, BillingSummary, DailySales, RecentOrder};
pub use catalog::{CatalogClient, Product, ProductFilters};
pub use commissions::{
    CommissionPeriod, CommissionRate, CommissionsClient, EmployeeCommission, NewCommissionRate,
};
pub use orders::{
    Order, OrderConfirmation, OrderDraft, OrderItem, OrdersClient, PosOrderDraft,
};
pub use profile::{NewReview, ProfileClient, ProfileUpdate, Review};

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::config::StorefrontConfig;

/// The HTTP header name for request IDs.
///
/// Every outgoing call carries a fresh UUID v4 so failures can be
/// correlated with the service's logs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Errors that can occur when calling the Rave API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Message suitable for showing to the user: the service's own message
    /// when it sent one, generic text otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => "Unknown error".to_string(),
        }
    }

    /// Whether the service answered 404 for the requested resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

/// Error body the Rave API sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Shared HTTP client for the Rave API.
///
/// Cheap to clone; the typed per-resource clients each hold one.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the HTTP client fails to build.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        // Relative path joins drop the last path segment unless the base
        // ends with a slash.
        let mut base_url = config.api_base_url.clone();
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(Self {
            client,
            base_url,
            token: config.api_token.clone(),
        })
    }

    /// Replace the bearer token used for authenticated calls.
    pub fn set_token(&mut self, token: SecretString) {
        self.token = Some(token);
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Parse(format!("invalid API path {path}: {e}")))
    }

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, ApiError> {
        let mut request = self
            .client
            .request(method, self.url(path)?)
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }
        Ok(request)
    }

    async fn send<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response).await);
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn send_no_body(request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(status, response).await);
        }
        Ok(())
    }

    /// Build an `ApiError` from a non-success response, preferring the
    /// body's `message` field over raw text.
    async fn error_from(status: StatusCode, response: reqwest::Response) -> ApiError {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or(text);
        ApiError::Api {
            status: status.as_u16(),
            message,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        Self::send(self.request(Method::GET, path)?).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        Self::send(self.request(Method::GET, path)?.query(query)).await
    }

    pub(crate) async fn post<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        Self::send(self.request(Method::POST, path)?.json(body)).await
    }

    pub(crate) async fn put_no_response<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        Self::send_no_body(self.request(Method::PUT, path)?.json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        Self::send_no_body(self.request(Method::DELETE, path)?).await
    }
}

/// Wrapper for endpoints that envelope their payload in a `data` field.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Api {
            status: 400,
            message: "Insufficient stock for product 3".to_string(),
        };
        assert_eq!(err.user_message(), "Insufficient stock for product 3");
    }

    #[test]
    fn test_user_message_generic_fallback() {
        let err = ApiError::Parse("unexpected end of input".to_string());
        assert_eq!(err.user_message(), "Unknown error");
    }

    #[test]
    fn test_is_not_found() {
        let err = ApiError::Api {
            status: 404,
            message: String::new(),
        };
        assert!(err.is_not_found());

        let err = ApiError::Api {
            status: 500,
            message: String::new(),
        };
        assert!(!err.is_not_found());
    }
}
