//! Address service client.
//!
//! Addresses are owned by the account and fetched at checkout time; the
//! selected address is ephemeral UI state, never part of the cart.

use rave_core::AddressId;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError, DataEnvelope};

/// A saved shipping address.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    pub id: AddressId,
    /// Short label such as "Home" or "Work".
    pub label: String,
    /// Recipient name.
    pub name: String,
    pub address_line: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Payload for creating or updating an address.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewAddress {
    pub label: String,
    pub name: String,
    pub address_line: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
    pub is_default: bool,
}

/// The address checkout should preselect: the default one, if any.
#[must_use]
pub fn default_address(addresses: &[Address]) -> Option<&Address> {
    addresses.iter().find(|address| address.is_default)
}

/// Client for the address service endpoints.
#[derive(Debug, Clone)]
pub struct AddressesClient {
    api: ApiClient,
}

impl AddressesClient {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// The current account's addresses.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn list(&self) -> Result<Vec<Address>, ApiError> {
        let envelope: DataEnvelope<Vec<Address>> = self.api.get("addresses").await?;
        Ok(envelope.data)
    }

    /// Save a new address.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn create(&self, address: &NewAddress) -> Result<Address, ApiError> {
        self.api.post("addresses", address).await
    }

    /// Overwrite an existing address.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn update(&self, id: AddressId, address: &NewAddress) -> Result<(), ApiError> {
        self.api
            .put_no_response(&format!("addresses/{id}"), address)
            .await
    }

    /// Delete an address.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn delete(&self, id: AddressId) -> Result<(), ApiError> {
        self.api.delete(&format!("addresses/{id}")).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address(id: i32, is_default: bool) -> Address {
        Address {
            id: AddressId::new(id),
            label: "Home".to_string(),
            name: "Nadia".to_string(),
            address_line: "12 Galle Road".to_string(),
            city: "Colombo".to_string(),
            postal_code: "00300".to_string(),
            phone: "0771234567".to_string(),
            is_default,
        }
    }

    #[test]
    fn test_default_address_found() {
        let addresses = vec![address(1, false), address(2, true), address(3, false)];
        assert_eq!(default_address(&addresses).unwrap().id, AddressId::new(2));
    }

    #[test]
    fn test_default_address_none() {
        let addresses = vec![address(1, false)];
        assert!(default_address(&addresses).is_none());
        assert!(default_address(&[]).is_none());
    }

    #[test]
    fn test_address_list_envelope_shape() {
        let envelope: DataEnvelope<Vec<Address>> = serde_json::from_str(
            r#"{"data": [{"id": 1, "label": "Home", "name": "Nadia",
                "address_line": "12 Galle Road", "city": "Colombo",
                "postal_code": "00300", "phone": "0771234567", "is_default": true}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.data.len(), 1);
        assert!(envelope.data.first().unwrap().is_default);
    }
}
