//! Application state shared across client surfaces.

use std::sync::Arc;

use crate::api::{
    AddressesClient, ApiClient, AuthClient, BillingClient, CatalogClient, CommissionsClient,
    OrdersClient, ProfileClient,
};
use crate::cart::{CartService, JsonFileStore};
use crate::config::StorefrontConfig;
use crate::error::AppError;

/// Application state shared across all commands and components.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// cart service and the typed API clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: CartService<JsonFileStore>,
    catalog: CatalogClient,
    auth: AuthClient,
    orders: OrdersClient,
    addresses: AddressesClient,
    billing: BillingClient,
    commissions: CommissionsClient,
    profile: ProfileClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: StorefrontConfig) -> Result<Self, AppError> {
        let api = ApiClient::new(&config)?;
        let cart = CartService::new(JsonFileStore::new(config.cart_path.clone()));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cart,
                catalog: CatalogClient::new(api.clone()),
                auth: AuthClient::new(api.clone()),
                orders: OrdersClient::new(api.clone()),
                addresses: AddressesClient::new(api.clone()),
                billing: BillingClient::new(api.clone()),
                commissions: CommissionsClient::new(api.clone()),
                profile: ProfileClient::new(api),
                config,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart service.
    #[must_use]
    pub fn cart(&self) -> &CartService<JsonFileStore> {
        &self.inner.cart
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the auth client.
    #[must_use]
    pub fn auth(&self) -> &AuthClient {
        &self.inner.auth
    }

    /// Get a reference to the orders client.
    #[must_use]
    pub fn orders(&self) -> &OrdersClient {
        &self.inner.orders
    }

    /// Get a reference to the addresses client.
    #[must_use]
    pub fn addresses(&self) -> &AddressesClient {
        &self.inner.addresses
    }

    /// Get a reference to the billing client.
    #[must_use]
    pub fn billing(&self) -> &BillingClient {
        &self.inner.billing
    }

    /// Get a reference to the commissions client.
    #[must_use]
    pub fn commissions(&self) -> &CommissionsClient {
        &self.inner.commissions
    }

    /// Get a reference to the profile client.
    #[must_use]
    pub fn profile(&self) -> &ProfileClient {
        &self.inner.profile
    }
}
