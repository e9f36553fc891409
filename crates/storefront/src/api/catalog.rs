//! Product catalog client with read-through caching.
//!
//! Catalog data changes rarely compared to how often it is browsed, so
//! list and detail responses are cached for a short TTL.

use std::time::Duration;

use moka::future::Cache;
use rave_core::{CartProduct, ProductId};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{ApiClient, ApiError};

const CACHE_TTL: Duration = Duration::from_secs(60);
const CACHE_CAPACITY: u64 = 1024;

/// A product as the catalog service returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub category_name: Option<String>,
    /// Unit price in the store currency.
    pub price: Decimal,
    pub stock: i32,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Whether the product can currently be added to a cart.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Catalog list filters; empty fields are omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub section: Option<String>,
    pub gender: Option<String>,
    pub color: Option<String>,
}

impl ProductFilters {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        [
            ("search", &self.search),
            ("category", &self.category),
            ("brand", &self.brand),
            ("section", &self.section),
            ("gender", &self.gender),
            ("color", &self.color),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }

    /// Canonical cache key for this filter combination.
    fn cache_key(&self) -> String {
        self.to_query()
            .into_iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Cache key for products and product lists.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Product(ProductId),
    Products(String),
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Product(Box<Product>),
    Products(Vec<Product>),
}

/// Client for the product catalog endpoints.
#[derive(Clone)]
pub struct CatalogClient {
    api: ApiClient,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let cache = Cache::builder()
            .time_to_live(CACHE_TTL)
            .max_capacity(CACHE_CAPACITY)
            .build();
        Self { api, cache }
    }

    /// List products matching `filters`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn list(&self, filters: &ProductFilters) -> Result<Vec<Product>, ApiError> {
        let key = CacheKey::Products(filters.cache_key());
        if let Some(CacheValue::Products(products)) = self.cache.get(&key).await {
            return Ok(products);
        }

        let products: Vec<Product> = self
            .api
            .get_query("products", &filters.to_query())
            .await?;
        self.cache
            .insert(key, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the product does not exist.
    pub async fn get(&self, id: ProductId) -> Result<Product, ApiError> {
        let key = CacheKey::Product(id);
        if let Some(CacheValue::Product(product)) = self.cache.get(&key).await {
            return Ok(*product);
        }

        let product: Product = self.api.get(&format!("products/{id}")).await?;
        self.cache
            .insert(key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Ok(product)
    }

    /// Overwrite a product's stock level (admin/employee).
    ///
    /// Invalidates cached copies so the next read sees the new stock.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn update_stock(&self, id: ProductId, stock: i32) -> Result<(), ApiError> {
        self.api
            .put_no_response(
                &format!("products/{id}/stock"),
                &serde_json::json!({ "stock": stock }),
            )
            .await?;
        self.cache.invalidate(&CacheKey::Product(id)).await;
        Ok(())
    }

    /// Delete a product (admin).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        self.api.delete(&format!("products/{id}")).await?;
        self.cache.invalidate(&CacheKey::Product(id)).await;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_to_query_skips_empty() {
        let filters = ProductFilters {
            brand: Some("Apex".to_string()),
            gender: Some("men".to_string()),
            ..ProductFilters::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![("brand", "Apex".to_string()), ("gender", "men".to_string())]
        );
    }

    #[test]
    fn test_cache_key_is_stable() {
        let filters = ProductFilters {
            search: Some("runner".to_string()),
            brand: Some("Apex".to_string()),
            ..ProductFilters::default()
        };
        assert_eq!(filters.cache_key(), "search=runner&brand=Apex");
        assert_eq!(ProductFilters::default().cache_key(), "");
    }

    #[test]
    fn test_product_deserializes_numeric_price() {
        let product: Product = serde_json::from_str(
            r#"{"id": 1, "name": "Court Classic", "brand": "Apex", "price": 4500.0, "stock": 3}"#,
        )
        .unwrap();
        assert_eq!(product.price, Decimal::new(4500, 0));
        assert!(product.in_stock());
        assert!(product.image.is_none());
    }

    #[test]
    fn test_cart_product_snapshot() {
        let product = Product {
            id: ProductId::new(9),
            name: "Trail Runner".to_string(),
            brand: "Apex".to_string(),
            category_name: Some("Running".to_string()),
            price: Decimal::new(7999, 0),
            stock: 5,
            image: Some("images/products/9.jpg".to_string()),
        };
        let snapshot = CartProduct::from(&product);
        assert_eq!(snapshot.id, product.id);
        assert_eq!(snapshot.price, product.price);
        assert_eq!(snapshot.image.as_deref(), Some("images/products/9.jpg"));
    }
}
