//! Durable storage for the serialized cart.
//!
//! The store is a single key-value slot holding the whole cart snapshot as
//! JSON. Mutation logic always operates on a full in-memory [`Cart`] and
//! writes the whole snapshot back; there is no partial-update API at this
//! layer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rave_core::Cart;
use thiserror::Error;

/// Errors that can occur when persisting the cart.
///
/// Reads never fail: missing or corrupt data degrades to an empty cart.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Writing the snapshot failed.
    #[error("failed to write cart: {0}")]
    Write(#[from] io::Error),

    /// Serializing the snapshot failed.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A durable slot for the serialized cart.
///
/// Implementations are swappable: anything that can hold one serialized
/// snapshot works, and nothing outside this module touches the storage
/// primitive directly.
pub trait CartStore {
    /// Read the current snapshot.
    ///
    /// A missing or unparseable value yields an empty cart; it is logged,
    /// never surfaced.
    fn read(&self) -> Cart;

    /// Overwrite the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the snapshot cannot be serialized or written.
    fn write(&self, cart: &Cart) -> Result<(), StoreError>;
}

/// Cart store backed by a single JSON file.
///
/// The file survives restarts and is shared by every process pointed at the
/// same path; it is scoped to the machine profile, not the logged-in
/// account. Concurrent writers are last-writer-wins: the store offers no
/// atomicity beyond a single filesystem write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStore for JsonFileStore {
    fn read(&self) -> Cart {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Cart::new(),
            Err(err) => {
                tracing::warn!("failed to read cart file {}: {err}", self.path.display());
                return Cart::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(cart) => cart,
            Err(err) => {
                tracing::warn!(
                    "discarding unparseable cart file {}: {err}",
                    self.path.display()
                );
                Cart::new()
            }
        }
    }

    fn write(&self, cart: &Cart) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec(cart)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

/// In-memory cart store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cart: Mutex<Cart>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryStore {
    fn read(&self) -> Cart {
        self.cart.lock().map(|cart| cart.clone()).unwrap_or_default()
    }

    fn write(&self, cart: &Cart) -> Result<(), StoreError> {
        if let Ok(mut guard) = self.cart.lock() {
            *guard = cart.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rave_core::{CartProduct, ProductId};
    use rust_decimal::Decimal;

    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(
            &CartProduct {
                id: ProductId::new(1),
                name: "Court Classic".to_string(),
                brand: "Apex".to_string(),
                price: Decimal::new(4500, 0),
                image: None,
            },
            2,
        );
        cart
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("cart.json"));

        let cart = sample_cart();
        store.write(&cart).unwrap();
        assert_eq!(store.read(), cart);
    }

    #[test]
    fn test_file_store_roundtrip_fresh_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let cart = sample_cart();
        JsonFileStore::new(&path).write(&cart).unwrap();

        // A second store on the same path sees the same snapshot.
        assert_eq!(JsonFileStore::new(&path).read(), cart);
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("cart.json"));

        assert!(store.read().is_empty());
    }

    #[test]
    fn test_file_store_corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, b"{not json").unwrap();

        assert!(JsonFileStore::new(&path).read().is_empty());
    }

    #[test]
    fn test_file_store_wrong_shape_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, b"{\"total\": 3}").unwrap();

        assert!(JsonFileStore::new(&path).read().is_empty());
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/profile/cart.json"));

        store.write(&sample_cart()).unwrap();
        assert_eq!(store.read().item_count(), 2);
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.read().is_empty());

        let cart = sample_cart();
        store.write(&cart).unwrap();
        assert_eq!(store.read(), cart);
    }
}
