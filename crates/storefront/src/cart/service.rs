//! Cart mutations: read-modify-write against the store, then notify.

use rave_core::{Cart, CartProduct, ProductId};
use rust_decimal::Decimal;

use super::bus::{CartSubscription, ChangeBus, ProcessBus};
use super::store::{CartStore, StoreError};

/// Mutation API over a persisted cart.
///
/// Every mutation is a synchronous read-modify-write of the full snapshot,
/// unconditionally followed by a change broadcast. Invalid product ids are
/// no-ops, not errors; the only abnormal condition is a failed store write.
///
/// Two services pointed at the same store race last-writer-wins: each does
/// its own read-modify-write and the second write overwrites the first.
/// The bus restores visual consistency after the fact; it does not merge.
pub struct CartService<S> {
    store: S,
    bus: ProcessBus,
}

impl<S: CartStore> CartService<S> {
    /// Create a service with its own bus.
    pub fn new(store: S) -> Self {
        Self::with_bus(store, ProcessBus::new())
    }

    /// Create a service publishing on an existing bus.
    pub const fn with_bus(store: S, bus: ProcessBus) -> Self {
        Self { store, bus }
    }

    /// The bus mutations broadcast on.
    #[must_use]
    pub const fn bus(&self) -> &ProcessBus {
        &self.bus
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Current cart snapshot.
    #[must_use]
    pub fn cart(&self) -> Cart {
        self.store.read()
    }

    /// Units across all lines, for the header badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.store.read().item_count()
    }

    /// Cart total, for the checkout summary.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.store.read().total_price()
    }

    /// Add `quantity` units of `product`, merging with an existing line.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the snapshot cannot be persisted.
    pub fn add_item(&self, product: &CartProduct, quantity: u32) -> Result<Cart, StoreError> {
        self.mutate(|cart| cart.add(product, quantity))
    }

    /// Overwrite a line's quantity; zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the snapshot cannot be persisted.
    pub fn set_quantity(&self, id: ProductId, quantity: u32) -> Result<Cart, StoreError> {
        self.mutate(|cart| cart.set_quantity(id, quantity))
    }

    /// Remove the line for `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the snapshot cannot be persisted.
    pub fn remove_item(&self, id: ProductId) -> Result<Cart, StoreError> {
        self.mutate(|cart| cart.remove(id))
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the snapshot cannot be persisted.
    pub fn clear(&self) -> Result<Cart, StoreError> {
        self.mutate(Cart::clear)
    }

    /// Subscribe to change signals for this cart.
    #[must_use]
    pub fn subscribe(&self) -> CartSubscription {
        self.bus.subscribe()
    }

    fn mutate(&self, op: impl FnOnce(&mut Cart)) -> Result<Cart, StoreError> {
        let mut cart = self.store.read();
        op(&mut cart);
        self.store.write(&cart)?;
        self.bus.publish();
        Ok(cart)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::store::MemoryStore;
    use super::*;

    fn product(id: i32, price: i64) -> CartProduct {
        CartProduct {
            id: ProductId::new(id),
            name: format!("Trail Runner {id}"),
            brand: "Apex".to_string(),
            price: Decimal::new(price, 0),
            image: None,
        }
    }

    #[test]
    fn test_add_item_persists_and_notifies() {
        let service = CartService::new(MemoryStore::new());
        let mut sub = service.subscribe();

        let cart = service.add_item(&product(1, 1000), 1).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(service.cart(), cart);
        assert!(sub.try_changed());
    }

    #[test]
    fn test_add_item_merges_existing_line() {
        let service = CartService::new(MemoryStore::new());
        service.add_item(&product(1, 500), 2).unwrap();
        let cart = service.add_item(&product(1, 500), 1).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 3);
    }

    #[test]
    fn test_set_quantity_zero_removes_and_notifies() {
        let service = CartService::new(MemoryStore::new());
        service.add_item(&product(1, 100), 1).unwrap();

        let mut sub = service.subscribe();
        let cart = service.set_quantity(ProductId::new(1), 0).unwrap();

        assert!(cart.is_empty());
        assert!(sub.try_changed());
    }

    #[test]
    fn test_remove_unknown_id_still_notifies() {
        let service = CartService::new(MemoryStore::new());
        let mut sub = service.subscribe();

        let cart = service.remove_item(ProductId::new(99)).unwrap();

        assert!(cart.is_empty());
        assert!(sub.try_changed());
    }

    #[test]
    fn test_clear_empties_cart() {
        let service = CartService::new(MemoryStore::new());
        service.add_item(&product(1, 100), 2).unwrap();
        service.add_item(&product(2, 200), 1).unwrap();

        service.clear().unwrap();

        assert!(service.cart().is_empty());
        assert_eq!(service.item_count(), 0);
    }

    #[test]
    fn test_derived_values_track_mutations() {
        let service = CartService::new(MemoryStore::new());
        service.add_item(&product(1, 1250), 2).unwrap();
        service.add_item(&product(2, 799), 3).unwrap();

        assert_eq!(service.item_count(), 5);
        assert_eq!(service.total_price(), Decimal::new(489700, 2));

        service.set_quantity(ProductId::new(2), 1).unwrap();
        assert_eq!(service.item_count(), 3);
        assert_eq!(service.total_price(), Decimal::new(329900, 2));
    }

    #[test]
    fn test_shared_bus_reaches_other_components() {
        let bus = ProcessBus::new();
        let service = CartService::with_bus(MemoryStore::new(), bus.clone());
        let mut header_badge = bus.subscribe();

        service.add_item(&product(1, 100), 1).unwrap();

        assert!(header_badge.try_changed());
    }
}
