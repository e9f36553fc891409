//! Cart data model and the operations that keep it consistent.
//!
//! The cart is an ordered list of lines, unique by product id. All mutation
//! goes through the methods here so the invariants hold everywhere: a line's
//! quantity is always at least 1, and adding a product that is already
//! present increments its quantity instead of appending a duplicate line.
//!
//! The item count and total price are derived values, recomputed from the
//! lines on demand and never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// The catalog fields a cart line snapshots when a product is added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Opaque image reference, if the catalog has one.
    pub image: Option<String>,
}

/// One cart line: a product snapshot plus a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLine {
    /// Price of the whole line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// An ordered sequence of cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == id)
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line for the product already exists its quantity is incremented;
    /// otherwise a new line is appended. A zero quantity is a no-op.
    pub fn add(&mut self, product: &CartProduct, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            unit_price: product.price,
            quantity,
            image: product.image.clone(),
        });
    }

    /// Overwrite a line's quantity.
    ///
    /// Zero removes the line entirely; a line never stays at a non-positive
    /// quantity. Unknown ids are no-ops.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.product_id == id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line for `id`, if present. Unknown ids are no-ops.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product_id != id);
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines (the header badge count).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` over all lines, rounded to 2 decimal
    /// places.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .sum::<Decimal>()
            .round_dp(2)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32, price: i64) -> CartProduct {
        CartProduct {
            id: ProductId::new(id),
            name: format!("Runner {id}"),
            brand: "Apex".to_string(),
            price: Decimal::new(price, 0),
            image: None,
        }
    }

    #[test]
    fn test_add_to_empty_cart() {
        let mut cart = Cart::new();
        cart.add(&product(1, 1000), 1);

        assert_eq!(cart.lines().len(), 1);
        let line = cart.line(ProductId::new(1)).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price, Decimal::new(1000, 0));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_price(), Decimal::new(100000, 2));
    }

    #[test]
    fn test_add_existing_product_increments_quantity() {
        let mut cart = Cart::new();
        cart.add(&product(1, 500), 2);
        cart.add(&product(1, 500), 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 3);
    }

    #[test]
    fn test_add_never_duplicates_product_ids() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 1);
        cart.add(&product(2, 200), 1);
        cart.add(&product(1, 100), 4);
        cart.set_quantity(ProductId::new(2), 7);
        cart.add(&product(2, 200), 1);

        let mut ids: Vec<_> = cart.lines().iter().map(|l| l.product_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.lines().len());
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 1);
        cart.set_quantity(ProductId::new(1), 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 1);
        cart.set_quantity(ProductId::new(1), 5);

        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 5);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 1);
        cart.set_quantity(ProductId::new(99), 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 2);
        cart.remove(ProductId::new(99));

        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_aggregates_match_sums() {
        let mut cart = Cart::new();
        cart.add(&product(1, 1250), 2);
        cart.add(&product(2, 799), 3);

        assert_eq!(cart.item_count(), 5);
        // 2 * 1250 + 3 * 799 = 4897
        assert_eq!(cart.total_price(), Decimal::new(489700, 2));
    }

    #[test]
    fn test_total_price_rounds_to_two_decimals() {
        let mut cart = Cart::new();
        let mut p = product(1, 0);
        p.price = Decimal::new(3333, 3); // 3.333
        cart.add(&p, 3);

        // 3 * 3.333 = 9.999 -> 10.00
        assert_eq!(cart.total_price(), Decimal::new(1000, 2));
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 1);
        cart.add(&product(2, 200), 2);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = Cart::new();
        cart.add(&product(1, 4500), 2);
        cart.add(
            &CartProduct {
                image: Some("images/products/2.jpg".to_string()),
                ..product(2, 1999)
            },
            1,
        );

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 1);

        let value: serde_json::Value = serde_json::to_value(&cart).unwrap();
        assert!(value.is_array());
    }
}
