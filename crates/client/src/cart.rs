//! The shopping cart.
//!
//! Entries are product snapshots plus a quantity, keyed by product id -
//! the same line-item shape an order carries, so checkout can hand the
//! entries to the server verbatim.

use serde::{Deserialize, Serialize};

use tatvaani_core::{OrderItem, Product, ProductId};

/// A client-held shopping cart.
///
/// Prices are snapshots taken at add time; catalog changes after an item
/// was added do not affect the cart's total.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<OrderItem>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add `quantity` of `product`.
    ///
    /// An existing entry for the same product id is incremented; otherwise
    /// a new entry is appended. Quantity 0 is accepted and leaves the
    /// effective cart contents unchanged.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == product.id) {
            entry.quantity += quantity;
        } else {
            self.entries.push(OrderItem { product, quantity });
        }
    }

    /// Set the quantity of the entry for `product_id` to exactly
    /// `quantity`; 0 removes the entry. Absent ids are a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.product.id == product_id) {
            entry.quantity = quantity;
        }
    }

    /// Remove the entry for `product_id`; absent ids are a no-op.
    pub fn remove(&mut self, product_id: ProductId) {
        self.entries.retain(|e| e.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of price x quantity over all entries, using the snapshot
    /// prices captured at add time.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.product.price * f64::from(e.quantity))
            .sum()
    }

    /// Sum of quantities over all entries.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[OrderItem] {
        &self.entries
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tatvaani_core::NewProduct;

    fn product(name: &str, price: f64) -> Product {
        Product::create(
            NewProduct {
                name: name.to_owned(),
                price,
                ..NewProduct::default()
            },
            chrono::Utc::now(),
        )
    }

    #[test]
    fn test_adding_the_same_product_accumulates() {
        let mut cart = Cart::new();
        let tea = product("Ayurvedic Turmeric Wellness Tea", 650.0);

        cart.add(tea.clone(), 2);
        cart.add(tea, 3);

        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_add_zero_changes_nothing_in_effect() {
        let mut cart = Cart::new();
        let tea = product("Ayurvedic Turmeric Wellness Tea", 650.0);

        cart.add(tea.clone(), 2);
        cart.add(tea, 0);

        assert_eq!(cart.count(), 2);
        assert!((cart.total() - 1300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_quantity_is_absolute() {
        let mut cart = Cart::new();
        let tea = product("Ayurvedic Turmeric Wellness Tea", 650.0);
        let id = tea.id;

        cart.add(tea, 5);
        cart.update_quantity(id, 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_update_to_zero_removes_and_total_excludes() {
        let mut cart = Cart::new();
        let tea = product("Ayurvedic Turmeric Wellness Tea", 650.0);
        let salt = product("Organic Himalayan Pink Salt", 350.0);
        let tea_id = tea.id;

        cart.add(tea, 1);
        cart.add(salt, 2);
        cart.update_quantity(tea_id, 0);

        assert_eq!(cart.entries().len(), 1);
        assert!((cart.total() - 700.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_absent_id_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(product("Brass Temple Bell Set", 1200.0), 1);

        cart.remove(ProductId::random());
        assert_eq!(cart.entries().len(), 1);
    }

    #[test]
    fn test_total_uses_the_snapshot_price() {
        let mut cart = Cart::new();
        let mut shawl = product("Handwoven Kashmiri Pashmina Shawl", 8500.0);

        cart.add(shawl.clone(), 1);

        // A later catalog price change does not reach into the cart.
        shawl.price = 9999.0;
        assert!((cart.total() - 8500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serializes_as_a_bare_entry_array() {
        let mut cart = Cart::new();
        cart.add(product("Organic Cardamom Pods", 800.0), 2);

        let json = serde_json::to_value(&cart).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["name"], "Organic Cardamom Pods");
        assert_eq!(entries[0]["quantity"], 2);
    }
}
