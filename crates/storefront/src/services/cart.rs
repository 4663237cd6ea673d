//! Cart state manager.

use chrono_royale_core::ProductId;

use crate::catalog::Catalog;
use crate::models::{Cart, CartTotals};
use crate::storage::{LocalStore, Storage, keys};

/// Reads and mutates the visitor's cart, persisting after every change.
pub struct CartService<'a, S> {
    store: &'a mut LocalStore<S>,
}

impl<'a, S: Storage> CartService<'a, S> {
    pub const fn new(store: &'a mut LocalStore<S>) -> Self {
        Self { store }
    }

    /// The stored cart, or an empty one.
    #[must_use]
    pub fn get_cart(&self) -> Cart {
        self.store.read(keys::CART, Cart::new())
    }

    /// Add one unit of `id`: increments an existing line or appends a new one.
    pub fn add_item(&mut self, id: &ProductId) -> Cart {
        let mut cart = self.get_cart();
        cart.add(id);
        self.save(&cart);
        tracing::debug!(product_id = %id, items = cart.item_count(), "Added to cart");
        cart
    }

    /// Drop the line for `id` entirely.
    pub fn remove_item(&mut self, id: &str) -> Cart {
        let mut cart = self.get_cart();
        cart.remove(id);
        self.save(&cart);
        cart
    }

    /// Set the quantity for `id`, clamped to at least 1.
    ///
    /// Nothing is written when `id` is not in the cart.
    pub fn set_quantity(&mut self, id: &str, requested: i64) -> Cart {
        let mut cart = self.get_cart();
        if cart.set_quantity(id, requested) {
            self.save(&cart);
        }
        cart
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Cart {
        let cart = Cart::new();
        self.save(&cart);
        cart
    }

    /// Totals of the stored cart.
    #[must_use]
    pub fn totals(&self, catalog: &Catalog) -> CartTotals {
        self.get_cart().totals(catalog)
    }

    /// Badge count of the stored cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.get_cart().item_count()
    }

    fn save(&mut self, cart: &Cart) {
        self.store.write(keys::CART, cart);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono_royale_core::Price;

    use super::*;
    use crate::catalog::catalog;
    use crate::storage::MemoryStorage;

    fn store() -> LocalStore<MemoryStorage> {
        LocalStore::new(MemoryStorage::new())
    }

    #[test]
    fn test_starts_empty() {
        let mut store = store();
        let carts = CartService::new(&mut store);
        assert!(carts.get_cart().is_empty());
        assert_eq!(carts.item_count(), 0);
    }

    #[test]
    fn test_add_twice_then_totals() {
        let mut store = store();
        let mut carts = CartService::new(&mut store);
        let id = ProductId::new("rolex-submariner");

        carts.add_item(&id);
        carts.add_item(&id);

        assert_eq!(carts.item_count(), 2);
        assert_eq!(carts.get_cart().len(), 1);
        assert_eq!(carts.totals(catalog()).subtotal, Price::eur(27_800));
    }

    #[test]
    fn test_changes_survive_a_new_service() {
        let mut store = store();
        CartService::new(&mut store).add_item(&ProductId::new("rm-055"));

        let carts = CartService::new(&mut store);
        assert!(carts.get_cart().contains("rm-055"));
    }

    #[test]
    fn test_remove_then_get_never_contains_id() {
        let mut store = store();
        let mut carts = CartService::new(&mut store);
        let id = ProductId::new("patek-nautilus");
        carts.add_item(&id);
        carts.set_quantity("patek-nautilus", 7);

        carts.remove_item("patek-nautilus");
        assert!(!carts.get_cart().contains("patek-nautilus"));
    }

    #[test]
    fn test_set_quantity_clamps() {
        let mut store = store();
        let mut carts = CartService::new(&mut store);
        carts.add_item(&ProductId::new("rolex-gmt"));

        carts.set_quantity("rolex-gmt", 0);
        assert_eq!(carts.get_cart().line("rolex-gmt").unwrap().qty.get(), 1);
        carts.set_quantity("rolex-gmt", -5);
        assert_eq!(carts.get_cart().line("rolex-gmt").unwrap().qty.get(), 1);
    }

    #[test]
    fn test_set_quantity_absent_writes_nothing() {
        let mut store = store();
        CartService::new(&mut store).set_quantity("rolex-gmt", 3);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_clear() {
        let mut store = store();
        let mut carts = CartService::new(&mut store);
        carts.add_item(&ProductId::new("rolex-gmt"));
        carts.clear();
        assert!(carts.get_cart().is_empty());
        assert_eq!(
            store.storage().get_item(keys::CART).as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_corrupt_record_reads_as_empty() {
        let mut store = store();
        store
            .storage_mut()
            .set_item(keys::CART, "[{\"id\": 12}]".to_string());

        let mut carts = CartService::new(&mut store);
        assert!(carts.get_cart().is_empty());

        let cart = carts.add_item(&ProductId::new("rm-011"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_array_shaped_line_reads_as_empty() {
        let mut store = store();
        store
            .storage_mut()
            .set_item(keys::CART, r#"[["rolex-gmt", 3]]"#.to_string());
        assert!(CartService::new(&mut store).get_cart().is_empty());
    }
}
