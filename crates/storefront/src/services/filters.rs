//! Catalog filter state manager.

use crate::catalog::{Catalog, Product};
use crate::models::FilterState;
use crate::storage::{LocalStore, Storage, keys};

/// Whether `product` passes `filters`.
#[must_use]
pub fn matches(product: &Product, filters: &FilterState) -> bool {
    filters.matches(product)
}

/// Reads and replaces the visitor's catalog filter.
pub struct FilterService<'a, S> {
    store: &'a mut LocalStore<S>,
}

impl<'a, S: Storage> FilterService<'a, S> {
    pub const fn new(store: &'a mut LocalStore<S>) -> Self {
        Self { store }
    }

    /// The stored filter, or the empty filter.
    #[must_use]
    pub fn get_filters(&self) -> FilterState {
        self.store.read(keys::FILTERS, FilterState::default())
    }

    /// Replace the stored filter.
    pub fn set_filters(&mut self, filters: &FilterState) {
        self.store.write(keys::FILTERS, filters);
    }

    /// Reset to the empty filter.
    pub fn clear_filters(&mut self) {
        self.set_filters(&FilterState::default());
    }

    /// Constrain to a single brand, dropping any price range.
    pub fn quick_filter(&mut self, brand: &str) {
        self.set_filters(&FilterState::brand(brand));
    }

    /// Catalog products passing the stored filter, in catalog order.
    #[must_use]
    pub fn filtered_products<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Product> {
        let filters = self.get_filters();
        catalog
            .products()
            .iter()
            .filter(|product| matches(product, &filters))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::models::PriceBound;
    use crate::storage::MemoryStorage;

    fn ids<'c>(products: &[&'c Product]) -> Vec<&'c str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_returns_whole_catalog() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let filters = FilterService::new(&mut store);
        assert_eq!(filters.get_filters(), FilterState::default());
        assert_eq!(
            filters.filtered_products(catalog()).len(),
            catalog().products().len()
        );
    }

    #[test]
    fn test_rolex_up_to_15000() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut filters = FilterService::new(&mut store);
        filters.set_filters(&FilterState {
            brand: "Rolex".to_string(),
            min: PriceBound::empty(),
            max: 15_000.into(),
        });

        let found = filters.filtered_products(catalog());
        assert_eq!(ids(&found), vec!["rolex-submariner"]);
    }

    #[test]
    fn test_price_range_preserves_catalog_order() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut filters = FilterService::new(&mut store);
        filters.set_filters(&FilterState {
            brand: String::new(),
            min: "200000".into(),
            max: "280000".into(),
        });

        let found = filters.filtered_products(catalog());
        assert_eq!(ids(&found), vec!["rm-011", "rm-035", "rm-055", "rm-002-V2"]);
    }

    #[test]
    fn test_quick_filter_resets_prices() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut filters = FilterService::new(&mut store);
        filters.set_filters(&FilterState {
            brand: "Rolex".to_string(),
            min: "1".into(),
            max: "2".into(),
        });

        filters.quick_filter("Richard Mille");
        assert_eq!(filters.get_filters(), FilterState::brand("Richard Mille"));
        assert_eq!(filters.filtered_products(catalog()).len(), 5);
    }

    #[test]
    fn test_clear_filters() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut filters = FilterService::new(&mut store);
        filters.quick_filter("Rolex");
        filters.clear_filters();
        assert!(filters.get_filters().is_empty());
    }

    #[test]
    fn test_unknown_brand_yields_nothing() {
        let mut store = LocalStore::new(MemoryStorage::new());
        let mut filters = FilterService::new(&mut store);
        filters.quick_filter("Omega");
        assert!(filters.filtered_products(catalog()).is_empty());
    }

    #[test]
    fn test_corrupt_record_reads_as_empty_filter() {
        let mut store = LocalStore::new(MemoryStorage::new());
        store
            .storage_mut()
            .set_item(keys::FILTERS, "[\"Rolex\"]".to_string());
        let filters = FilterService::new(&mut store);
        assert_eq!(filters.get_filters(), FilterState::default());
    }
}
