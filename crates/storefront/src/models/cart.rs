//! Cart record.
//!
//! Persisted under [`crate::storage::keys::CART`] as an ordered JSON list of
//! `{"id": string, "qty": integer}` objects.

use chrono_royale_core::{Price, ProductId, Quantity};
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{Catalog, Product};

/// One product/quantity pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: ProductId,
    /// Missing quantities read as 0 and contribute nothing.
    pub qty: Quantity,
}

/// Stored shape of a line.
#[derive(Deserialize)]
struct StoredLine {
    id: ProductId,
    #[serde(default)]
    qty: Quantity,
}

impl<'de> Deserialize<'de> for CartLine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let StoredLine { id, qty } = super::from_object(deserializer)?;
        Ok(Self { id, qty })
    }
}

impl CartLine {
    /// A fresh line holding one unit.
    #[must_use]
    pub const fn one(id: ProductId) -> Self {
        Self {
            id,
            qty: Quantity::ONE,
        }
    }
}

/// Ordered cart lines, unique by product id.
///
/// Duplicate ids in stored data are merged on read by summing quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Money totals for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartTotals {
    pub subtotal: Price,
    /// No tax or shipping is modeled; always equal to `subtotal`.
    pub total: Price,
}

/// A cart line joined with its catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLine<'c> {
    pub product: &'c Product,
    pub qty: Quantity,
}

impl ResolvedLine<'_> {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.qty)
    }
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.line(id).is_some()
    }

    /// Increment the line for `id`, or append a new line with quantity 1.
    pub fn add(&mut self, id: &ProductId) {
        match self.lines.iter_mut().find(|line| &line.id == id) {
            Some(line) => line.qty = line.qty.incremented(),
            None => self.lines.push(CartLine::one(id.clone())),
        }
    }

    /// Drop the line for `id` whatever its quantity. Returns whether a line was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// Set the quantity for `id`, clamped to at least 1.
    ///
    /// Returns `false` without changing anything if `id` is not in the cart.
    pub fn set_quantity(&mut self, id: &str, requested: i64) -> bool {
        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.qty = Quantity::clamped(requested);
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all quantities, for the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.qty.get())).sum()
    }

    /// Lines whose product exists in `catalog`, in cart order.
    #[must_use]
    pub fn resolved_lines<'c>(&self, catalog: &'c Catalog) -> Vec<ResolvedLine<'c>> {
        self.lines
            .iter()
            .filter_map(|line| {
                catalog.get(line.id.as_str()).map(|product| ResolvedLine {
                    product,
                    qty: line.qty,
                })
            })
            .collect()
    }

    /// Subtotal and total over resolvable lines; dangling lines add nothing.
    #[must_use]
    pub fn totals(&self, catalog: &Catalog) -> CartTotals {
        let subtotal: Price = self
            .resolved_lines(catalog)
            .iter()
            .map(ResolvedLine::line_total)
            .sum();
        CartTotals {
            subtotal,
            total: subtotal,
        }
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(stored: Vec<CartLine>) -> Self {
        let mut lines: Vec<CartLine> = Vec::with_capacity(stored.len());
        for line in stored {
            match lines.iter_mut().find(|existing| existing.id == line.id) {
                Some(existing) => existing.qty = existing.qty.saturating_add(line.qty),
                None => lines.push(line),
            }
        }
        Self { lines }
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
