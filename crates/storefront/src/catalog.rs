//! Catalog reference data.
//!
//! The catalog is fixed at compile time and built once per process. Nothing
//! mutates it at runtime; carts refer to products only by [`ProductId`].

use std::sync::LazyLock;

use chrono_royale_core::{Price, ProductId};

/// A watch in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Price,
    /// Image paths relative to the static root; never empty, first is the main image.
    pub images: Vec<String>,
}

impl Product {
    fn new(id: &str, name: &str, brand: &str, price: i64, images: &[&str]) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_owned(),
            brand: brand.to_owned(),
            price: Price::eur(price),
            images: images.iter().map(|&path| path.to_owned()).collect(),
        }
    }

    /// The thumbnail / primary image, or `""` when the product has none.
    #[must_use]
    pub fn main_image(&self) -> &str {
        self.images.first().map_or("", String::as_str)
    }
}

/// The immutable product list plus the curated "new collection".
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    new_collection: Vec<ProductId>,
}

impl Catalog {
    /// Build a catalog from products and the ids featured in the new collection.
    ///
    /// New-collection ids that are not in `products` are dropped.
    #[must_use]
    pub fn new(products: Vec<Product>, new_collection: Vec<ProductId>) -> Self {
        let new_collection = new_collection
            .into_iter()
            .filter(|id| products.iter().any(|p| &p.id == id))
            .collect();
        Self {
            products,
            new_collection,
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Whether `id` names a catalog product.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Distinct brands in order of first appearance.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        let mut brands: Vec<&str> = Vec::new();
        for product in &self.products {
            if !brands.contains(&product.brand.as_str()) {
                brands.push(&product.brand);
            }
        }
        brands
    }

    /// Products featured on the new-collection page, in curated order.
    #[must_use]
    pub fn new_collection(&self) -> Vec<&Product> {
        self.new_collection
            .iter()
            .filter_map(|id| self.get(id.as_str()))
            .collect()
    }
}

/// The store's catalog.
pub static CATALOG: LazyLock<Catalog> = LazyLock::new(standard_catalog);

/// Shared reference to [`CATALOG`].
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

fn standard_catalog() -> Catalog {
    const ROLEX: &str = "Rolex";
    const PATEK: &str = "Patek Philippe";
    const RICHARD_MILLE: &str = "Richard Mille";

    let products = vec![
        Product::new(
            "rolex-daytona",
            "Cosmograph Daytona",
            ROLEX,
            29_500,
            &["img/rolex-daytona.jpg"],
        ),
        Product::new(
            "rolex-submariner",
            "Submariner Date",
            ROLEX,
            13_900,
            &["img/rolex-submariner.jpg"],
        ),
        Product::new(
            "rolex-gmt",
            "GMT-Master II",
            ROLEX,
            15_800,
            &["img/rolex-gmt.jpg"],
        ),
        Product::new(
            "rolex-datejust-36",
            "Datejust 36",
            ROLEX,
            15_200,
            &["img/rolex-datejust-36.jpg"],
        ),
        Product::new(
            "patek-nautilus",
            "Nautilus",
            PATEK,
            98_000,
            &["img/patek-nautilus.jpg"],
        ),
        Product::new(
            "patek-aquanaut",
            "Aquanaut",
            PATEK,
            72_000,
            &["img/patek-aquanaut.jpg"],
        ),
        Product::new(
            "patek-grandcomp",
            "Grand Complications",
            PATEK,
            165_000,
            &["img/patek-grandcomp.jpg"],
        ),
        Product::new(
            "patek-perpetual-calendar",
            "Perpetual Calendar 5140J",
            PATEK,
            59_500,
            &["img/patek-perpetual-calendar.jpg"],
        ),
        Product::new(
            "patek-nautilus-zafiro",
            "Nautilus 7118/1451G-001",
            PATEK,
            505_115,
            &[
                "img/patek-nautilus-zafiro.jpg",
                "img/patek-nautilus-zafiro-2.jpg",
                "img/patek-nautilus-zafiro-3.jpg",
                "img/patek-nautilus-zafiro-4.jpg",
            ],
        ),
        Product::new(
            "patek-nautilus-rubi",
            "Nautilus 7118/1452G-001",
            PATEK,
            505_115,
            &[
                "img/patek-nautilus-rubi.jpg",
                "img/patek-nautilus-rubi-2.jpg",
                "img/patek-nautilus-rubi-3.jpg",
                "img/patek-nautilus-rubi-4.jpg",
            ],
        ),
        Product::new(
            "patek-nautilus-esmeralda",
            "Nautilus 7118/1453G-001",
            PATEK,
            568_151,
            &[
                "img/patek-nautilus-esmeralda.jpg",
                "img/patek-nautilus-esmeralda-2.jpg",
                "img/patek-nautilus-esmeralda-3.jpg",
                "img/patek-nautilus-esmeralda-4.jpg",
            ],
        ),
        Product::new("rm-011", "RM 011", RICHARD_MILLE, 245_000, &["img/rm-011.jpg"]),
        Product::new("rm-035", "RM 035", RICHARD_MILLE, 210_000, &["img/rm-035.jpg"]),
        Product::new("rm-055", "RM 055", RICHARD_MILLE, 275_000, &["img/rm-055.jpg"]),
        Product::new(
            "rm-35-03",
            "RM 35-03",
            RICHARD_MILLE,
            415_379,
            &["img/rm-35-03.jpg"],
        ),
        Product::new(
            "rm-002-V2",
            "RM 002 V2",
            RICHARD_MILLE,
            273_000,
            &["img/rm-002-V2.jpg"],
        ),
    ];

    let new_collection = [
        "patek-nautilus-zafiro",
        "patek-nautilus-rubi",
        "patek-nautilus-esmeralda",
    ]
    .into_iter()
    .map(ProductId::new)
    .collect();

    Catalog::new(products, new_collection)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = catalog().products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog().products().len());
    }

    #[test]
    fn test_every_product_has_positive_price_and_image() {
        for product in catalog().products() {
            assert!(product.price.amount.is_sign_positive(), "{}", product.id);
            assert!(!product.price.amount.is_zero(), "{}", product.id);
            assert!(!product.main_image().is_empty(), "{}", product.id);
        }
    }

    #[test]
    fn test_get_by_id() {
        let product = catalog().get("rolex-submariner").unwrap();
        assert_eq!(product.name, "Submariner Date");
        assert_eq!(product.price, Price::eur(13_900));
        assert!(catalog().get("rolex-explorer").is_none());
    }

    #[test]
    fn test_main_image_is_first() {
        let product = catalog().get("patek-nautilus-rubi").unwrap();
        assert_eq!(product.images.len(), 4);
        assert_eq!(product.main_image(), "img/patek-nautilus-rubi.jpg");
    }

    #[test]
    fn test_brands_in_catalog_order() {
        assert_eq!(
            catalog().brands(),
            vec!["Rolex", "Patek Philippe", "Richard Mille"]
        );
    }

    #[test]
    fn test_new_collection() {
        let ids: Vec<&str> = catalog()
            .new_collection()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "patek-nautilus-zafiro",
                "patek-nautilus-rubi",
                "patek-nautilus-esmeralda"
            ]
        );
    }

    #[test]
    fn test_new_collection_drops_unknown_ids() {
        let catalog = Catalog::new(
            vec![Product::new("a", "A", "X", 10, &["img/a.jpg"])],
            vec![ProductId::new("a"), ProductId::new("ghost")],
        );
        assert_eq!(catalog.new_collection().len(), 1);
    }

    #[test]
    fn test_main_image_empty_when_no_images() {
        let product = Product::new("a", "A", "X", 10, &[]);
        assert_eq!(product.main_image(), "");
    }
}
