//! Product catalog and the storefront configuration that carries it.
//!
//! The catalog is immutable for the lifetime of the page. It is built once at
//! the root (see [`Storefront::seeded`]) and handed down through context and
//! props rather than living in a global.

use std::collections::HashSet;
use std::sync::Arc;

use dioxus::logger::tracing::error;
use thiserror::Error;

/// Category label for coffee.
pub const CATEGORY_COFFEE: &str = "Cà phê";
/// Category label for nuts & nutritional items.
pub const CATEGORY_NUTRITIONAL: &str = "Hạt dinh dưỡng";
/// Category label for spices.
pub const CATEGORY_SPICE: &str = "Gia vị";
/// Category label for honey.
pub const CATEGORY_HONEY: &str = "Mật ong";
/// Category label for fruit. Has no filter tab of its own.
pub const CATEGORY_FRUIT: &str = "Trái cây";
/// Category label for drinks. Has no filter tab of its own.
pub const CATEGORY_DRINK: &str = "Đồ uống";

/// One purchasable catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Whole đồng, no fractional subunit.
    pub price: u64,
    pub category: String,
    /// Nominally in `[0, 5]`; not validated.
    pub rating: f32,
    pub image: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u64,
        category: impl Into<String>,
        rating: f32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            rating,
            image: image.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(u32),
    #[error("product {0} has a zero price")]
    ZeroPrice(u32),
}

/// Ordered, immutable product list. Cloning shares the underlying storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog, enforcing unique ids and positive prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price == 0 {
                return Err(CatalogError::ZeroPrice(product.id));
            }
        }
        Ok(Self {
            products: products.into(),
        })
    }

    /// The six products the storefront ships with, validated like any other
    /// catalog.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::new(seed_products())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: Arc::from(Vec::new()),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Cà phê Robusta Buôn Ma Thuột",
            150_000,
            CATEGORY_COFFEE,
            5.0,
            "https://images.unsplash.com/photo-1610632380989-680fe40816c6?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ),
        Product::new(
            2,
            "Hạt Mắc ca Lâm Đồng Sấy Nứt",
            320_000,
            CATEGORY_NUTRITIONAL,
            5.0,
            "https://images.unsplash.com/photo-1533230635460-70f20967a5b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ),
        Product::new(
            3,
            "Hồ tiêu Đen Chư Sê",
            180_000,
            CATEGORY_SPICE,
            4.8,
            "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ),
        Product::new(
            4,
            "Mật ong Hoa Cà phê",
            250_000,
            CATEGORY_HONEY,
            4.9,
            "https://images.unsplash.com/photo-1587049352846-4a222e784d38?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ),
        Product::new(
            5,
            "Bơ Sáp Đắk Lắk (5kg)",
            120_000,
            CATEGORY_FRUIT,
            4.7,
            "https://images.unsplash.com/photo-1559205503-4d436c646092?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ),
        Product::new(
            6,
            "Ca cao nguyên chất",
            140_000,
            CATEGORY_DRINK,
            4.8,
            "https://images.unsplash.com/photo-1511381978503-e96b2801e958?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        ),
    ]
}

/// Contact block shown in the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Everything the page needs that is not UI chrome: brand, catalog, the
/// filter tabs, imagery and contact details.
#[derive(Debug, Clone, PartialEq)]
pub struct Storefront {
    /// Brand is rendered as `{brand_primary}{brand_accent}`, accent highlighted.
    pub brand_primary: String,
    pub brand_accent: String,
    pub catalog: Catalog,
    /// Categories that get a filter tab, after the implicit "all" tab.
    pub filter_categories: Vec<String>,
    /// Vertical offset (px) past which the navbar switches to its solid style.
    pub scroll_threshold: f64,
    pub hero_image: String,
    pub about_image: String,
    pub contact: ContactInfo,
}

impl Storefront {
    pub fn seeded() -> Self {
        Self {
            brand_primary: "TâyNguyên".to_string(),
            brand_accent: "Farm".to_string(),
            // A rejected catalog renders an empty grid rather than no page.
            catalog: Catalog::seeded().unwrap_or_else(|err| {
                error!("seeded catalog rejected: {err}");
                Catalog::default()
            }),
            filter_categories: [
                CATEGORY_COFFEE,
                CATEGORY_NUTRITIONAL,
                CATEGORY_SPICE,
                CATEGORY_HONEY,
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            scroll_threshold: crate::core::scroll::SCROLL_THRESHOLD_PX,
            hero_image: "https://images.unsplash.com/photo-1541336528065-8f1fdc435835?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80".to_string(),
            about_image: "https://images.unsplash.com/photo-1621996659490-327595d5c48b?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80".to_string(),
            contact: ContactInfo {
                address: "123 Đường Nguyễn Tất Thành, TP. Buôn Ma Thuột, Đắk Lắk".to_string(),
                phone: "0909 123 456".to_string(),
                email: "lienhe@taynguyenfarm.com".to_string(),
            },
        }
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_passes_validation() {
        let catalog = Catalog::seeded().expect("seed data is valid");
        let ids: Vec<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(catalog.iter().all(|p| p.price > 0));
    }

    #[test]
    fn storefront_carries_the_validated_seed() {
        let store = Storefront::seeded();
        assert_eq!(Ok(store.catalog), Catalog::seeded());
    }

    #[test]
    fn default_catalog_is_empty() {
        assert!(Catalog::default().is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let dup = vec![
            Product::new(7, "A", 1, CATEGORY_SPICE, 4.0, "a.jpg"),
            Product::new(7, "B", 2, CATEGORY_HONEY, 4.0, "b.jpg"),
        ];
        assert_eq!(Catalog::new(dup), Err(CatalogError::DuplicateId(7)));
    }

    #[test]
    fn zero_price_is_rejected() {
        let free = vec![Product::new(1, "A", 0, CATEGORY_SPICE, 4.0, "a.jpg")];
        assert_eq!(Catalog::new(free), Err(CatalogError::ZeroPrice(1)));
    }

    #[test]
    fn rating_is_not_validated() {
        let odd = vec![Product::new(1, "A", 10, CATEGORY_SPICE, 9.5, "a.jpg")];
        assert!(Catalog::new(odd).is_ok());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::seeded().expect("seed data is valid");
        assert_eq!(
            catalog.get(3).map(|p| p.name.as_str()),
            Some("Hồ tiêu Đen Chư Sê")
        );
        assert!(catalog.get(42).is_none());
    }

    #[test]
    fn storefront_tabs_exclude_fruit_and_drinks() {
        let store = Storefront::seeded();
        assert_eq!(store.filter_categories.len(), 4);
        assert!(!store.filter_categories.iter().any(|c| c == CATEGORY_FRUIT));
        assert!(!store.filter_categories.iter().any(|c| c == CATEGORY_DRINK));
    }
}
