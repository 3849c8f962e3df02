//! Catalog store: an append-only, ordered list of products.
use crate::product::{NewProduct, Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Seed products bundled with the crate.
pub const DEFAULT_CATALOG_JSON: &str = include_str!("../data/products.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id {0} in catalog data")]
    DuplicateId(ProductId),
    #[error("no product ids left after {}", ProductId::MAX)]
    IdsExhausted,
}

/// Ordered product list. Records are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Build a catalog from already-identified products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or ids repeat.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// The six bundled tents.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data is corrupt.
    pub fn seeded() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG_JSON)
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Id the next appended product will receive: `max + 1`, or 1 when empty.
    /// `None` once the largest id is `ProductId::MAX`.
    #[must_use]
    pub fn next_id(&self) -> Option<ProductId> {
        self.products
            .iter()
            .map(|product| product.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
    }

    /// Append a product, assigning it a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IdsExhausted`] when no unused id is left; the
    /// catalog is not modified.
    pub fn add(&mut self, product: NewProduct) -> Result<Product, CatalogError> {
        let id = self.next_id().ok_or(CatalogError::IdsExhausted)?;
        let stored = product.with_id(id);
        self.products.push(stored.clone());
        Ok(stored)
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = CatalogError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Self::from_products(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price: "¥100".to_string(),
            image_url: String::new(),
            description: "d".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn seeded_catalog_has_six_products_in_order() {
        let catalog = Catalog::seeded().unwrap();
        let ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(catalog.get(3).unwrap().category, "Solo");
    }

    #[test]
    fn empty_catalog_starts_at_one() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.next_id(), Some(1));
        let added = catalog.add(draft("First", "Solo")).unwrap();
        assert_eq!(added.id, 1);
        assert_eq!(catalog.next_id(), Some(2));
    }

    #[test]
    fn ids_follow_the_maximum_not_the_length() {
        let mut catalog = Catalog::from_products(vec![
            draft("A", "Solo").with_id(10),
            draft("B", "Family").with_id(3),
        ])
        .unwrap();
        let before = catalog.products().to_vec();
        let added = catalog.add(draft("C", "Solo")).unwrap();
        assert_eq!(added.id, 11);
        assert_eq!(&catalog.products()[..2], before.as_slice());
        assert_eq!(catalog.products().last(), Some(&added));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::from_products(vec![
            draft("A", "Solo").with_id(2),
            draft("B", "Solo").with_id(2),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(2)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn deserializing_checks_duplicate_ids() {
        let json = r#"[
            {"id": 1, "name": "A", "price": "¥1", "imageUrl": "", "description": "", "category": "Solo"},
            {"id": 1, "name": "B", "price": "¥2", "imageUrl": "", "description": "", "category": "Solo"}
        ]"#;
        let err = serde_json::from_str::<Catalog>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate product id 1"));

        let seeded = Catalog::seeded().unwrap();
        let round_trip: Catalog =
            serde_json::from_str(&serde_json::to_string(&seeded).unwrap()).unwrap();
        assert_eq!(round_trip, seeded);
    }

    #[test]
    fn add_refuses_to_reuse_the_last_id() {
        let mut catalog = Catalog::from_products(vec![
            draft("Near", "Solo").with_id(ProductId::MAX - 1),
        ])
        .unwrap();
        let last = catalog.add(draft("Last", "Solo")).unwrap();
        assert_eq!(last.id, ProductId::MAX);
        assert_eq!(catalog.next_id(), None);

        let err = catalog.add(draft("Overflow", "Solo")).unwrap_err();
        assert!(matches!(err, CatalogError::IdsExhausted));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products().iter().filter(|p| p.id == ProductId::MAX).count(), 1);
    }
}
