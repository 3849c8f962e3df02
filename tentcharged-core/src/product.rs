//! Product records shown in the catalog.
use serde::{Deserialize, Serialize};

/// Identifier assigned by the catalog when a product is added.
pub type ProductId = u32;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Display price as entered, e.g. `¥1,299`. Never parsed for storage.
    pub price: String,
    /// Remote URL or an embedded `data:` URI for uploaded images
    pub image_url: String,
    pub description: String,
    pub category: String,
}

/// A product before the catalog has assigned it an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub description: String,
    pub category: String,
}

impl NewProduct {
    /// Attach an id, producing the stored record.
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            image_url: self.image_url,
            description: self.description,
            category: self.category,
        }
    }
}
