//! Product entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted product row.
///
/// `id` is assigned by the store on insert and is always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Server-assigned primary key.
    pub id: i64,
    /// Product name, never empty.
    pub name: String,
    /// Unit price, always greater than zero.
    pub price: f64,
}

impl Product {
    /// Apply a partial update in place.
    pub fn apply(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

/// Data required to insert or fully replace a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

impl NewProduct {
    /// Materialize the row this data becomes once the store assigns `id`.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
        }
    }
}

/// A partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement price.
    pub price: Option<f64>,
}

impl ProductPatch {
    /// Whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}
