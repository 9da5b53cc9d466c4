//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::catalog;
use storefront_core::error::CoreError;
use storefront_core::types::{DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    /// Category display name.
    pub category: String,
    /// Denormalized join key to `categories.category_id`.
    pub category_id: String,
    /// Durable image URIs; at least one at creation.
    pub image: Vec<String>,
    pub description: String,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub color: String,
    pub price: f64,
    pub stock: i64,
    pub sales: i64,
    pub ratings: f64,
    /// Free-form ordered review list.
    pub reviews: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
///
/// `image` starts empty and is filled with the upload adapter's durable
/// URIs before insertion.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub category: String,
    pub category_id: String,
    pub image: Vec<String>,
    pub description: String,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub color: String,
    pub price: f64,
    pub stock: i64,
    /// Defaults to 0 if omitted.
    pub sales: Option<i64>,
    /// Defaults to 0 if omitted.
    pub ratings: Option<f64>,
    /// Defaults to an empty list if omitted.
    pub reviews: Option<serde_json::Value>,
}

impl CreateProduct {
    /// Check the text-field creation invariants.
    ///
    /// Stops at the first violated field. Image presence is checked
    /// separately, before the upload adapter runs.
    pub fn validate_fields(&self) -> Result<(), CoreError> {
        catalog::validate_product_fields(
            &self.name,
            &self.description,
            &self.product_type,
            &self.color,
            &self.category,
            &self.category_id,
        )
    }
}
