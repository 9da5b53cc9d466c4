//! Category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::catalog;
use storefront_core::error::CoreError;
use storefront_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub category_name: String,
    /// String key products reference via their own `category_id`.
    pub category_id: String,
    /// Optional image URIs.
    pub image: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub category_name: String,
    pub category_id: String,
    /// Images are optional for categories.
    pub image: Vec<String>,
}

impl CreateCategory {
    /// Check the creation invariants, stopping at the first violated field.
    pub fn validate_fields(&self) -> Result<(), CoreError> {
        catalog::validate_category_fields(&self.category_name, &self.category_id)
    }
}
