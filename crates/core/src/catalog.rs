//! Catalog field validation.
//!
//! Creation invariants for products and categories. Checks run before any
//! upload or persistence attempt and stop at the first violation, naming
//! the offending field so the client can fix its input.

use crate::error::CoreError;

/// Minimum length for a product name.
pub const MIN_NAME_LEN: usize = 4;

/// Minimum length for a product description.
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Minimum length for a product type.
pub const MIN_TYPE_LEN: usize = 4;

/// Minimum length for a product color.
pub const MIN_COLOR_LEN: usize = 3;

/// Minimum length for a category name or category key.
pub const MIN_CATEGORY_LEN: usize = 2;

/// Ensure `value` has at least `min` characters after trimming.
fn require_min(field: &str, value: &str, min: usize) -> Result<(), CoreError> {
    if value.trim().chars().count() < min {
        return Err(CoreError::Validation(format!(
            "Field '{field}' must be at least {min} characters"
        )));
    }
    Ok(())
}

/// Validate the required text fields of a new product.
pub fn validate_product_fields(
    name: &str,
    description: &str,
    product_type: &str,
    color: &str,
    category: &str,
    category_key: &str,
) -> Result<(), CoreError> {
    require_min("name", name, MIN_NAME_LEN)?;
    require_min("description", description, MIN_DESCRIPTION_LEN)?;
    require_min("type", product_type, MIN_TYPE_LEN)?;
    require_min("color", color, MIN_COLOR_LEN)?;
    require_min("category", category, MIN_CATEGORY_LEN)?;
    require_min("category_id", category_key, MIN_CATEGORY_LEN)?;
    Ok(())
}

/// Validate the required fields of a new category.
pub fn validate_category_fields(
    category_name: &str,
    category_key: &str,
) -> Result<(), CoreError> {
    require_min("category_name", category_name, MIN_CATEGORY_LEN)?;
    require_min("category_id", category_key, MIN_CATEGORY_LEN)?;
    Ok(())
}

/// A product must carry at least one image URI at creation.
pub fn require_images(count: usize) -> Result<(), CoreError> {
    if count == 0 {
        return Err(CoreError::Validation(
            "Field 'image' requires at least one uploaded image".into(),
        ));
    }
    Ok(())
}
