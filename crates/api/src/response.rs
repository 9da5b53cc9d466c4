//! Typed response envelopes for the catalog endpoints.
//!
//! Wire field names follow the public API contract (`pageName`,
//! `currentPage`, ...). Use these types instead of ad-hoc
//! `serde_json::json!` so every listing endpoint reports the same shape.

use serde::Serialize;
use storefront_core::pagination::PageWindow;
use storefront_db::models::category::Category;
use storefront_db::models::product::Product;

/// One page of products.
#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    #[serde(rename = "pageName")]
    pub page_name: String,
    #[serde(rename = "currentPage")]
    pub current_page: i64,
    pub pages: i64,
    #[serde(rename = "numberOfProducts")]
    pub number_of_products: i64,
}

impl ProductPage {
    /// Assemble a page from a fetched slice, its window, and the total.
    pub fn new(page_name: &str, products: Vec<Product>, window: &PageWindow, total: i64) -> Self {
        Self {
            products,
            page_name: page_name.to_string(),
            current_page: window.page,
            pages: window.page_count,
            number_of_products: total,
        }
    }
}

/// One page of products scoped to a resolved category.
#[derive(Debug, Serialize)]
pub struct CategoryProductPage {
    #[serde(rename = "pageName")]
    pub page_name: String,
    #[serde(rename = "currentCategory")]
    pub current_category: Category,
    pub products: Vec<Product>,
    #[serde(rename = "currentPage")]
    pub current_page: i64,
    pub pages: i64,
    #[serde(rename = "numberOfProducts")]
    pub number_of_products: i64,
}

/// The full category listing.
#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub categories: Vec<Category>,
    #[serde(rename = "pageName")]
    pub page_name: &'static str,
    #[serde(rename = "numberOfCategories")]
    pub number_of_categories: i64,
}

/// Similar-product sample for a product detail rail.
#[derive(Debug, Serialize)]
pub struct SimilarProducts {
    pub products: Vec<Product>,
    #[serde(rename = "numberOfProducts")]
    pub number_of_products: usize,
}
