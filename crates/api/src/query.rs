//! Shared query parameter types for API handlers.
//!
//! Page, limit, and threshold values arrive as raw strings and are parsed
//! defensively: absent or malformed input falls back to the catalog
//! defaults instead of rejecting the request.

use serde::Deserialize;
use storefront_core::filter::{parse_rating_floor, parse_sales_floor};
use storefront_core::pagination::{parse_limit, parse_page};

/// Generic pagination parameters (`?page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageParams {
    /// Requested page, defaulting to 1.
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }

    /// Requested page size, defaulting to 100.
    pub fn limit(&self) -> i64 {
        parse_limit(self.limit.as_deref())
    }
}

/// Parameters for the name-search endpoint (`?name=&page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct NameSearchParams {
    pub name: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

/// Parameters for the top-rated listings (`?rating=&page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct RatingParams {
    pub rating: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

impl RatingParams {
    /// Rating floor, defaulting to 4 when absent or invalid.
    pub fn floor(&self) -> f64 {
        parse_rating_floor(self.rating.as_deref())
    }
}

/// Parameters for the top-sales listings (`?sales=&page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct SalesParams {
    pub sales: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}

impl SalesParams {
    /// Sales floor, defaulting to 100 when absent or invalid.
    pub fn floor(&self) -> i64 {
        parse_sales_floor(self.sales.as_deref())
    }
}

/// Parameters for the products-in-category browse (`?category=&page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct CategoryBrowseParams {
    pub category: Option<String>,
    #[serde(flatten)]
    pub page: PageParams,
}
