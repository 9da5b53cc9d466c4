//! Filter construction for product listings.
//!
//! Raw query parameters are turned into explicit predicates here, in core,
//! so the repository layer only ever sees sanitized terms and the API layer
//! never builds match patterns by hand.

/// Default rating floor for the top-rated listings.
pub const DEFAULT_RATING_FLOOR: f64 = 4.0;

/// Default sales floor for the top-sales listings.
pub const DEFAULT_SALES_FLOOR: i64 = 100;

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductOrder {
    /// Most recently created first. The catalog default.
    #[default]
    NewestFirst,
    /// Oldest first.
    OldestFirst,
}

/// Predicates over the product collection, combined with logical AND.
///
/// Absent fields do not narrow. Search terms are normalized at
/// construction: an empty or whitespace-only term becomes `None`, so an
/// empty parameter never turns into a match-everything pattern by
/// accident -- it matches everything by *not filtering*.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Exact match on `category_id`.
    pub category_key: Option<String>,
    /// Case-insensitive substring match on `category_id`.
    pub category_search: Option<String>,
    /// Case-insensitive substring match on `name`.
    pub name_search: Option<String>,
    /// Keep products with `ratings >=` this value.
    pub min_rating: Option<f64>,
    /// Keep products with `sales >=` this value.
    pub min_sales: Option<i64>,
}

impl ProductFilter {
    /// Filter by exact category key.
    pub fn by_category(key: impl Into<String>) -> Self {
        Self {
            category_key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Filter by case-insensitive name substring.
    pub fn name_search(term: &str) -> Self {
        Self {
            name_search: normalize_term(term),
            ..Self::default()
        }
    }

    /// Filter by case-insensitive category-key substring.
    pub fn category_search(term: &str) -> Self {
        Self {
            category_search: normalize_term(term),
            ..Self::default()
        }
    }

    /// Add a rating floor (`ratings >= floor`).
    pub fn with_min_rating(mut self, floor: f64) -> Self {
        self.min_rating = Some(floor);
        self
    }

    /// Add a sales floor (`sales >= floor`).
    pub fn with_min_sales(mut self, floor: i64) -> Self {
        self.min_sales = Some(floor);
        self
    }
}

/// Trim a search term, dropping it entirely when nothing remains.
fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a raw `rating` query value.
///
/// Absent or invalid input falls back to [`DEFAULT_RATING_FLOOR`].
pub fn parse_rating_floor(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_RATING_FLOOR)
}

/// Parse a raw `sales` query value.
///
/// Absent or invalid input falls back to [`DEFAULT_SALES_FLOOR`].
pub fn parse_sales_floor(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_SALES_FLOOR)
}

/// Escape `LIKE`/`ILIKE` metacharacters so user input matches literally.
///
/// PostgreSQL treats backslash as the escape character when no `ESCAPE`
/// clause is given, which is what the repositories rely on.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
