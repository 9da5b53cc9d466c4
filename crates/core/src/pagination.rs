//! Pagination math shared by the store and API layers.
//!
//! Lives in `core` (zero internal deps) so repository code and HTTP
//! handlers agree on one window arithmetic instead of re-deriving it per
//! endpoint.

/// Default page number when the query parameter is absent or malformed.
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size when the query parameter is absent or malformed.
pub const DEFAULT_LIMIT: i64 = 100;

/// A computed pagination window over a known total count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Requested page number. May be below 1; only `skip` is clamped.
    pub page: i64,
    /// Page size.
    pub limit: i64,
    /// Rows to skip: `limit * (page - 1)`, never negative.
    pub skip: i64,
    /// Total pages: `ceil(total_count / limit)`, 0 when `limit` is 0.
    pub page_count: i64,
    /// Whether a further page exists.
    pub has_next: bool,
    /// Whether a previous page exists.
    pub has_previous: bool,
}

/// Compute the pagination window for `total_count` rows.
///
/// Pure function with no I/O, so it is testable independently of the
/// entity store.
pub fn paginate(total_count: i64, page: i64, limit: i64) -> PageWindow {
    // Saturating math: query parameters are attacker-controlled integers.
    let skip = limit.saturating_mul(page.saturating_sub(1)).max(0);
    let page_count = if limit <= 0 {
        0
    } else {
        total_count / limit + i64::from(total_count % limit != 0)
    };

    PageWindow {
        page,
        limit,
        skip,
        page_count,
        has_next: page.saturating_mul(limit) < total_count,
        has_previous: page > 1,
    }
}

/// Parse a raw `page` query value.
///
/// Absent or non-numeric input falls back to [`DEFAULT_PAGE`]. Values
/// below 1 are kept; [`paginate`] clamps the resulting skip.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Parse a raw `limit` query value.
///
/// Absent, non-numeric, or negative input falls back to [`DEFAULT_LIMIT`].
/// An explicit 0 is allowed and yields an empty window.
pub fn parse_limit(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|l| *l >= 0)
        .unwrap_or(DEFAULT_LIMIT)
}
