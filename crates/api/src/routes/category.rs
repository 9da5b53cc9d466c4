//! Route definitions for categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// POST   /                      -> create
/// GET    /                      -> list
/// GET    /getitemsbycategory    -> items_by_category
/// GET    /{key}/toprated        -> top_rated_in_category
/// GET    /{key}/topsales        -> top_sales_in_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list).post(category::create))
        .route("/getitemsbycategory", get(category::items_by_category))
        .route("/{key}/toprated", get(category::top_rated_in_category))
        .route("/{key}/topsales", get(category::top_sales_in_category))
}
