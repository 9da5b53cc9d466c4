//! Route definitions for products.

use axum::routing::get;
use axum::Router;

use crate::handlers::product;
use crate::state::AppState;

/// Routes mounted at `/product`.
///
/// ```text
/// POST   /                          -> create
/// GET    /                          -> list
/// GET    /{id}                      -> get_by_id
/// GET    /{id}/similar              -> similar
/// GET    /getproductbyname/search   -> search
/// GET    /toprated                  -> top_rated
/// GET    /topsales                  -> top_sales
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(product::list).post(product::create))
        .route("/{id}", get(product::get_by_id))
        .route("/{id}/similar", get(product::similar))
        .route("/getproductbyname/search", get(product::search))
        .route("/toprated", get(product::top_rated))
        .route("/topsales", get(product::top_sales))
}
