//! Route tree assembly.

pub mod category;
pub mod health;
pub mod product;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /product       listing, search, detail, similar items, creation
/// /categories    listing, category browse, creation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/product", product::router())
        .nest("/categories", category::router())
}
