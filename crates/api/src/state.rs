use std::sync::Arc;

use crate::config::ServerConfig;
use crate::upload::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: storefront_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Upload adapter turning multipart image payloads into durable URIs.
    pub images: Arc<dyn ImageStore>,
}
