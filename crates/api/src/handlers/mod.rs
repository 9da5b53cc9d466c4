//! Request handlers for the catalog resources.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `storefront_db`
//! and map errors via [`AppError`](crate::error::AppError).

pub mod category;
pub mod product;
