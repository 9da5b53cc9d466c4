//! Handlers for the `/categories` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::error::CoreError;
use storefront_core::filter::{ProductFilter, ProductOrder};
use storefront_core::pagination::paginate;
use storefront_db::models::category::{Category, CreateCategory};
use storefront_db::repositories::{CategoryRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::query::{CategoryBrowseParams, PageParams, RatingParams, SalesParams};
use crate::response::{CategoryList, CategoryProductPage};
use crate::state::AppState;
use crate::upload::ImageUpload;

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /categories
///
/// All categories plus a total count.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CategoryList>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    let total = CategoryRepo::count(&state.pool).await?;
    Ok(Json(CategoryList {
        categories,
        page_name: "Categories",
        number_of_categories: total,
    }))
}

/// GET /categories/getitemsbycategory?category=&page=&limit=
///
/// Resolves the category by case-insensitive key substring, then lists
/// its products by exact key so a loose term never mixes categories.
pub async fn items_by_category(
    State(state): State<AppState>,
    Query(params): Query<CategoryBrowseParams>,
) -> AppResult<Json<CategoryProductPage>> {
    let term = params.category.as_deref().unwrap_or("").trim();
    if term.is_empty() {
        return Err(AppError::BadRequest(
            "Query parameter 'category' is required".into(),
        ));
    }

    let category = CategoryRepo::search_by_key(&state.pool, term)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundKey {
                entity: "Category",
                key: term.to_string(),
            })
        })?;

    let filter = ProductFilter::by_category(&category.category_id);
    category_page(&state, category, filter, &params.page).await
}

/// GET /categories/{key}/toprated?rating=&page=&limit=
///
/// Top-rated products within one category; the floors compose with the
/// category predicate by logical AND.
pub async fn top_rated_in_category(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<RatingParams>,
) -> AppResult<Json<CategoryProductPage>> {
    let category = find_category(&state, &key).await?;
    let filter = ProductFilter::by_category(&category.category_id).with_min_rating(params.floor());
    category_page(&state, category, filter, &params.page).await
}

/// GET /categories/{key}/topsales?sales=&page=&limit=
pub async fn top_sales_in_category(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(params): Query<SalesParams>,
) -> AppResult<Json<CategoryProductPage>> {
    let category = find_category(&state, &key).await?;
    let filter = ProductFilter::by_category(&category.category_id).with_min_sales(params.floor());
    category_page(&state, category, filter, &params.page).await
}

/// Exact-key category lookup, mapped to 404 when absent.
async fn find_category(state: &AppState, key: &str) -> AppResult<Category> {
    CategoryRepo::find_by_key(&state.pool, key)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundKey {
                entity: "Category",
                key: key.to_string(),
            })
        })
}

/// Count, window, and fetch one product page scoped to `category`.
async fn category_page(
    state: &AppState,
    category: Category,
    filter: ProductFilter,
    params: &PageParams,
) -> AppResult<Json<CategoryProductPage>> {
    let total = ProductRepo::count(&state.pool, &filter).await?;
    let window = paginate(total, params.page(), params.limit());
    let products = ProductRepo::list(
        &state.pool,
        &filter,
        ProductOrder::NewestFirst,
        window.limit,
        window.skip,
    )
    .await?;

    Ok(Json(CategoryProductPage {
        page_name: category.category_name.clone(),
        current_category: category,
        products,
        current_page: window.page,
        pages: window.page_count,
        number_of_products: total,
    }))
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// POST /categories
///
/// Multipart form: `category_name` and `category_id` text fields plus
/// optional `image` file parts.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Category>)> {
    let mut category_name: Option<String> = None;
    let mut category_id: Option<String> = None;
    let mut uploads: Vec<ImageUpload> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                uploads.push(ImageUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            "category_name" => {
                category_name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "category_id" => {
                category_id = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            // Unknown fields are ignored.
            _ => {}
        }
    }

    let mut input = CreateCategory {
        category_name: category_name.ok_or_else(|| {
            CoreError::Validation("Field 'category_name' is required".to_string())
        })?,
        category_id: category_id
            .ok_or_else(|| CoreError::Validation("Field 'category_id' is required".to_string()))?,
        image: Vec::new(),
    };
    input.validate_fields()?;

    // Category images are optional; an empty batch is a no-op.
    input.image = state.images.store_batch(uploads).await?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
