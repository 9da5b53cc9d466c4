//! Handlers for the `/product` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use storefront_core::catalog;
use storefront_core::error::CoreError;
use storefront_core::filter::{ProductFilter, ProductOrder};
use storefront_core::pagination::paginate;
use storefront_core::types::DbId;
use storefront_db::models::product::{CreateProduct, Product};
use storefront_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::query::{NameSearchParams, PageParams, RatingParams, SalesParams};
use crate::response::{ProductPage, SimilarProducts};
use crate::state::AppState;
use crate::upload::ImageUpload;

/// Number of products returned by the similar-items sample.
const SIMILAR_SAMPLE_SIZE: i64 = 4;

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

/// GET /product?page=&limit=
///
/// All products, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ProductPage>> {
    page_response("Products", &state, ProductFilter::default(), &params).await
}

/// GET /product/getproductbyname/search?name=&page=&limit=
///
/// Case-insensitive substring search. An empty or absent term does not
/// narrow the result set.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<NameSearchParams>,
) -> AppResult<Json<ProductPage>> {
    let filter = ProductFilter::name_search(params.name.as_deref().unwrap_or(""));
    page_response("Search Results", &state, filter, &params.page).await
}

/// GET /product/toprated?rating=&page=&limit=
pub async fn top_rated(
    State(state): State<AppState>,
    Query(params): Query<RatingParams>,
) -> AppResult<Json<ProductPage>> {
    let filter = ProductFilter::default().with_min_rating(params.floor());
    page_response("Top Rated", &state, filter, &params.page).await
}

/// GET /product/topsales?sales=&page=&limit=
pub async fn top_sales(
    State(state): State<AppState>,
    Query(params): Query<SalesParams>,
) -> AppResult<Json<ProductPage>> {
    let filter = ProductFilter::default().with_min_sales(params.floor());
    page_response("Top Sales", &state, filter, &params.page).await
}

/// Count, window, and fetch one page for `filter`.
async fn page_response(
    page_name: &str,
    state: &AppState,
    filter: ProductFilter,
    params: &PageParams,
) -> AppResult<Json<ProductPage>> {
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
    Ok(Json(ProductPage::new(page_name, products, &window, total)))
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

/// GET /product/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(product))
}

/// GET /product/{id}/similar
///
/// Random sample of up to four other products sharing this product's
/// category key. The product itself is never part of the sample.
pub async fn similar(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SimilarProducts>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    let products = ProductRepo::sample_by_category(
        &state.pool,
        &product.category_id,
        product.id,
        SIMILAR_SAMPLE_SIZE,
    )
    .await?;

    Ok(Json(SimilarProducts {
        number_of_products: products.len(),
        products,
    }))
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// POST /product
///
/// Multipart form: text fields per the product model plus one or more
/// `image` file parts. Field validation runs before the upload adapter
/// and the insert, so nothing is written on bad input.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Product>)> {
    let mut form = ProductForm::default();
    let mut uploads: Vec<ImageUpload> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            uploads.push(ImageUpload {
                file_name,
                bytes: bytes.to_vec(),
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            form.set(&name, value);
        }
    }

    let mut input = form.into_create()?;
    input.validate_fields()?;
    catalog::require_images(uploads.len())?;

    input.image = state.images.store_batch(uploads).await?;

    let product = ProductRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Accumulates multipart text fields until the form is complete.
#[derive(Debug, Default)]
struct ProductForm {
    category: Option<String>,
    category_id: Option<String>,
    description: Option<String>,
    name: Option<String>,
    product_type: Option<String>,
    color: Option<String>,
    price: Option<String>,
    stock: Option<String>,
    sales: Option<String>,
    ratings: Option<String>,
    reviews: Option<String>,
}

impl ProductForm {
    fn set(&mut self, field: &str, value: String) {
        match field {
            "category" => self.category = Some(value),
            "category_id" => self.category_id = Some(value),
            "description" => self.description = Some(value),
            "name" => self.name = Some(value),
            "type" => self.product_type = Some(value),
            "color" => self.color = Some(value),
            "price" => self.price = Some(value),
            "stock" => self.stock = Some(value),
            "sales" => self.sales = Some(value),
            "ratings" => self.ratings = Some(value),
            "reviews" => self.reviews = Some(value),
            // Unknown fields are ignored.
            _ => {}
        }
    }

    /// Assemble the create DTO, reporting the first missing or malformed
    /// field.
    fn into_create(self) -> Result<CreateProduct, CoreError> {
        let reviews = match self.reviews {
            Some(raw) => {
                let value: serde_json::Value = serde_json::from_str(&raw).map_err(|_| {
                    CoreError::Validation("Field 'reviews' must be a JSON array".into())
                })?;
                if !value.is_array() {
                    return Err(CoreError::Validation(
                        "Field 'reviews' must be a JSON array".into(),
                    ));
                }
                Some(value)
            }
            None => None,
        };

        Ok(CreateProduct {
            category: require(self.category, "category")?,
            category_id: require(self.category_id, "category_id")?,
            image: Vec::new(),
            description: require(self.description, "description")?,
            name: require(self.name, "name")?,
            product_type: require(self.product_type, "type")?,
            color: require(self.color, "color")?,
            price: require_parsed(self.price, "price")?,
            stock: require_parsed(self.stock, "stock")?,
            sales: parse_optional(self.sales, "sales")?,
            ratings: parse_optional(self.ratings, "ratings")?,
            reviews,
        })
    }
}

fn require(value: Option<String>, field: &str) -> Result<String, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("Field '{field}' is required")))
}

fn require_parsed<T: std::str::FromStr>(
    value: Option<String>,
    field: &str,
) -> Result<T, CoreError> {
    require(value, field)?
        .trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("Field '{field}' must be numeric")))
}

fn parse_optional<T: std::str::FromStr>(
    value: Option<String>,
    field: &str,
) -> Result<Option<T>, CoreError> {
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CoreError::Validation(format!("Field '{field}' must be numeric"))),
        None => Ok(None),
    }
}
