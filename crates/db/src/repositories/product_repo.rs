//! Repository for the `products` table.

use sqlx::PgPool;
use storefront_core::filter::{escape_like, ProductFilter, ProductOrder};
use storefront_core::types::DbId;

use crate::models::product::{CreateProduct, Product};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category, category_id, image, description, name, product_type, \
    color, price, stock, sales, ratings, reviews, created_at, updated_at";

/// Filter predicates shared by `list` and `count` so the page window and
/// the total are always computed over the same result set. A NULL bind
/// skips its predicate (absent filter fields do not narrow).
const FILTER_WHERE: &str = "($1::TEXT IS NULL OR category_id = $1) \
       AND ($2::TEXT IS NULL OR category_id ILIKE '%' || $2 || '%') \
       AND ($3::TEXT IS NULL OR name ILIKE '%' || $3 || '%') \
       AND ($4::DOUBLE PRECISION IS NULL OR ratings >= $4) \
       AND ($5::BIGINT IS NULL OR sales >= $5)";

/// Provides CRUD and filtered listing operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// `sales` and `ratings` default to 0, `reviews` to an empty list.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (category, category_id, image, description, name, product_type,
                 color, price, stock, sales, ratings, reviews)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9,
                     COALESCE($10, 0), COALESCE($11, 0), COALESCE($12, '[]'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.category)
            .bind(&input.category_id)
            .bind(&input.image)
            .bind(&input.description)
            .bind(&input.name)
            .bind(&input.product_type)
            .bind(&input.color)
            .bind(input.price)
            .bind(input.stock)
            .bind(input.sales)
            .bind(input.ratings)
            .bind(&input.reviews)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of products matching `filter`.
    ///
    /// `id` breaks creation-timestamp ties so pages are stable.
    pub async fn list(
        pool: &PgPool,
        filter: &ProductFilter,
        order: ProductOrder,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let order_sql = match order {
            ProductOrder::NewestFirst => "created_at DESC, id DESC",
            ProductOrder::OldestFirst => "created_at ASC, id ASC",
        };
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE {FILTER_WHERE}
             ORDER BY {order_sql}
             LIMIT $6 OFFSET $7"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&filter.category_key)
            .bind(filter.category_search.as_deref().map(escape_like))
            .bind(filter.name_search.as_deref().map(escape_like))
            .bind(filter.min_rating)
            .bind(filter.min_sales)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count products matching `filter`, with the same predicates as `list`.
    pub async fn count(pool: &PgPool, filter: &ProductFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM products WHERE {FILTER_WHERE}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.category_key)
            .bind(filter.category_search.as_deref().map(escape_like))
            .bind(filter.name_search.as_deref().map(escape_like))
            .bind(filter.min_rating)
            .bind(filter.min_sales)
            .fetch_one(pool)
            .await
    }

    /// Uniform random sample of up to `n` other products sharing a
    /// category key. The excluded id keeps a product out of its own
    /// similar-items rail.
    pub async fn sample_by_category(
        pool: &PgPool,
        category_key: &str,
        exclude_id: DbId,
        n: i64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE category_id = $1 AND id <> $2
             ORDER BY random()
             LIMIT $3"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(category_key)
            .bind(exclude_id)
            .bind(n)
            .fetch_all(pool)
            .await
    }
}
