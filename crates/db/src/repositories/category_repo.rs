//! Repository for the `categories` table.

use sqlx::PgPool;
use storefront_core::filter::escape_like;

use crate::models::category::{Category, CreateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_name, category_id, image, created_at, updated_at";

/// Provides CRUD and lookup operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (category_name, category_id, image)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.category_name)
            .bind(&input.category_id)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// List all categories, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Count all categories.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await
    }

    /// Look up a category by exact key.
    ///
    /// Keys are not unique; the most recently created row wins.
    pub async fn find_by_key(
        pool: &PgPool,
        category_key: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE category_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category_key)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a category by case-insensitive key substring.
    ///
    /// This is the explicit search operation; exact-key lookup is
    /// [`CategoryRepo::find_by_key`].
    pub async fn search_by_key(
        pool: &PgPool,
        term: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE category_id ILIKE '%' || $1 || '%'
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(escape_like(term))
            .fetch_optional(pool)
            .await
    }
}
