//! Integration tests for the catalog repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create and read-back round trips
//! - Filtered listing and counting (category, rating, sales, name search)
//! - Newest-first ordering and pagination windows
//! - Random category sampling for similar products

use sqlx::PgPool;
use storefront_core::filter::{ProductFilter, ProductOrder};
use storefront_core::pagination::paginate;
use storefront_db::models::category::CreateCategory;
use storefront_db::models::product::CreateProduct;
use storefront_db::repositories::{CategoryRepo, ProductRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, category_key: &str) -> CreateProduct {
    CreateProduct {
        category: "Toys".to_string(),
        category_id: category_key.to_string(),
        image: vec!["/media/placeholder.jpg".to_string()],
        description: "A sturdy toy for all ages".to_string(),
        name: name.to_string(),
        product_type: "Toys".to_string(),
        color: "red".to_string(),
        price: 19.99,
        stock: 5,
        sales: None,
        ratings: None,
        reviews: None,
    }
}

fn new_category(name: &str, key: &str) -> CreateCategory {
    CreateCategory {
        category_name: name.to_string(),
        category_id: key.to_string(),
        image: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn product_create_round_trips(pool: PgPool) {
    let mut input = new_product("Wooden Train", "toys-02");
    input.sales = Some(12);
    input.ratings = Some(4.5);
    input.reviews = Some(serde_json::json!(["great", "solid build"]));

    let created = ProductRepo::create(&pool, &input).await.unwrap();
    assert!(created.id > 0);

    let fetched = ProductRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("product should exist");

    assert_eq!(fetched.name, "Wooden Train");
    assert_eq!(fetched.category_id, "toys-02");
    assert_eq!(fetched.image, vec!["/media/placeholder.jpg".to_string()]);
    assert_eq!(fetched.price, 19.99);
    assert_eq!(fetched.stock, 5);
    assert_eq!(fetched.sales, 12);
    assert_eq!(fetched.ratings, 4.5);
    assert_eq!(fetched.reviews, serde_json::json!(["great", "solid build"]));
    assert_eq!(fetched.created_at, created.created_at);
}

#[sqlx::test]
async fn product_defaults_apply_on_create(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Plain Ball", "toys-02"))
        .await
        .unwrap();

    assert_eq!(created.sales, 0);
    assert_eq!(created.ratings, 0.0);
    assert_eq!(created.reviews, serde_json::json!([]));
}

#[sqlx::test]
async fn find_by_id_returns_none_for_unknown(pool: PgPool) {
    assert!(ProductRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
}

#[sqlx::test]
async fn list_is_newest_first(pool: PgPool) {
    let first = ProductRepo::create(&pool, &new_product("First", "toys-02"))
        .await
        .unwrap();
    let second = ProductRepo::create(&pool, &new_product("Second", "toys-02"))
        .await
        .unwrap();
    let third = ProductRepo::create(&pool, &new_product("Third", "toys-02"))
        .await
        .unwrap();

    let listed = ProductRepo::list(
        &pool,
        &ProductFilter::default(),
        ProductOrder::NewestFirst,
        100,
        0,
    )
    .await
    .unwrap();

    let ids: Vec<_> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);

    let oldest_first = ProductRepo::list(
        &pool,
        &ProductFilter::default(),
        ProductOrder::OldestFirst,
        100,
        0,
    )
    .await
    .unwrap();
    let ids: Vec<_> = oldest_first.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[sqlx::test]
async fn pagination_window_slices_the_listing(pool: PgPool) {
    for i in 1..=5 {
        ProductRepo::create(&pool, &new_product(&format!("Product {i}"), "toys-02"))
            .await
            .unwrap();
    }

    let filter = ProductFilter::default();
    let total = ProductRepo::count(&pool, &filter).await.unwrap();
    assert_eq!(total, 5);

    let window = paginate(total, 2, 2);
    assert_eq!(window.skip, 2);
    assert_eq!(window.page_count, 3);

    let page = ProductRepo::list(
        &pool,
        &filter,
        ProductOrder::NewestFirst,
        window.limit,
        window.skip,
    )
    .await
    .unwrap();

    // Newest first: page 2 of [5,4,3,2,1] is [3,2].
    let names: Vec<_> = page.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Product 3", "Product 2"]);
}

#[sqlx::test]
async fn category_substring_filter_matches_loosely(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Train", "toys-02"))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("Blender", "gadgets-01"))
        .await
        .unwrap();

    let matched = ProductRepo::list(
        &pool,
        &ProductFilter::category_search("toy"),
        ProductOrder::NewestFirst,
        100,
        0,
    )
    .await
    .unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].category_id, "toys-02");
}

#[sqlx::test]
async fn exact_category_key_does_not_overmatch(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Train", "toys-02"))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("Chest", "toys-02-deluxe"))
        .await
        .unwrap();

    let matched = ProductRepo::list(
        &pool,
        &ProductFilter::by_category("toys-02"),
        ProductOrder::NewestFirst,
        100,
        0,
    )
    .await
    .unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Train");
}

#[sqlx::test]
async fn empty_search_filter_matches_everything(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Train", "toys-02"))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("Blender", "gadgets-01"))
        .await
        .unwrap();

    // An empty term is dropped at construction: no narrowing.
    let filter = ProductFilter::name_search("   ");
    assert_eq!(ProductRepo::count(&pool, &filter).await.unwrap(), 2);
}

#[sqlx::test]
async fn name_search_is_case_insensitive_substring(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Brown Leather Chair", "furnitures-01"))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("Steel Stool", "furnitures-01"))
        .await
        .unwrap();

    let matched = ProductRepo::list(
        &pool,
        &ProductFilter::name_search("leather"),
        ProductOrder::NewestFirst,
        100,
        0,
    )
    .await
    .unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Brown Leather Chair");
}

#[sqlx::test]
async fn search_metacharacters_match_literally(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("100%_wool scarf", "apparel-01"))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("Cotton scarf", "apparel-01"))
        .await
        .unwrap();

    // A literal '%' in the term must not act as a wildcard.
    let filter = ProductFilter::name_search("100%_wool");
    assert_eq!(ProductRepo::count(&pool, &filter).await.unwrap(), 1);

    let none = ProductFilter::name_search("100%_cotton");
    assert_eq!(ProductRepo::count(&pool, &none).await.unwrap(), 0);
}

#[sqlx::test]
async fn rating_floor_is_inclusive(pool: PgPool) {
    let mut below = new_product("Nearly Great", "toys-02");
    below.ratings = Some(3.9);
    ProductRepo::create(&pool, &below).await.unwrap();

    let mut at = new_product("Great", "toys-02");
    at.ratings = Some(4.0);
    ProductRepo::create(&pool, &at).await.unwrap();

    let matched = ProductRepo::list(
        &pool,
        &ProductFilter::default().with_min_rating(4.0),
        ProductOrder::NewestFirst,
        100,
        0,
    )
    .await
    .unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Great");
}

#[sqlx::test]
async fn sales_floor_is_inclusive(pool: PgPool) {
    let mut slow = new_product("Slow Seller", "toys-02");
    slow.sales = Some(99);
    ProductRepo::create(&pool, &slow).await.unwrap();

    let mut hot = new_product("Hot Seller", "toys-02");
    hot.sales = Some(100);
    ProductRepo::create(&pool, &hot).await.unwrap();

    let filter = ProductFilter::default().with_min_sales(100);
    let matched = ProductRepo::list(&pool, &filter, ProductOrder::NewestFirst, 100, 0)
        .await
        .unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Hot Seller");
    assert_eq!(ProductRepo::count(&pool, &filter).await.unwrap(), 1);
}

#[sqlx::test]
async fn category_and_rating_filters_combine_with_and(pool: PgPool) {
    let mut in_cat_low = new_product("Low In Category", "toys-02");
    in_cat_low.ratings = Some(2.0);
    ProductRepo::create(&pool, &in_cat_low).await.unwrap();

    let mut in_cat_high = new_product("High In Category", "toys-02");
    in_cat_high.ratings = Some(4.8);
    ProductRepo::create(&pool, &in_cat_high).await.unwrap();

    let mut out_cat_high = new_product("High Elsewhere", "gadgets-01");
    out_cat_high.ratings = Some(5.0);
    ProductRepo::create(&pool, &out_cat_high).await.unwrap();

    let filter = ProductFilter::by_category("toys-02").with_min_rating(4.0);
    let matched = ProductRepo::list(&pool, &filter, ProductOrder::NewestFirst, 100, 0)
        .await
        .unwrap();

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "High In Category");
}

#[sqlx::test]
async fn sample_returns_bounded_in_category_set(pool: PgPool) {
    let source = ProductRepo::create(&pool, &new_product("Source", "toys-02"))
        .await
        .unwrap();
    for i in 1..=10 {
        ProductRepo::create(&pool, &new_product(&format!("Sibling {i}"), "toys-02"))
            .await
            .unwrap();
    }
    ProductRepo::create(&pool, &new_product("Outsider", "gadgets-01"))
        .await
        .unwrap();

    let sample = ProductRepo::sample_by_category(&pool, "toys-02", source.id, 4)
        .await
        .unwrap();

    assert_eq!(sample.len(), 4);
    assert!(sample.iter().all(|p| p.category_id == "toys-02"));
    assert!(sample.iter().all(|p| p.id != source.id));
}

#[sqlx::test]
async fn sample_with_few_siblings_returns_them_all(pool: PgPool) {
    let source = ProductRepo::create(&pool, &new_product("Source", "toys-02"))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("Only Sibling", "toys-02"))
        .await
        .unwrap();

    let sample = ProductRepo::sample_by_category(&pool, "toys-02", source.id, 4)
        .await
        .unwrap();

    assert_eq!(sample.len(), 1);
    assert_eq!(sample[0].name, "Only Sibling");
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn category_create_round_trips(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Toys", "toys-02"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.image, Vec::<String>::new());

    let fetched = CategoryRepo::find_by_key(&pool, "toys-02")
        .await
        .unwrap()
        .expect("category should exist");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.category_name, "Toys");
}

#[sqlx::test]
async fn category_exact_key_lookup_does_not_substring_match(pool: PgPool) {
    CategoryRepo::create(&pool, &new_category("Toys", "toys-02"))
        .await
        .unwrap();

    assert!(CategoryRepo::find_by_key(&pool, "toy")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn category_search_matches_key_substring(pool: PgPool) {
    CategoryRepo::create(&pool, &new_category("Toys", "toys-02"))
        .await
        .unwrap();
    CategoryRepo::create(&pool, &new_category("Gadgets", "gadgets-01"))
        .await
        .unwrap();

    let found = CategoryRepo::search_by_key(&pool, "TOY")
        .await
        .unwrap()
        .expect("substring search should resolve the category");
    assert_eq!(found.category_id, "toys-02");

    assert!(CategoryRepo::search_by_key(&pool, "books")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn category_list_and_count_agree(pool: PgPool) {
    CategoryRepo::create(&pool, &new_category("Toys", "toys-02"))
        .await
        .unwrap();
    CategoryRepo::create(&pool, &new_category("Gadgets", "gadgets-01"))
        .await
        .unwrap();

    let listed = CategoryRepo::list(&pool).await.unwrap();
    let total = CategoryRepo::count(&pool).await.unwrap();
    assert_eq!(listed.len() as i64, total);
    assert_eq!(total, 2);
}
