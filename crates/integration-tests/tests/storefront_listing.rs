//! Integration tests for the product listing endpoint.
//!
//! Drives `GET /api/products` over the fixture catalog described in the
//! crate docs.

use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::Value;
use vitrine_core::{Facet, PriceRange, SortKey};
use vitrine_integration_tests::{fixture_app, fixture_products, get, get_json, ids};
use vitrine_storefront::routes::products::ListingResponse;

async fn listing(uri: &str) -> ListingResponse {
    get_json(fixture_app(), uri, StatusCode::OK).await
}

// ============================================================================
// Defaults
// ============================================================================

#[tokio::test]
async fn test_no_filters_returns_catalog_in_fetch_order() {
    let response = listing("/api/products").await;

    assert_eq!(response.products, fixture_products());
    assert_eq!(response.total, 5);
    assert_eq!(response.page, 1);
    assert_eq!(response.per_page, 24);
    assert_eq!(response.total_pages, 1);
    assert_eq!(response.active_filter_count, 0);
    assert_eq!(response.selection.sort, SortKey::Featured);
    assert_eq!(
        response.selection.price_range,
        PriceRange::new(Decimal::from(25), Decimal::from(100))
    );
}

// ============================================================================
// Facets
// ============================================================================

#[tokio::test]
async fn test_in_stock_only() {
    let response = listing("/api/products?in_stock=true").await;
    assert_eq!(ids(&response.products), ["1", "3", "4", "5"]);
    assert_eq!(response.active_filter_count, 1);
}

#[tokio::test]
async fn test_on_sale_only() {
    let response = listing("/api/products?on_sale=1").await;
    assert_eq!(ids(&response.products), ["2", "3"]);
}

#[tokio::test]
async fn test_category_and_size_must_both_match() {
    let response = listing("/api/products?categories=men&sizes=L").await;
    assert_eq!(ids(&response.products), ["3"]);

    let response = listing("/api/products?categories=men&sizes=S").await;
    assert!(response.products.is_empty());
    assert_eq!(response.total, 0);
    assert_eq!(response.total_pages, 1);
}

#[tokio::test]
async fn test_size_matches_on_any_overlap() {
    let response = listing("/api/products?sizes=M,L").await;
    assert_eq!(ids(&response.products), ["1", "3", "5"]);
    assert_eq!(response.selection.selected_count(Facet::Size), 2);
}

#[tokio::test]
async fn test_product_without_sizes_never_matches_size_filter() {
    let response = listing("/api/products?sizes=S,M,L,XL").await;
    assert!(!ids(&response.products).contains(&"4"));
}

#[tokio::test]
async fn test_subcategory_filter() {
    let response = listing("/api/products?subcategories=shirts").await;
    assert_eq!(ids(&response.products), ["1", "5"]);

    let response = listing("/api/products?categories=men&subcategories=dresses").await;
    assert!(response.products.is_empty());
}

#[tokio::test]
async fn test_color_filter() {
    let response = listing("/api/products?colors=red").await;
    assert_eq!(ids(&response.products), ["2", "4"]);
}

#[tokio::test]
async fn test_price_range_is_inclusive() {
    let response = listing("/api/products?min_price=50&max_price=80").await;
    assert_eq!(ids(&response.products), ["2", "3", "5"]);
}

#[tokio::test]
async fn test_malformed_price_bounds_are_coerced() {
    let response = listing("/api/products?min_price=abc&max_price=9999").await;

    assert_eq!(response.total, 5);
    assert_eq!(
        response.selection.price_range,
        PriceRange::new(Decimal::from(25), Decimal::from(100))
    );
}

#[tokio::test]
async fn test_huge_price_bounds_snap_to_their_own_side() {
    let response = listing("/api/products?min_price=1e40").await;
    assert_eq!(ids(&response.products), ["1"]);
    assert_eq!(
        response.selection.price_range,
        PriceRange::new(Decimal::from(100), Decimal::from(100))
    );

    let response = listing("/api/products?max_price=-1e40").await;
    assert_eq!(ids(&response.products), ["4"]);
}

#[tokio::test]
async fn test_active_filter_count() {
    let response = listing("/api/products?categories=men&sizes=M,L&in_stock=true").await;

    assert_eq!(response.active_filter_count, 4);
    assert_eq!(ids(&response.products), ["1", "3"]);
}

#[tokio::test]
async fn test_price_range_not_counted_as_active_filter() {
    let response = listing("/api/products?min_price=30&max_price=70").await;
    assert_eq!(response.active_filter_count, 0);
}

// ============================================================================
// Sorting
// ============================================================================

#[tokio::test]
async fn test_price_sorts_are_reverses() {
    let ascending = listing("/api/products?sort=price-asc").await;
    let descending = listing("/api/products?sort=price-desc").await;

    assert_eq!(ids(&ascending.products), ["4", "2", "5", "3", "1"]);

    let mut reversed = descending.products;
    reversed.reverse();
    assert_eq!(ascending.products, reversed);
}

#[tokio::test]
async fn test_rating_sort_is_stable() {
    let response = listing("/api/products?sort=rating").await;
    // 1 and 3 share 4.2 and keep fetch order
    assert_eq!(ids(&response.products), ["5", "2", "1", "3", "4"]);
}

#[tokio::test]
async fn test_featured_and_newest_keep_fetch_order() {
    let featured = listing("/api/products?sort=featured").await;
    let newest = listing("/api/products?sort=newest").await;

    assert_eq!(ids(&featured.products), ["1", "2", "3", "4", "5"]);
    assert_eq!(featured.products, newest.products);
    assert_eq!(newest.selection.sort, SortKey::Newest);
}

#[tokio::test]
async fn test_unknown_sort_falls_back_to_featured() {
    let response = listing("/api/products?sort=cheapest").await;
    assert_eq!(response.selection.sort, SortKey::Featured);
    assert_eq!(ids(&response.products), ["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn test_filters_then_sorts() {
    let response = listing("/api/products?categories=women&sort=price-desc").await;
    assert_eq!(ids(&response.products), ["5", "2"]);
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let uri = "/api/products?colors=white,blue&sort=rating";
    let first = listing(uri).await;
    let second = listing(uri).await;

    assert_eq!(first.products, second.products);
    assert_eq!(ids(&first.products), ["5", "1", "3"]);
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_pagination() {
    let response = listing("/api/products?per_page=2&page=2").await;

    assert_eq!(ids(&response.products), ["3", "4"]);
    assert_eq!(response.total, 5);
    assert_eq!(response.total_pages, 3);
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let response = listing("/api/products?per_page=2&page=9").await;

    assert!(response.products.is_empty());
    assert_eq!(response.total, 5);
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_duplicate_parameter_is_bad_request() {
    let body: Value = get_json(
        fixture_app(),
        "/api/products?sort=rating&sort=price-asc",
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert!(body["error"].as_str().is_some_and(|e| e.starts_with("Bad request")));
}

#[tokio::test]
async fn test_listing_json_shape() {
    let response = get(fixture_app(), "/api/products?categories=women").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body: Value = serde_json::from_slice(&bytes).unwrap_or_default();

    assert_eq!(body["active_filter_count"], 1);
    assert_eq!(body["products"][0]["reviewCount"], 12);
    assert_eq!(body["products"][0]["originalPrice"], "62.5");
    assert_eq!(body["selection"]["facets"]["category"][0], "women");
}
