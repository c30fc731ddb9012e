//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! The storefront router is driven in-process with `tower::ServiceExt`, so no
//! server or external service is needed.
//!
//! # Test Categories
//!
//! - `storefront_listing` - Listing endpoint filters, sorting and pagination
//! - `storefront_health` - Health, readiness, facets and middleware headers

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use vitrine_core::ProductSummary;
use vitrine_storefront::catalog::Catalog;
use vitrine_storefront::config::StorefrontConfig;
use vitrine_storefront::state::AppState;

/// Response bodies larger than this are a test failure.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A small catalog in newest-first fetch order.
///
/// | id | category | sub | sizes | colors | price | stock | discount | rating |
/// |----|----------|-----|-------|--------|-------|-------|----------|--------|
/// | 1  | men | shirts | M | white | 100 | 5 | - | 4.2 |
/// | 2  | women | dresses | S | red | 50 | 0 | 20 | 4.8 |
/// | 3  | men | trousers | L, XL | blue | 80 | 3 | 10 | 4.2 |
/// | 4  | accessories | - | - | red | 25 | 12 | - | 3.5 |
/// | 5  | women | shirts | S, M | white, blue | 65 | 1 | - | 4.9 |
pub const FIXTURE_CATALOG: &str = r#"[
    {"id":"1","name":"Oxford Shirt","price":100,"category":"men","subcategory":"shirts",
     "sizes":["M"],"colors":["white"],"stock":5,"rating":4.2,"reviewCount":31},
    {"id":"2","name":"Wrap Dress","price":50,"originalPrice":62.5,"discount":20,"category":"women",
     "subcategory":"dresses","sizes":["S"],"colors":["red"],"stock":0,"rating":4.8,"reviewCount":12},
    {"id":"3","name":"Chinos","price":80,"discount":10,"category":"men","subcategory":"trousers",
     "sizes":["L","XL"],"colors":["blue"],"stock":3,"rating":4.2,"reviewCount":8},
    {"id":"4","name":"Silk Scarf","price":25,"category":"accessories","colors":["red"],
     "stock":12,"rating":3.5},
    {"id":"5","name":"Linen Blouse","price":65,"category":"women","subcategory":"shirts",
     "sizes":["S","M"],"colors":["white","blue"],"stock":1,"rating":4.9,"reviewCount":40}
]"#;

/// Parse the fixture catalog.
///
/// # Panics
///
/// Panics if the fixture is not valid catalog JSON.
#[must_use]
pub fn fixture_products() -> Vec<ProductSummary> {
    serde_json::from_str(FIXTURE_CATALOG).expect("fixture catalog is valid")
}

/// Default configuration, independent of the process environment.
///
/// # Panics
///
/// Panics if the default configuration fails to load.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig::from_lookup(|_| None).expect("default config loads")
}

/// Storefront router over the fixture catalog.
#[must_use]
pub fn fixture_app() -> Router {
    let catalog = Catalog::from_products(fixture_products());
    vitrine_storefront::app(AppState::new(test_config(), Some(catalog)))
}

/// Storefront router whose catalog failed to load.
#[must_use]
pub fn unloaded_app() -> Router {
    vitrine_storefront::app(AppState::new(test_config(), None))
}

/// Issue a GET request and return the raw response.
///
/// # Panics
///
/// Panics if the request cannot be built or the router fails.
pub async fn get(app: Router, uri: &str) -> axum::response::Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds");
    app.oneshot(request).await.expect("router is infallible")
}

/// Issue a GET request and decode a JSON body, asserting the status.
///
/// # Panics
///
/// Panics if the status differs from `expected` or the body is not valid
/// JSON for `T`.
pub async fn get_json<T: DeserializeOwned>(app: Router, uri: &str, expected: StatusCode) -> T {
    let response = get(app, uri).await;
    assert_eq!(response.status(), expected, "unexpected status for {uri}");

    let bytes = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is valid JSON")
}

/// IDs of a listing, in order.
#[must_use]
pub fn ids(products: &[ProductSummary]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}
