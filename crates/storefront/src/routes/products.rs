//! Product listing route handlers.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use vitrine_core::{Facet, FacetOptions, FilterSelection, ProductId, ProductSummary, SortKey};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Products per page when the client does not ask for a page size.
const DEFAULT_PER_PAGE: usize = 24;
/// Upper bound on client-requested page size.
const MAX_PER_PAGE: usize = 100;

/// Listing query parameters.
///
/// Every field is taken as raw text and sanitized here: list facets are
/// comma-separated, price bounds are coerced onto the catalog range, flags
/// accept `true`/`1`/`on`/`yes`, and unknown sort keys fall back to
/// `featured`.
///
/// A list parameter is split on every comma, including an encoded `%2C`, so
/// a facet value that itself contains a comma cannot be selected through
/// this endpoint. Repeating a parameter is rejected with 400.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub categories: Option<String>,
    pub subcategories: Option<String>,
    pub sizes: Option<String>,
    pub colors: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub in_stock: Option<String>,
    pub on_sale: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl ListingQuery {
    /// Build the filter selection described by this query.
    #[must_use]
    pub fn to_selection(&self, facets: &FacetOptions) -> FilterSelection {
        let mut selection = FilterSelection::new(facets);

        for (facet, raw) in [
            (Facet::Category, &self.categories),
            (Facet::Subcategory, &self.subcategories),
            (Facet::Size, &self.sizes),
            (Facet::Color, &self.colors),
        ] {
            for value in split_list(raw.as_deref()) {
                selection.select(facet, value);
            }
        }

        selection.set_price_bounds(
            self.min_price.as_deref().unwrap_or_default(),
            self.max_price.as_deref().unwrap_or_default(),
            facets,
        );
        selection.in_stock_only = parse_flag(self.in_stock.as_deref());
        selection.on_sale_only = parse_flag(self.on_sale.as_deref());
        selection.sort = self
            .sort
            .as_deref()
            .map(SortKey::parse_lenient)
            .unwrap_or_default();

        selection
    }

    /// 1-based page number; anything unparsable or zero is page 1.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }

    /// Page size, clamped to `1..=MAX_PER_PAGE`.
    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .map_or(DEFAULT_PER_PAGE, |p| p.clamp(1, MAX_PER_PAGE))
    }
}

/// Listing response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListingResponse {
    /// Products on the requested page, in listing order.
    pub products: Vec<ProductSummary>,
    /// Number of products matching the selection across all pages.
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    /// Badge count for the filter panel.
    pub active_filter_count: usize,
    /// The sanitized selection the listing was computed for.
    pub selection: FilterSelection,
}

/// List products matching the query's filters.
#[instrument(skip(state, query))]
pub async fn index(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> Result<Json<ListingResponse>> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let listings = state.listings();
    let selection = query.to_selection(listings.facets());
    let listing = listings.list(&selection).await;

    let page = query.page();
    let per_page = query.per_page();
    let total = listing.len();

    let products = listing
        .iter()
        .skip(page.saturating_sub(1).saturating_mul(per_page))
        .take(per_page)
        .cloned()
        .collect();

    Ok(Json(ListingResponse {
        products,
        total,
        page,
        per_page,
        total_pages: total.div_ceil(per_page).max(1),
        active_filter_count: selection.active_filter_count(),
        selection,
    }))
}

/// Catalog-wide facet options for the filter panel.
pub async fn facets(State(state): State<AppState>) -> Json<FacetOptions> {
    Json(state.listings().facets().clone())
}

/// A single product summary.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductSummary>> {
    let id = ProductId::new(id);
    state
        .listings()
        .catalog()
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

// =============================================================================
// Query Parsing Helpers
// =============================================================================

/// Split a comma-separated list, dropping blank entries.
fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.into_iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "on" | "yes"
        )
    })
}
