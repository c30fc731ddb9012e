//! Product listing service.
//!
//! Wraps the filter engine with memoization. The catalog never changes after
//! startup, so the selection alone is a sufficient cache key.

use std::sync::Arc;

use moka::future::Cache;
use tracing::{debug, instrument};
use vitrine_core::{FacetOptions, FilterSelection, ProductSummary, engine};

use crate::catalog::Catalog;
use crate::config::CacheConfig;

/// Filtered, sorted listing shared between cache and callers.
pub type Listing = Arc<Vec<ProductSummary>>;

/// Serves filtered listings over a fixed catalog.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct ListingService {
    inner: Arc<ListingServiceInner>,
}

struct ListingServiceInner {
    catalog: Catalog,
    cache: Cache<FilterSelection, Listing>,
}

impl ListingService {
    /// Create a listing service over `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog, cache_config: CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(cache_config.capacity)
            .time_to_live(cache_config.ttl)
            .build();

        Self {
            inner: Arc::new(ListingServiceInner { catalog, cache }),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Catalog-wide facet options.
    #[must_use]
    pub fn facets(&self) -> &FacetOptions {
        self.inner.catalog.facets()
    }

    /// A fresh, unrestricted selection for this catalog.
    #[must_use]
    pub fn default_selection(&self) -> FilterSelection {
        FilterSelection::new(self.facets())
    }

    /// Filtered and sorted products for `selection`.
    #[instrument(skip_all, fields(active_filters = selection.active_filter_count(), sort = %selection.sort))]
    pub async fn list(&self, selection: &FilterSelection) -> Listing {
        if let Some(listing) = self.inner.cache.get(selection).await {
            debug!("Cache hit for listing");
            return listing;
        }

        let listing: Listing = Arc::new(engine::apply(self.inner.catalog.products(), selection));
        debug!(matched = listing.len(), "Listing computed");

        self.inner
            .cache
            .insert(selection.clone(), Arc::clone(&listing))
            .await;

        listing
    }
}
