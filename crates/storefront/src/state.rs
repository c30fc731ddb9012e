//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::ListingService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the listing service and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    listings: ListingService,
    catalog_loaded: bool,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `catalog` - Catalog in fetch order, or `None` if loading failed
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Option<Catalog>) -> Self {
        let catalog_loaded = catalog.is_some();
        let listings = ListingService::new(catalog.unwrap_or_default(), config.cache);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                listings,
                catalog_loaded,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the listing service.
    #[must_use]
    pub fn listings(&self) -> &ListingService {
        &self.inner.listings
    }

    /// Whether the catalog export was read successfully at startup.
    #[must_use]
    pub fn catalog_loaded(&self) -> bool {
        self.inner.catalog_loaded
    }
}
