//! Catalog loading.
//!
//! The catalog is a JSON array of product summaries exported by the document
//! store, newest product first. It is read once at startup; the facet
//! vocabulary is derived from it in the same step and never recomputed.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::instrument;
use vitrine_core::{FacetOptions, ProductId, ProductSummary};

/// Errors that can occur while loading a catalog export.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Products in fetch order plus the facet options derived from them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<ProductSummary>,
    facets: FacetOptions,
}

impl Catalog {
    /// Build a catalog from products already in fetch order.
    #[must_use]
    pub fn from_products(products: Vec<ProductSummary>) -> Self {
        let facets = FacetOptions::from_catalog(&products);
        Self { products, facets }
    }

    /// Read and parse a catalog export.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or is not a JSON
    /// array of product summaries.
    ///
    /// Records with a negative price are skipped with a warning.
    #[instrument]
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| CatalogError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut products: Vec<ProductSummary> =
            serde_json::from_slice(&bytes).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        products.retain(|product| {
            let valid = !product.price.is_sign_negative() || product.price.is_zero();
            if !valid {
                tracing::warn!(
                    id = %product.id,
                    price = %product.price,
                    "Skipping product with negative price"
                );
            }
            valid
        });

        tracing::info!(products = products.len(), "Catalog loaded");
        Ok(Self::from_products(products))
    }

    #[must_use]
    pub fn products(&self) -> &[ProductSummary] {
        &self.products
    }

    #[must_use]
    pub const fn facets(&self) -> &FacetOptions {
        &self.facets
    }

    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&ProductSummary> {
        self.products.iter().find(|product| &product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
