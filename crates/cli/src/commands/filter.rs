//! Run the listing filter engine over a catalog export.
//!
//! # Usage
//!
//! ```bash
//! # In-stock menswear in size M or L, cheapest first
//! vitrine filter --catalog data/catalog.json -c men -s M -s L --in-stock --sort price-asc
//!
//! # Everything on sale under 50
//! vitrine filter --catalog data/catalog.json --on-sale --max-price 50
//! ```

use std::io::Write;
use std::path::PathBuf;

use vitrine_core::{Facet, FacetOptions, FilterSelection, ProductSummary, SortKey, engine};

use super::{CommandError, load_catalog, write_json};

/// Facet choices for one filter run.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub catalog: PathBuf,
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub in_stock: bool,
    pub on_sale: bool,
    pub sort: SortKey,
}

impl FilterOptions {
    /// Selection over a catalog with the given facet options.
    ///
    /// Price bounds go through the same coercion as the listing page, so an
    /// unparsable `--min-price` means "no lower bound".
    #[must_use]
    pub fn to_selection(&self, facets: &FacetOptions) -> FilterSelection {
        let mut selection = FilterSelection::new(facets).sorted_by(self.sort);

        for (facet, values) in [
            (Facet::Category, &self.categories),
            (Facet::Subcategory, &self.subcategories),
            (Facet::Size, &self.sizes),
            (Facet::Color, &self.colors),
        ] {
            for value in values {
                selection.select(facet, value.as_str());
            }
        }

        selection.set_price_bounds(
            self.min_price.as_deref().unwrap_or_default(),
            self.max_price.as_deref().unwrap_or_default(),
            facets,
        );
        selection.in_stock_only = self.in_stock;
        selection.on_sale_only = self.on_sale;
        selection
    }
}

/// Filter `products` and return the listing plus its active filter count.
#[must_use]
pub fn filter_products(
    products: &[ProductSummary],
    options: &FilterOptions,
) -> (Vec<ProductSummary>, usize) {
    let facets = FacetOptions::from_catalog(products);
    let selection = options.to_selection(&facets);
    (
        engine::apply(products, &selection),
        selection.active_filter_count(),
    )
}

/// Load the catalog, filter it and write the listing as JSON to `out`.
///
/// # Errors
///
/// Returns `CommandError` if the catalog cannot be loaded or the output
/// cannot be written.
pub fn run(options: &FilterOptions, out: &mut impl Write) -> Result<(), CommandError> {
    let products = load_catalog(&options.catalog)?;
    let (listing, active_filters) = filter_products(&products, options);

    tracing::info!(
        matched = listing.len(),
        total = products.len(),
        active_filters,
        sort = %options.sort,
        "Catalog filtered"
    );

    write_json(out, &listing)
}
