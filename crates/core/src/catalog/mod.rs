//! Catalog-side data consumed by the listing filter engine.
//!
//! - [`ProductSummary`] - one product as fetched for the listing page
//! - [`FacetOptions`] - catalog-wide facet vocabulary, derived once per load
//! - [`FilterSelection`] - the shopper's current facet choices and sort key
//! - [`SortKey`] - listing order

mod facets;
mod product;
mod selection;
mod sort;

pub use facets::FacetOptions;
pub use product::ProductSummary;
pub use selection::{Facet, FilterSelection};
pub use sort::SortKey;
