//! Product listing filter engine.
//!
//! [`apply`] turns the fetched product collection and the shopper's
//! [`FilterSelection`] into the ordered subset to render. It is a pure
//! function: no I/O, no shared state, inputs are only borrowed.
//!
//! # Filtering
//!
//! Facets combine with AND. Within a multi-valued facet (category,
//! subcategory, size, color) the selected values combine with OR. An empty
//! facet or a disabled flag passes everything; the price range is always
//! applied.
//!
//! # Sorting
//!
//! Sorting is stable and happens after filtering. `featured` and `newest`
//! keep the input order. No tie-break is applied beyond stability.

use std::collections::BTreeSet;

use crate::catalog::{Facet, FilterSelection, ProductSummary, SortKey};

/// Filter and sort `products` according to `selection`.
///
/// # Example
///
/// ```rust
/// # use rust_decimal::Decimal;
/// # use vitrine_core::{FacetOptions, FilterSelection, ProductSummary, apply};
/// let mut shirt = ProductSummary::new("1", "Shirt", Decimal::from(100), "men");
/// shirt.stock = 5;
/// let dress = ProductSummary::new("2", "Dress", Decimal::from(50), "women");
/// let catalog = vec![shirt, dress];
///
/// let mut selection = FilterSelection::new(&FacetOptions::from_catalog(&catalog));
/// selection.in_stock_only = true;
///
/// let result = apply(&catalog, &selection);
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].id.as_str(), "1");
/// ```
#[must_use]
pub fn apply(products: &[ProductSummary], selection: &FilterSelection) -> Vec<ProductSummary> {
    apply_refs(products, selection)
        .into_iter()
        .cloned()
        .collect()
}

/// Like [`apply`], but returns references into `products`.
#[must_use]
pub fn apply_refs<'a>(
    products: &'a [ProductSummary],
    selection: &FilterSelection,
) -> Vec<&'a ProductSummary> {
    let mut matched: Vec<&ProductSummary> = products
        .iter()
        .filter(|product| matches(product, selection))
        .collect();

    sort_listing(&mut matched, selection.sort);
    matched
}

/// Whether `product` satisfies every predicate of `selection`.
#[must_use]
pub fn matches(product: &ProductSummary, selection: &FilterSelection) -> bool {
    passes(selection.selected(Facet::Category), |values| {
        values.contains(&product.category)
    }) && passes(selection.selected(Facet::Subcategory), |values| {
        product
            .subcategory
            .as_ref()
            .is_some_and(|subcategory| values.contains(subcategory))
    }) && passes(selection.selected(Facet::Size), |values| {
        intersects(&product.sizes, values)
    }) && passes(selection.selected(Facet::Color), |values| {
        intersects(&product.colors, values)
    }) && selection.price_range.contains(product.price)
        && (!selection.in_stock_only || product.in_stock())
        && (!selection.on_sale_only || product.on_sale())
}

/// An unrestricted facet passes; a restricted one defers to `predicate`.
fn passes(
    selected: Option<&BTreeSet<String>>,
    predicate: impl FnOnce(&BTreeSet<String>) -> bool,
) -> bool {
    selected.is_none_or(predicate)
}

/// Set intersection test. An empty product set never intersects.
fn intersects(tokens: &[String], selected: &BTreeSet<String>) -> bool {
    tokens.iter().any(|token| selected.contains(token))
}

/// Reorder in place. `sort_by` is stable, so equal keys keep their
/// pre-sort order.
fn sort_listing(products: &mut [&ProductSummary], sort: SortKey) {
    match sort {
        SortKey::Featured | SortKey::Newest => {}
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}
