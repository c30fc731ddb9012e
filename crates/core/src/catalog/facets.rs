//! Catalog-wide facet vocabulary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Facet, ProductSummary};
use crate::types::PriceRange;

/// Distinct facet values present in the full, unfiltered catalog.
///
/// Computed once per catalog load. The lists describe what could exist, not
/// what currently matches, so they are never narrowed as filters change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub price_range: PriceRange,
}

impl FacetOptions {
    /// Derive facet options from the full catalog.
    ///
    /// Values are de-duplicated and sorted. An empty catalog yields empty
    /// vocabularies and a `[0, 0]` price range.
    #[must_use]
    pub fn from_catalog(products: &[ProductSummary]) -> Self {
        let mut categories = BTreeSet::new();
        let mut subcategories = BTreeSet::new();
        let mut sizes = BTreeSet::new();
        let mut colors = BTreeSet::new();

        for product in products {
            categories.insert(product.category.as_str());
            if let Some(subcategory) = &product.subcategory {
                subcategories.insert(subcategory.as_str());
            }
            sizes.extend(product.sizes.iter().map(String::as_str));
            colors.extend(product.colors.iter().map(String::as_str));
        }

        Self {
            categories: to_owned_vec(categories),
            subcategories: to_owned_vec(subcategories),
            sizes: to_owned_vec(sizes),
            colors: to_owned_vec(colors),
            price_range: PriceRange::spanning(products.iter().map(|p| p.price)),
        }
    }

    /// Options for one multi-valued facet.
    #[must_use]
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Category => &self.categories,
            Facet::Subcategory => &self.subcategories,
            Facet::Size => &self.sizes,
            Facet::Color => &self.colors,
        }
    }
}

fn to_owned_vec(values: BTreeSet<&str>) -> Vec<String> {
    values.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, price: i64, category: &str, subcategory: Option<&str>) -> ProductSummary {
        let mut product = ProductSummary::new(id, id, Decimal::from(price), category);
        product.subcategory = subcategory.map(String::from);
        product
    }

    #[test]
    fn test_from_catalog_collects_distinct_sorted_values() {
        let mut shirt = product("1", 40, "men", Some("shirts"));
        shirt.sizes = vec!["M".into(), "L".into()];
        shirt.colors = vec!["navy".into()];
        let mut dress = product("2", 90, "women", Some("dresses"));
        dress.sizes = vec!["S".into(), "M".into()];
        dress.colors = vec!["red".into(), "navy".into()];
        let cap = product("3", 15, "men", None);

        let options = FacetOptions::from_catalog(&[shirt, dress, cap]);

        assert_eq!(options.categories, vec!["men", "women"]);
        assert_eq!(options.subcategories, vec!["dresses", "shirts"]);
        assert_eq!(options.sizes, vec!["L", "M", "S"]);
        assert_eq!(options.colors, vec!["navy", "red"]);
        assert_eq!(
            options.price_range,
            PriceRange::new(Decimal::from(15), Decimal::from(90))
        );
    }

    #[test]
    fn test_from_empty_catalog() {
        let options = FacetOptions::from_catalog(&[]);
        assert!(options.categories.is_empty());
        assert!(options.sizes.is_empty());
        assert_eq!(options.price_range, PriceRange::default());
    }

    #[test]
    fn test_values_by_facet() {
        let options = FacetOptions::from_catalog(&[product("1", 10, "kids", Some("shoes"))]);
        assert_eq!(options.values(Facet::Category), ["kids"]);
        assert_eq!(options.values(Facet::Subcategory), ["shoes"]);
        assert!(options.values(Facet::Size).is_empty());
        assert!(options.values(Facet::Color).is_empty());
    }
}
