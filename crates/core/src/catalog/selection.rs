//! The shopper's filter selection.
//!
//! A selection is created when the listing page mounts, mutated as the shopper
//! toggles checkboxes or edits price fields, and discarded on unmount. The
//! filter engine only ever reads it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{FacetOptions, SortKey};
use crate::types::PriceRange;

/// Multi-valued facets. Within a facet, selected values combine with OR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Category,
    Subcategory,
    Size,
    Color,
}

impl Facet {
    pub const ALL: [Self; 4] = [Self::Category, Self::Subcategory, Self::Size, Self::Color];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Subcategory => "subcategory",
            Self::Size => "size",
            Self::Color => "color",
        }
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Facet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Self::Category),
            "subcategory" => Ok(Self::Subcategory),
            "size" => Ok(Self::Size),
            "color" => Ok(Self::Color),
            _ => Err(format!("invalid facet: {s}")),
        }
    }
}

/// Current filter state of the listing page.
///
/// Facets with no selected values are absent from the map, so two selections
/// that filter identically compare (and hash) equal. This makes a selection
/// usable directly as a memoization key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterSelection {
    facets: BTreeMap<Facet, BTreeSet<String>>,
    pub price_range: PriceRange,
    pub in_stock_only: bool,
    pub on_sale_only: bool,
    pub sort: SortKey,
}

impl FilterSelection {
    /// Fresh selection: no facet restrictions, full global price range,
    /// both flags off, `Featured` order.
    #[must_use]
    pub fn new(options: &FacetOptions) -> Self {
        Self {
            facets: BTreeMap::new(),
            price_range: options.price_range,
            in_stock_only: false,
            on_sale_only: false,
            sort: SortKey::default(),
        }
    }

    /// Flip membership of `value` in `facet`. Returns `true` if the value is
    /// selected afterwards.
    pub fn toggle(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.is_selected(facet, &value) {
            self.deselect(facet, &value);
            false
        } else {
            self.select(facet, value);
            true
        }
    }

    /// Add `value` to `facet`. Returns `false` if it was already selected.
    pub fn select(&mut self, facet: Facet, value: impl Into<String>) -> bool {
        self.facets.entry(facet).or_default().insert(value.into())
    }

    /// Remove `value` from `facet`. Returns `false` if it was not selected.
    pub fn deselect(&mut self, facet: Facet, value: &str) -> bool {
        let Some(values) = self.facets.get_mut(&facet) else {
            return false;
        };
        let removed = values.remove(value);
        if values.is_empty() {
            self.facets.remove(&facet);
        }
        removed
    }

    /// Builder-style [`select`](Self::select).
    #[must_use]
    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.select(facet, value);
        self
    }

    /// Builder-style sort key.
    #[must_use]
    pub const fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    #[must_use]
    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.facets
            .get(&facet)
            .is_some_and(|values| values.contains(value))
    }

    /// Selected values for `facet`, or `None` when the facet is unrestricted.
    #[must_use]
    pub fn selected(&self, facet: Facet) -> Option<&BTreeSet<String>> {
        self.facets.get(&facet).filter(|values| !values.is_empty())
    }

    /// Number of selected values for `facet`.
    #[must_use]
    pub fn selected_count(&self, facet: Facet) -> usize {
        self.facets.get(&facet).map_or(0, BTreeSet::len)
    }

    /// Apply user-entered price bounds, coercing bad input onto the catalog's
    /// global range. See [`PriceRange::coerce`].
    pub fn set_price_bounds(&mut self, lo_input: &str, hi_input: &str, options: &FacetOptions) {
        self.price_range = PriceRange::coerce(lo_input, hi_input, options.price_range);
    }

    /// Reset every facet, both flags and the price range. The sort key is a
    /// view preference and is left alone.
    pub fn clear_all(&mut self, options: &FacetOptions) {
        self.facets.clear();
        self.price_range = options.price_range;
        self.in_stock_only = false;
        self.on_sale_only = false;
    }

    /// Badge count for the filter panel.
    ///
    /// Every selected facet value counts once, each enabled flag counts once.
    /// The price range is never counted.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        let facet_values: usize = self.facets.values().map(BTreeSet::len).sum();
        facet_values + usize::from(self.in_stock_only) + usize::from(self.on_sale_only)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn options() -> FacetOptions {
        FacetOptions {
            categories: vec!["men".into(), "women".into()],
            price_range: PriceRange::new(Decimal::from(50), Decimal::from(100)),
            ..FacetOptions::default()
        }
    }

    #[test]
    fn test_new_selection_defaults() {
        let selection = FilterSelection::new(&options());
        assert_eq!(selection.price_range, options().price_range);
        assert!(!selection.in_stock_only);
        assert!(!selection.on_sale_only);
        assert_eq!(selection.sort, SortKey::Featured);
        assert_eq!(selection.active_filter_count(), 0);
        for facet in Facet::ALL {
            assert!(selection.selected(facet).is_none());
        }
    }

    #[test]
    fn test_toggle_serves_every_facet() {
        let mut selection = FilterSelection::new(&options());
        for facet in Facet::ALL {
            assert!(selection.toggle(facet, "x"));
            assert!(selection.is_selected(facet, "x"));
            assert!(!selection.toggle(facet, "x"));
            assert!(!selection.is_selected(facet, "x"));
        }
        assert_eq!(selection, FilterSelection::new(&options()));
    }

    #[test]
    fn test_deselecting_last_value_removes_facet() {
        let mut selection = FilterSelection::new(&options());
        selection.select(Facet::Size, "M");
        assert!(selection.deselect(Facet::Size, "M"));
        assert!(!selection.deselect(Facet::Size, "M"));
        assert!(selection.selected(Facet::Size).is_none());
        assert_eq!(selection, FilterSelection::new(&options()));
    }

    #[test]
    fn test_active_filter_count_example() {
        let mut selection = FilterSelection::new(&options())
            .with(Facet::Category, "men")
            .with(Facet::Size, "M")
            .with(Facet::Size, "L");
        selection.in_stock_only = true;

        assert_eq!(selection.active_filter_count(), 4);
    }

    #[test]
    fn test_active_filter_count_ignores_price_and_sort() {
        let mut selection = FilterSelection::new(&options()).sorted_by(SortKey::Rating);
        selection.set_price_bounds("60", "70", &options());
        assert_eq!(selection.active_filter_count(), 0);

        selection.on_sale_only = true;
        assert_eq!(selection.active_filter_count(), 1);
    }

    #[test]
    fn test_clear_all_keeps_sort() {
        let opts = options();
        let mut selection = FilterSelection::new(&opts)
            .with(Facet::Category, "women")
            .with(Facet::Color, "red")
            .sorted_by(SortKey::PriceDesc);
        selection.in_stock_only = true;
        selection.on_sale_only = true;
        selection.set_price_bounds("55", "60", &opts);

        selection.clear_all(&opts);

        assert_eq!(selection.active_filter_count(), 0);
        assert_eq!(selection.price_range, opts.price_range);
        assert_eq!(selection.sort, SortKey::PriceDesc);
        assert_eq!(selection, FilterSelection::new(&opts).sorted_by(SortKey::PriceDesc));
    }

    #[test]
    fn test_set_price_bounds_coerces() {
        let opts = options();
        let mut selection = FilterSelection::new(&opts);
        selection.set_price_bounds("ten", "1000", &opts);
        assert_eq!(selection.price_range, opts.price_range);
    }

    #[test]
    fn test_facet_from_str() {
        for facet in Facet::ALL {
            assert_eq!(facet.as_str().parse::<Facet>(), Ok(facet));
        }
        assert!("brand".parse::<Facet>().is_err());
    }
}
