//! Product summaries as served to the listing page.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A product as it appears in the listing collection.
///
/// Field names follow the upstream document shape (`originalPrice`,
/// `reviewCount`). Optional and array fields may be omitted in the source;
/// missing `sizes`/`colors` deserialize to empty sets, which never match an
/// active size or color facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Discount percentage, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
}

impl ProductSummary {
    /// Create a summary with the required fields; everything else empty.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            discount: None,
            category: category.into(),
            subcategory: None,
            sizes: Vec::new(),
            colors: Vec::new(),
            stock: 0,
            rating: 0.0,
            review_count: 0,
        }
    }

    /// Whether at least one unit is available.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Whether the product carries a positive discount.
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.discount.is_some_and(|discount| discount > Decimal::ZERO)
    }
}
