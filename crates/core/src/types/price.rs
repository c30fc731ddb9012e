//! Inclusive price ranges using decimal arithmetic.
//!
//! Price bounds on the listing page are free-text inputs. Rather than
//! rejecting bad input, [`PriceRange::coerce`] snaps every bound onto the
//! nearest valid value so the filter engine never needs an error path.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An inclusive `[min, max]` price interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PriceRange {
    /// Lower bound (inclusive).
    pub min: Decimal,
    /// Upper bound (inclusive).
    pub max: Decimal,
}

impl PriceRange {
    /// Create a new range. Bounds given in the wrong order are swapped.
    #[must_use]
    pub fn new(min: Decimal, max: Decimal) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Whether `price` lies within the range, both ends inclusive.
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }

    /// Smallest range covering every price yielded by `prices`.
    ///
    /// Returns `[0, 0]` for an empty iterator.
    #[must_use]
    pub fn spanning(prices: impl IntoIterator<Item = Decimal>) -> Self {
        let mut prices = prices.into_iter();
        let Some(first) = prices.next() else {
            return Self::default();
        };

        prices.fold(Self::new(first, first), |range, price| Self {
            min: range.min.min(price),
            max: range.max.max(price),
        })
    }

    /// Clamp `price` into the range.
    #[must_use]
    pub fn clamp(&self, price: Decimal) -> Decimal {
        price.clamp(self.min, self.max)
    }

    /// Build a range from user-entered bounds, coercing instead of failing.
    ///
    /// - Empty or non-numeric `lo` becomes `bounds.min`; empty or non-numeric
    ///   `hi` becomes `bounds.max`.
    /// - Numeric values are clamped into `bounds`. Numbers too large for a
    ///   `Decimal` (`1e40`, `-inf`) saturate to the bound on their side.
    /// - If the clamped `lo` exceeds the clamped `hi` the two are swapped.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use rust_decimal::Decimal;
    /// # use vitrine_core::PriceRange;
    /// let bounds = PriceRange::new(Decimal::from(10), Decimal::from(200));
    /// let range = PriceRange::coerce("abc", "500", bounds);
    /// assert_eq!(range, bounds);
    /// ```
    #[must_use]
    pub fn coerce(lo_input: &str, hi_input: &str, bounds: Self) -> Self {
        let lo = parse_price(lo_input).map_or(bounds.min, |lo| bounds.snap(lo));
        let hi = parse_price(hi_input).map_or(bounds.max, |hi| bounds.snap(hi));
        Self::new(lo, hi)
    }

    fn snap(&self, input: PriceInput) -> Decimal {
        match input {
            PriceInput::Exact(price) => self.clamp(price),
            PriceInput::Overflow { negative: true } => self.min,
            PriceInput::Overflow { negative: false } => self.max,
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A numeric price bound as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceInput {
    Exact(Decimal),
    /// Numeric, but beyond what a `Decimal` can hold.
    Overflow { negative: bool },
}

/// Parse a user-entered price, tolerating whitespace, a leading `$` and
/// thousands separators. Returns `None` for anything non-numeric.
fn parse_price(input: &str) -> Option<PriceInput> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return None;
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    if let Ok(price) =
        Decimal::from_str(&cleaned).or_else(|_| Decimal::from_scientific(&cleaned))
    {
        return Some(PriceInput::Exact(price));
    }

    // Out of Decimal's range or precision; f64 still tells us the magnitude.
    let value = cleaned.parse::<f64>().ok().filter(|v| !v.is_nan())?;
    if value.abs() < 1.0 {
        return Some(PriceInput::Exact(Decimal::ZERO));
    }
    Some(PriceInput::Overflow {
        negative: value.is_sign_negative(),
    })
}
