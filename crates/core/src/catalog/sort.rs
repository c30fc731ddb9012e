//! Listing sort keys.

use serde::{Deserialize, Serialize};

/// Order in which the filtered listing is presented.
///
/// `Featured` and `Newest` both keep the upstream fetch order, which is
/// already newest-first. They differ only in how the listing page labels them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Featured,
    Newest,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortKey {
    /// All sort keys in the order the listing page offers them.
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::Newest,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::Rating,
    ];

    /// Wire value (e.g. `price-asc`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
        }
    }

    /// Parse a wire value, falling back to `Featured` for unknown input.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "featured" => Ok(Self::Featured),
            "newest" => Ok(Self::Newest),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "rating" => Ok(Self::Rating),
            other => Err(format!("invalid sort key: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_roundtrips_wire_values() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_falls_back_to_featured() {
        assert!("cheapest".parse::<SortKey>().is_err());
        assert_eq!(SortKey::parse_lenient("cheapest"), SortKey::Featured);
        assert_eq!(SortKey::parse_lenient(""), SortKey::Featured);
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&SortKey::PriceDesc).unwrap();
        assert_eq!(json, "\"price-desc\"");

        let parsed: SortKey = serde_json::from_str("\"price-asc\"").unwrap();
        assert_eq!(parsed, SortKey::PriceAsc);
    }
}
