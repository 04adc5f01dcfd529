//! Result ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Listing, UnknownVariant};

/// Single sort key for the results page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Catalog order
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::RatingDesc => "rating_desc",
        }
    }

    /// Lenient parse for query strings: missing or unknown values mean `default`
    pub fn from_param(param: Option<&str>) -> Self {
        param.and_then(|value| value.parse().ok()).unwrap_or_default()
    }

    /// Stable in-place sort; equal keys keep their relative order
    pub fn apply(&self, listings: &mut [&Listing]) {
        match self {
            SortKey::Default => {}
            SortKey::PriceAsc => listings.sort_by(|a, b| a.price_per_night.cmp(&b.price_per_night)),
            SortKey::PriceDesc => listings.sort_by(|a, b| b.price_per_night.cmp(&a.price_per_night)),
            SortKey::RatingDesc => listings.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortKey::Default),
            "price_asc" => Ok(SortKey::PriceAsc),
            "price_desc" => Ok(SortKey::PriceDesc),
            "rating_desc" => Ok(SortKey::RatingDesc),
            other => Err(UnknownVariant {
                kind: "sort key",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
