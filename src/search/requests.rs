//! Query parameters for the listings endpoint.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::catalog::{Amenity, CancelationPolicy, PropertyType};
use crate::error::AppError;

use super::filters::{FilterSpec, PriceRange};
use super::sort::SortKey;

/// Raw listings query. Empty values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct ListingsQuery {
    pub sort: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    /// Comma separated, e.g. `wifi,cozinha`
    pub amenities: Option<String>,
    pub pet_friendly: Option<String>,
    pub cancelation: Option<String>,
}

/// A listings query after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsParams {
    pub filters: FilterSpec,
    pub sort: SortKey,
    pub page: usize,
    pub page_size: usize,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_price(name: &str, value: &str) -> Result<Decimal, AppError> {
    value
        .parse::<Decimal>()
        .map_err(|_| AppError::BadRequest(format!("{} must be a number, got '{}'", name, value)))
}

impl ListingsQuery {
    pub fn filters(&self) -> Result<FilterSpec, AppError> {
        let min_price = present(&self.min_price)
            .map(|v| parse_price("min_price", v))
            .transpose()?;
        let max_price = present(&self.max_price)
            .map(|v| parse_price("max_price", v))
            .transpose()?;

        let property_type = present(&self.property_type)
            .map(str::parse::<PropertyType>)
            .transpose()?;

        let amenities = match present(&self.amenities) {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::parse::<Amenity>)
                .collect::<Result<BTreeSet<_>, _>>()?,
            None => BTreeSet::new(),
        };

        let pet_friendly = match present(&self.pet_friendly) {
            None => None,
            Some("true") => Some(true),
            Some("false") => Some(false),
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "pet_friendly must be true or false, got '{}'",
                    other
                )))
            }
        };

        let cancelation_policy = present(&self.cancelation)
            .map(str::parse::<CancelationPolicy>)
            .transpose()?;

        Ok(FilterSpec {
            price_range: PriceRange::from_bounds(min_price, max_price),
            property_type,
            amenities,
            pet_friendly,
            cancelation_policy,
        })
    }

    /// Parse into pipeline inputs, using `default_page_size` when unset
    pub fn params(&self, default_page_size: usize) -> Result<ListingsParams, AppError> {
        Ok(ListingsParams {
            filters: self.filters()?,
            sort: SortKey::from_param(present(&self.sort)),
            page: self.page.unwrap_or(1).max(1),
            page_size: self.page_size.unwrap_or(default_page_size).max(1),
        })
    }
}
