//! Listing filters.
//!
//! A `FilterSpec` is a conjunction of optional constraints. The default spec
//! constrains nothing and lets every listing through.

use std::collections::BTreeSet;
use std::fmt::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{Amenity, CancelationPolicy, Listing, PropertyType};

/// Inclusive nightly price bounds. `max: None` means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceRange {
    min: Decimal,
    max: Option<Decimal>,
}

impl PriceRange {
    /// Build a range, normalizing bad input instead of rejecting it:
    /// negative bounds become zero and a max below min is raised to min.
    pub fn new(min: Decimal, max: Option<Decimal>) -> Self {
        let min = min.max(Decimal::ZERO);
        let max = max.map(|max| max.max(Decimal::ZERO).max(min));
        Self { min, max }
    }

    /// Range from two optional bounds as entered in the filter form.
    ///
    /// Returns `None` when the bounds do not constrain anything.
    pub fn from_bounds(min: Option<Decimal>, max: Option<Decimal>) -> Option<Self> {
        if min.is_none() && max.is_none() {
            return None;
        }

        let range = Self::new(min.unwrap_or(Decimal::ZERO), max);
        if range.min.is_zero() && range.max.is_none() {
            return None;
        }
        Some(range)
    }

    pub fn min(&self) -> Decimal {
        self.min
    }

    pub fn max(&self) -> Option<Decimal> {
        self.max
    }

    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

/// Active constraints for the results page
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    pub price_range: Option<PriceRange>,
    pub property_type: Option<PropertyType>,
    /// Listings must offer all of these
    pub amenities: BTreeSet<Amenity>,
    pub pet_friendly: Option<bool>,
    pub cancelation_policy: Option<CancelationPolicy>,
}

impl FilterSpec {
    /// True when `listing` satisfies every active constraint
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(range) = &self.price_range {
            if !range.contains(listing.price_per_night) {
                return false;
            }
        }

        if let Some(property_type) = self.property_type {
            if listing.property_type != property_type {
                return false;
            }
        }

        if !listing.has_amenities(&self.amenities) {
            return false;
        }

        if let Some(pet_friendly) = self.pet_friendly {
            if listing.pet_friendly != pet_friendly {
                return false;
            }
        }

        if let Some(policy) = self.cancelation_policy {
            if listing.cancelation_policy != policy {
                return false;
            }
        }

        true
    }

    /// Number of active filter groups; any amenities count as one
    pub fn active_count(&self) -> usize {
        [
            self.price_range.is_some(),
            self.property_type.is_some(),
            !self.amenities.is_empty(),
            self.pet_friendly.is_some(),
            self.cancelation_policy.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Canonical string form, stable across equal specs
    pub fn cache_key(&self) -> String {
        let mut key = String::new();
        if let Some(range) = &self.price_range {
            let _ = write!(key, "price={}-", range.min.normalize());
            if let Some(max) = range.max {
                let _ = write!(key, "{}", max.normalize());
            }
            key.push(';');
        }
        if let Some(property_type) = self.property_type {
            let _ = write!(key, "type={};", property_type);
        }
        if !self.amenities.is_empty() {
            let names: Vec<&str> = self.amenities.iter().map(Amenity::as_str).collect();
            let _ = write!(key, "amenities={};", names.join(","));
        }
        if let Some(pet_friendly) = self.pet_friendly {
            let _ = write!(key, "pets={};", pet_friendly);
        }
        if let Some(policy) = self.cancelation_policy {
            let _ = write!(key, "cancelation={};", policy.as_str());
        }
        key
    }
}

/// Listings that pass `filters`, in input order
pub fn filter_listings<'a>(listings: &'a [Listing], filters: &FilterSpec) -> Vec<&'a Listing> {
    listings.iter().filter(|listing| filters.matches(listing)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rust_decimal_macros::dec;

    fn seed() -> Catalog {
        Catalog::seed().unwrap()
    }

    fn ids<'a>(listings: &[&'a Listing]) -> Vec<&'a str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    // ==================== PriceRange tests ====================

    #[test]
    fn test_price_range_inclusive() {
        let range = PriceRange::new(dec!(330), Some(dec!(540)));
        assert!(range.contains(dec!(330)));
        assert!(range.contains(dec!(540)));
        assert!(!range.contains(dec!(329.99)));
        assert!(!range.contains(dec!(541)));
    }

    #[test]
    fn test_price_range_normalizes_inverted_bounds() {
        let range = PriceRange::new(dec!(600), Some(dec!(100)));
        assert_eq!(range.min(), dec!(600));
        assert_eq!(range.max(), Some(dec!(600)));

        let range = PriceRange::new(dec!(-50), Some(dec!(-10)));
        assert_eq!(range.min(), dec!(0));
        assert_eq!(range.max(), Some(dec!(0)));
    }

    #[test]
    fn test_price_range_from_bounds() {
        assert_eq!(PriceRange::from_bounds(None, None), None);
        assert_eq!(PriceRange::from_bounds(Some(dec!(0)), None), None);
        assert_eq!(PriceRange::from_bounds(Some(dec!(-5)), None), None);

        let range = PriceRange::from_bounds(None, Some(dec!(600))).unwrap();
        assert_eq!(range.min(), dec!(0));
        assert_eq!(range.max(), Some(dec!(600)));

        let range = PriceRange::from_bounds(Some(dec!(500)), None).unwrap();
        assert!(range.contains(dec!(100000)));
    }

    // ==================== FilterSpec tests ====================

    #[test]
    fn test_empty_spec_is_identity() {
        let catalog = seed();
        let filtered = filter_listings(catalog.listings(), &FilterSpec::default());
        assert_eq!(filtered.len(), catalog.len());
        let expected: Vec<&str> = catalog.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids(&filtered), expected);
    }

    #[test]
    fn test_filter_by_property_type() {
        let catalog = seed();
        let spec = FilterSpec {
            property_type: Some(PropertyType::Casa),
            ..FilterSpec::default()
        };
        let filtered = filter_listings(catalog.listings(), &spec);
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|l| l.property_type == PropertyType::Casa));
    }

    #[test]
    fn test_filter_amenities_superset() {
        let catalog = seed();
        let spec = FilterSpec {
            amenities: BTreeSet::from([Amenity::Wifi, Amenity::Cozinha]),
            ..FilterSpec::default()
        };
        let filtered = filter_listings(catalog.listings(), &spec);
        assert_eq!(
            ids(&filtered),
            vec![
                "lisboa-apartamento-moderno",
                "sao-paulo-loft-panorama",
                "porto-villa-mediterranea"
            ]
        );
    }

    #[test]
    fn test_filter_conjunction() {
        let catalog = seed();
        let spec = FilterSpec {
            price_range: PriceRange::from_bounds(None, Some(dec!(700))),
            pet_friendly: Some(true),
            cancelation_policy: Some(CancelationPolicy::Flex),
            ..FilterSpec::default()
        };
        let filtered = filter_listings(catalog.listings(), &spec);
        assert_eq!(
            ids(&filtered),
            vec!["curitiba-studio-criativo", "gramado-chale-sustentavel"]
        );
    }

    #[test]
    fn test_filter_pet_friendly_false_is_a_constraint() {
        let catalog = seed();
        let spec = FilterSpec {
            pet_friendly: Some(false),
            ..FilterSpec::default()
        };
        let filtered = filter_listings(catalog.listings(), &spec);
        assert_eq!(filtered.len(), 4);
        assert!(filtered.iter().all(|l| !l.pet_friendly));
    }

    #[test]
    fn test_filter_can_empty_the_results() {
        let catalog = seed();
        let spec = FilterSpec {
            property_type: Some(PropertyType::Cabana),
            pet_friendly: Some(true),
            ..FilterSpec::default()
        };
        assert!(filter_listings(catalog.listings(), &spec).is_empty());
    }

    #[test]
    fn test_active_count() {
        assert_eq!(FilterSpec::default().active_count(), 0);
        assert!(FilterSpec::default().is_empty());

        let spec = FilterSpec {
            amenities: BTreeSet::from([Amenity::Wifi, Amenity::Cozinha]),
            pet_friendly: Some(false),
            ..FilterSpec::default()
        };
        assert_eq!(spec.active_count(), 2);
    }

    #[test]
    fn test_cache_key_is_canonical() {
        let a = FilterSpec {
            price_range: PriceRange::from_bounds(Some(dec!(100.0)), Some(dec!(600))),
            amenities: BTreeSet::from([Amenity::Cozinha, Amenity::Wifi]),
            ..FilterSpec::default()
        };
        let b = FilterSpec {
            price_range: PriceRange::from_bounds(Some(dec!(100)), Some(dec!(600.00))),
            amenities: BTreeSet::from([Amenity::Wifi, Amenity::Cozinha]),
            ..FilterSpec::default()
        };
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), "price=100-600;amenities=wifi,cozinha;");
        assert_eq!(FilterSpec::default().cache_key(), "");
    }
}
