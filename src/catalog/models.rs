//! Listing models for the stay catalog.
//!
//! Enum values serialize with the same names the site uses in query strings
//! and mock data (`Casa`, `wifi`, `flex`, ...).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::reviews::models::Review;

/// Raised when a query or payload names a variant that does not exist
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Kind of property being rented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Casa,
    Apartamento,
    Cabana,
    Studio,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Casa => "Casa",
            PropertyType::Apartamento => "Apartamento",
            PropertyType::Cabana => "Cabana",
            PropertyType::Studio => "Studio",
        }
    }
}

impl FromStr for PropertyType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Casa" => Ok(PropertyType::Casa),
            "Apartamento" => Ok(PropertyType::Apartamento),
            "Cabana" => Ok(PropertyType::Cabana),
            "Studio" => Ok(PropertyType::Studio),
            other => Err(UnknownVariant {
                kind: "property type",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amenity a listing may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Wifi,
    Cozinha,
    Estacionamento,
}

impl Amenity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Cozinha => "cozinha",
            Amenity::Estacionamento => "estacionamento",
        }
    }
}

impl FromStr for Amenity {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wifi" => Ok(Amenity::Wifi),
            "cozinha" => Ok(Amenity::Cozinha),
            "estacionamento" => Ok(Amenity::Estacionamento),
            other => Err(UnknownVariant {
                kind: "amenity",
                value: other.to_string(),
            }),
        }
    }
}

/// Cancelation policy: flexible, moderate or rigid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancelationPolicy {
    Flex,
    Mod,
    Rig,
}

impl CancelationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancelationPolicy::Flex => "flex",
            CancelationPolicy::Mod => "mod",
            CancelationPolicy::Rig => "rig",
        }
    }
}

impl FromStr for CancelationPolicy {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flex" => Ok(CancelationPolicy::Flex),
            "mod" => Ok(CancelationPolicy::Mod),
            "rig" => Ok(CancelationPolicy::Rig),
            other => Err(UnknownVariant {
                kind: "cancelation policy",
                value: other.to_string(),
            }),
        }
    }
}

/// Host-defined terms applied when quoting a stay for a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingTerms {
    #[serde(default = "default_min_nights")]
    pub min_nights: u32,
    #[serde(default, with = "rust_decimal::serde::str")]
    pub cleaning_fee: Decimal,
    /// Overrides the service-wide fee rate when present
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub service_fee_rate: Option<Decimal>,
    /// Dates in `dd/mm/yyyy` form
    #[serde(default)]
    pub blocked_dates: Vec<String>,
}

fn default_min_nights() -> u32 {
    1
}

impl Default for BookingTerms {
    fn default() -> Self {
        Self {
            min_nights: default_min_nights(),
            cleaning_fee: Decimal::ZERO,
            service_fee_rate: None,
            blocked_dates: Vec::new(),
        }
    }
}

/// A rentable stay. Read-only once the catalog is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Average guest rating in `[0, 5]`
    pub rating: f32,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_night: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub property_type: PropertyType,
    #[serde(default)]
    pub amenities: BTreeSet<Amenity>,
    #[serde(default)]
    pub pet_friendly: bool,
    pub cancelation_policy: CancelationPolicy,
    #[serde(default)]
    pub booking_terms: BookingTerms,
    #[serde(default, skip_serializing)]
    pub reviews: Vec<Review>,
}

impl Listing {
    /// True when the listing offers every amenity in `required`
    pub fn has_amenities(&self, required: &BTreeSet<Amenity>) -> bool {
        required.is_subset(&self.amenities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&PropertyType::Casa).unwrap(), "\"Casa\"");
        assert_eq!(serde_json::to_string(&Amenity::Estacionamento).unwrap(), "\"estacionamento\"");
        assert_eq!(serde_json::to_string(&CancelationPolicy::Rig).unwrap(), "\"rig\"");
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!("Cabana".parse::<PropertyType>(), Ok(PropertyType::Cabana));
        let err = "castelo".parse::<PropertyType>().unwrap_err();
        assert_eq!(err.kind, "property type");
        assert!(err.to_string().contains("castelo"));
        assert!("piscina".parse::<Amenity>().is_err());
        assert!("FLEX".parse::<CancelationPolicy>().is_err());
    }

    #[test]
    fn test_listing_deserialize_defaults() {
        let json = r#"{
            "id": "x",
            "title": "Casa",
            "location": "Recife, Brasil",
            "rating": 4.5,
            "price_per_night": "250",
            "property_type": "Casa",
            "cancelation_policy": "flex"
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.price_per_night, dec!(250));
        assert!(listing.amenities.is_empty());
        assert!(!listing.pet_friendly);
        assert_eq!(listing.booking_terms, BookingTerms::default());
        assert!(listing.reviews.is_empty());
    }

    #[test]
    fn test_has_amenities_is_superset_check() {
        let json = r#"{
            "id": "x",
            "title": "Studio",
            "location": "Curitiba, Brasil",
            "rating": 4.0,
            "price_per_night": "100",
            "property_type": "Studio",
            "amenities": ["wifi", "cozinha"],
            "cancelation_policy": "mod"
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();

        assert!(listing.has_amenities(&BTreeSet::new()));
        assert!(listing.has_amenities(&BTreeSet::from([Amenity::Wifi])));
        assert!(listing.has_amenities(&BTreeSet::from([Amenity::Wifi, Amenity::Cozinha])));
        assert!(!listing.has_amenities(&BTreeSet::from([Amenity::Estacionamento])));
    }
}
