//! Loading the read-only listing catalog.
//!
//! Listings come from a JSON file when one is configured, otherwise from the
//! seed catalog compiled into the binary.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::reviews::models::{MAX_RATING, MIN_RATING};

use super::models::Listing;

const SEED_CATALOG: &str = include_str!("../../data/listings.json");

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate listing id '{0}'")]
    DuplicateId(String),

    #[error("Listing '{id}' has rating {rating} outside [0, 5]")]
    InvalidRating { id: String, rating: f32 },

    #[error("Review '{review}' on listing '{id}' has rating {rating} outside 1..=5")]
    InvalidReviewRating { id: String, review: String, rating: u8 },
}

/// Immutable set of listings with lookup by id.
///
/// Order is the catalog order, which is also the `default` sort order.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range ratings
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(listings.len());

        for (position, listing) in listings.iter().enumerate() {
            if !(0.0..=5.0).contains(&listing.rating) {
                return Err(CatalogError::InvalidRating {
                    id: listing.id.clone(),
                    rating: listing.rating,
                });
            }
            if let Some(review) = listing
                .reviews
                .iter()
                .find(|r| !(MIN_RATING..=MAX_RATING).contains(&r.rating))
            {
                return Err(CatalogError::InvalidReviewRating {
                    id: listing.id.clone(),
                    review: review.id.clone(),
                    rating: review.rating,
                });
            }
            if index.insert(listing.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
        }

        Ok(Self { listings, index })
    }

    /// Parse a JSON array of listings
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let listings: Vec<Listing> = serde_json::from_str(json)?;
        Self::from_listings(listings)
    }

    /// The seed catalog shipped with the service
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED_CATALOG)
    }

    /// Load from `path` if given, else fall back to the seed catalog
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_json(&json)
            }
            None => {
                tracing::warn!("CATALOG_PATH not set, serving the seed catalog");
                Self::seed()
            }
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.index.get(id).map(|&position| &self.listings[position])
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_json(id: &str, rating: f32) -> String {
        format!(
            r#"{{"id":"{id}","title":"t","location":"l","rating":{rating},
                "price_per_night":"100","property_type":"Casa","cancelation_policy":"flex"}}"#
        )
    }

    #[test]
    fn test_seed_catalog_loads() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.listings()[0].id, "lisboa-apartamento-moderno");

        let lisboa = catalog.get("lisboa-apartamento-moderno").unwrap();
        assert_eq!(lisboa.booking_terms.min_nights, 2);
        assert_eq!(lisboa.booking_terms.blocked_dates.len(), 4);
        assert!(!lisboa.reviews.is_empty());
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::seed().unwrap();
        assert!(catalog.get("atlantida").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = format!("[{},{}]", listing_json("a", 4.0), listing_json("a", 3.0));
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let json = format!("[{}]", listing_json("a", 5.5));
        let err = Catalog::from_json(&json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRating { .. }));
    }

    #[test]
    fn test_review_rating_out_of_range_rejected() {
        let json = r#"[{"id":"a","title":"t","location":"l","rating":4.0,
            "price_per_night":"100","property_type":"Casa","cancelation_policy":"flex",
            "reviews":[{"id":"r1","name":"Ana","date":"2025-01-02","rating":0,"text":"ok"}]}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidReviewRating { rating: 0, .. }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Catalog::load(Some(Path::new("/nonexistent/listings.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/listings.json"));
    }
}
