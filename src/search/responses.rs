//! Response DTOs for listing endpoints.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::booking::responses::MoneyResponse;
use crate::catalog::{Amenity, CancelationPolicy, Listing, PropertyType};

use super::pipeline::VisibleResults;
use super::sort::SortKey;
use super::summary::ResultsSummary;

/// Listing card data
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub id: String,
    pub title: String,
    pub location: String,
    pub rating: f32,
    pub reviews_count: u32,
    pub price_per_night: MoneyResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub property_type: PropertyType,
    pub amenities: BTreeSet<Amenity>,
    pub pet_friendly: bool,
    pub cancelation_policy: CancelationPolicy,
    pub min_nights: u32,
}

impl From<&Listing> for ListingResponse {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            location: listing.location.clone(),
            rating: listing.rating,
            reviews_count: listing.reviews_count,
            price_per_night: MoneyResponse::brl(listing.price_per_night),
            badge: listing.badge.clone(),
            property_type: listing.property_type,
            amenities: listing.amenities.clone(),
            pet_friendly: listing.pet_friendly,
            cancelation_policy: listing.cancelation_policy,
            min_nights: listing.booking_terms.min_nights,
        }
    }
}

/// One revealed results page
#[derive(Debug, Clone, Serialize)]
pub struct ListingsPageResponse {
    pub listings: Vec<ListingResponse>,
    pub sort: SortKey,
    pub page: usize,
    pub page_size: usize,
    pub total_matches: usize,
    pub has_more: bool,
    pub active_filters: usize,
    pub summary: ResultsSummary,
    pub summary_label: String,
}

impl ListingsPageResponse {
    pub fn new(
        results: &VisibleResults<'_>,
        sort: SortKey,
        page: usize,
        page_size: usize,
        active_filters: usize,
    ) -> Self {
        let summary = results.summary();
        Self {
            listings: results.iter().map(ListingResponse::from).collect(),
            sort,
            page,
            page_size,
            total_matches: results.total_matches(),
            has_more: results.has_more(),
            active_filters,
            summary,
            summary_label: summary.label_pt(),
        }
    }
}
