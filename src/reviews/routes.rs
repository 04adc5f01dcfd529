//! Review route handlers

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::AppState;

use super::models::{Review, ReviewSort};
use super::services::{average_rating, rating_breakdown, review_page, RatingBucket};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/listings/:id/reviews", get(list))
}

/// Query parameters for review listing
#[derive(Debug, Deserialize)]
pub struct ReviewsQuery {
    pub sort: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub rating: u8,
    pub text: String,
    pub helpful: u32,
}

impl From<&Review> for ReviewResponse {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.clone(),
            name: review.name.clone(),
            date: review.date,
            rating: review.rating,
            text: review.text.clone(),
            helpful: review.helpful,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub listing_id: String,
    pub listing_rating: f32,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub average_rating: Option<Decimal>,
    pub rating_breakdown: Vec<RatingBucket>,
    pub sort: ReviewSort,
    pub sort_label: String,
    pub page: usize,
    pub total: usize,
    pub has_more: bool,
    pub reviews: Vec<ReviewResponse>,
}

/// Sorted, revealed reviews for one listing
async fn list(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ReviewsQuery>,
) -> Result<Json<ReviewsResponse>> {
    let listing = state.catalog.get(&id).ok_or(AppError::NotFound)?;
    let sort = ReviewSort::from_param(query.sort.as_deref());
    let page = query.page.max(1);

    let revealed = review_page(&listing.reviews, sort, page, state.config.reviews_page_size);

    Ok(Json(ReviewsResponse {
        listing_id: listing.id.clone(),
        listing_rating: listing.rating,
        average_rating: average_rating(&listing.reviews),
        rating_breakdown: rating_breakdown(&listing.reviews),
        sort,
        sort_label: sort.label_pt().to_string(),
        page,
        total: revealed.total,
        has_more: revealed.has_more(),
        reviews: revealed.reviews.into_iter().map(ReviewResponse::from).collect(),
    }))
}
