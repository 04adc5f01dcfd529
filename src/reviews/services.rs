//! Review ordering, statistics and paging.

use std::cmp::Reverse;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::models::{Review, ReviewSort, MAX_RATING, MIN_RATING};

/// Number of reviews with a given star rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingBucket {
    pub rating: u8,
    pub count: usize,
}

/// Reviews in display order. The sort is stable.
pub fn sort_reviews(reviews: &[Review], sort: ReviewSort) -> Vec<&Review> {
    let mut sorted: Vec<&Review> = reviews.iter().collect();
    match sort {
        ReviewSort::Recent => sorted.sort_by_key(|r| Reverse(r.date)),
        ReviewSort::Best => sorted.sort_by_key(|r| (Reverse(r.rating), Reverse(r.helpful))),
        ReviewSort::Worst => sorted.sort_by_key(|r| (r.rating, Reverse(r.helpful))),
    }
    sorted
}

/// Counts per star rating from 5 down to 1; every bucket is present
pub fn rating_breakdown(reviews: &[Review]) -> Vec<RatingBucket> {
    (MIN_RATING..=MAX_RATING)
        .rev()
        .map(|rating| RatingBucket {
            rating,
            count: reviews.iter().filter(|r| r.rating == rating).count(),
        })
        .collect()
}

/// Mean rating to two decimals, `None` without reviews
pub fn average_rating(reviews: &[Review]) -> Option<Decimal> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = Decimal::from(sum) / Decimal::from(reviews.len() as u64);
    Some(mean.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Revealed prefix of sorted reviews
#[derive(Debug, Clone)]
pub struct ReviewPage<'a> {
    pub reviews: Vec<&'a Review>,
    pub total: usize,
}

impl ReviewPage<'_> {
    pub fn has_more(&self) -> bool {
        self.reviews.len() < self.total
    }
}

/// First `page * page_size` reviews in `sort` order
pub fn review_page(reviews: &[Review], sort: ReviewSort, page: usize, page_size: usize) -> ReviewPage<'_> {
    let mut sorted = sort_reviews(reviews, sort);
    let total = sorted.len();
    sorted.truncate(page.max(1).saturating_mul(page_size.max(1)));
    ReviewPage {
        reviews: sorted,
        total,
    }
}
