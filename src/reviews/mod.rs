//! Guest reviews attached to catalog listings.

pub mod models;
pub mod routes;
pub mod services;

pub use models::{Review, ReviewDraft, ReviewDraftError, ReviewSort};
pub use routes::router;
pub use services::{average_rating, rating_breakdown, review_page, sort_reviews, RatingBucket, ReviewPage};
