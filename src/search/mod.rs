//! Results pipeline: filter the catalog, sort the matches, reveal pages.

pub mod filters;
pub mod pipeline;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod session;
pub mod sort;
pub mod summary;

pub use filters::{filter_listings, FilterSpec, PriceRange};
pub use pipeline::{page_count, visible_results, VisibleResults};
pub use requests::{ListingsParams, ListingsQuery};
pub use responses::{ListingResponse, ListingsPageResponse};
pub use routes::router;
pub use session::SearchSession;
pub use sort::SortKey;
pub use summary::ResultsSummary;
