//! Stay catalog: listing models and the read-only store they are loaded into.

pub mod loader;
pub mod models;

pub use loader::{Catalog, CatalogError};
pub use models::{Amenity, BookingTerms, CancelationPolicy, Listing, PropertyType, UnknownVariant};
