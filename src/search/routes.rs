//! Listing route handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::cache::AppCache;
use crate::error::{AppError, Result};
use crate::AppState;

use super::pipeline::visible_results;
use super::requests::ListingsQuery;
use super::responses::{ListingResponse, ListingsPageResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/listings", get(list))
        .route("/api/listings/:id", get(detail))
}

/// Filtered, sorted and revealed results page
async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListingsQuery>,
) -> Result<Json<ListingsPageResponse>> {
    let params = query.params(state.config.default_page_size)?;
    let key = AppCache::listing_page_key(&params.filters, params.sort, params.page, params.page_size);

    if let Some(page) = state.cache.listing_pages.get(&key).await {
        debug!(key = %key, "Listings cache hit");
        return Ok(Json(page.as_ref().clone()));
    }
    debug!(key = %key, "Listings cache miss");

    let results = visible_results(
        state.catalog.listings(),
        &params.filters,
        params.sort,
        params.page,
        params.page_size,
    );
    let page = ListingsPageResponse::new(
        &results,
        params.sort,
        params.page,
        params.page_size,
        params.filters.active_count(),
    );

    state.cache.listing_pages.insert(key, Arc::new(page.clone())).await;

    Ok(Json(page))
}

/// One listing by id
async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingResponse>> {
    let listing = state.catalog.get(&id).ok_or(AppError::NotFound)?;
    Ok(Json(ListingResponse::from(listing)))
}
