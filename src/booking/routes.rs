//! Booking route handlers

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::calculators::compute_quote;
use super::requests::{check_guests, ListingQuoteRequest, QuoteRequest, ValidateBookingRequest};
use super::responses::{QuoteResponse, ValidationResponse};
use super::services::{quote_listing, validate_listing_form};
use super::validation::{validate_booking_form, BookingForm};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/booking/quote", post(quote))
        .route("/api/booking/validate", post(validate))
        .route("/api/listings/:id/quote", post(listing_quote))
        .route("/api/listings/:id/validate", post(listing_validate))
}

/// Quote a stay with caller-supplied terms
async fn quote(Json(request): Json<QuoteRequest>) -> Result<Json<QuoteResponse>> {
    check_guests(request.guests)?;
    let options = request.terms.options()?;

    let quote = compute_quote(
        request.terms.nightly_rate,
        &request.check_in,
        &request.check_out,
        &options,
    )?;

    Ok(Json(QuoteResponse::new(&quote, request.guests)))
}

/// Validate the booking form with caller-supplied terms
async fn validate(Json(request): Json<ValidateBookingRequest>) -> Result<Json<ValidationResponse>> {
    let options = request.terms.options()?;
    let form = request.masked_form();

    let validation = validate_booking_form(&form, request.terms.nightly_rate, &options);
    tracing::debug!(can_submit = validation.can_submit, "Booking form validated");

    Ok(Json(ValidationResponse::from(&validation)))
}

/// Quote a stay at a catalog listing using its booking terms
async fn listing_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ListingQuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    check_guests(request.guests)?;
    let listing = state.catalog.get(&id).ok_or(AppError::NotFound)?;

    let quote = quote_listing(
        listing,
        &request.check_in,
        &request.check_out,
        state.config.service_fee_rate,
    )?;
    tracing::debug!(listing = %id, nights = quote.nights, total = %quote.total, "Quoted listing");

    Ok(Json(QuoteResponse::new(&quote, request.guests)))
}

/// Validate the booking form for a catalog listing
async fn listing_validate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<BookingForm>,
) -> Result<Json<ValidationResponse>> {
    let listing = state.catalog.get(&id).ok_or(AppError::NotFound)?;
    let validation = validate_listing_form(listing, &form.masked(), state.config.service_fee_rate);

    Ok(Json(ValidationResponse::from(&validation)))
}
