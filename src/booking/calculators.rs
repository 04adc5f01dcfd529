//! Core booking quote calculation.
//!
//! Pure functions for stay pricing - no I/O, no shared state. Every failure
//! is returned as a `QuoteError` value for the caller to surface per field.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use super::dates::{diff_days, format_date, validate_date, BlockedDates, DateErrorKind, DateField};

/// Round to `places` decimals, halves away from zero.
///
/// For the non-negative amounts a quote deals in this is the usual
/// "round half up" used when fees are shown in whole currency units.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use temporada_web::booking::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(71.49), 0), dec!(71));
/// assert_eq!(round_money(dec!(1.235), 2), dec!(1.24));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Why a date range cannot be booked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RangeReason {
    CheckoutBeforeCheckin,
    BelowMinimumStay { nights: u32, min_nights: u32 },
}

impl RangeReason {
    pub fn code(&self) -> &'static str {
        match self {
            RangeReason::CheckoutBeforeCheckin => "checkout_before_checkin",
            RangeReason::BelowMinimumStay { .. } => "below_minimum_stay",
        }
    }

    pub fn message_pt(&self) -> String {
        match self {
            RangeReason::CheckoutBeforeCheckin => "Check-out deve ser após o check-in".to_string(),
            RangeReason::BelowMinimumStay { min_nights, .. } => {
                let unit = if *min_nights == 1 { "noite" } else { "noites" };
                format!("Estadia mínima de {} {}", min_nights, unit)
            }
        }
    }
}

impl fmt::Display for RangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Quote validation failure. Always recoverable by editing the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("invalid {field} date ({kind})")]
    InvalidDate { field: DateField, kind: DateErrorKind },

    #[error("invalid stay range ({0})")]
    Range(RangeReason),

    /// Rate, fees and nights multiply past what a `Decimal` can hold
    #[error("quote amount out of range")]
    AmountOutOfRange,
}

impl QuoteError {
    /// Locale-independent error code
    pub fn code(&self) -> &'static str {
        match self {
            QuoteError::InvalidDate { .. } => "invalid_date",
            QuoteError::Range(reason) => reason.code(),
            QuoteError::AmountOutOfRange => "amount_out_of_range",
        }
    }

    pub fn message_pt(&self) -> String {
        match self {
            QuoteError::InvalidDate { kind, .. } => kind.message_pt().to_string(),
            QuoteError::Range(reason) => reason.message_pt(),
            QuoteError::AmountOutOfRange => "Valor da estadia fora do limite".to_string(),
        }
    }
}

/// Non-blocking notice attached to an otherwise valid quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// A stay endpoint falls on a date the host marked unavailable
    BlockedDate { field: DateField, date: String },
}

impl Advisory {
    pub fn message_pt(&self) -> String {
        match self {
            Advisory::BlockedDate { date, .. } => format!("Data indisponível: {}", date),
        }
    }
}

/// Fee parameters for a quote. All of them are chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteOptions {
    /// Flat fee charged once per stay
    pub cleaning_fee: Decimal,
    /// Fraction of the subtotal, between 0 and 1
    pub service_fee_rate: Decimal,
    pub min_nights: u32,
    pub blocked_dates: BlockedDates,
}

impl QuoteOptions {
    pub fn new(cleaning_fee: Decimal, service_fee_rate: Decimal) -> Self {
        Self {
            cleaning_fee,
            service_fee_rate,
            min_nights: 1,
            blocked_dates: BlockedDates::new(),
        }
    }

    pub fn with_min_nights(mut self, min_nights: u32) -> Self {
        self.min_nights = min_nights;
        self
    }

    pub fn with_blocked_dates(mut self, blocked_dates: BlockedDates) -> Self {
        self.blocked_dates = blocked_dates;
        self
    }
}

/// Subtotal, fees and total for a number of nights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub service_fee: Decimal,
    pub cleaning_fee: Decimal,
    pub total: Decimal,
}

/// Price `nights` at `nightly_rate`.
///
/// The service fee is rounded to whole units; the cleaning fee only applies
/// to a stay of at least one night. Fails with `AmountOutOfRange` instead of
/// overflowing.
pub fn price_breakdown(
    nightly_rate: Decimal,
    nights: u32,
    options: &QuoteOptions,
) -> Result<PriceBreakdown, QuoteError> {
    let subtotal = nightly_rate
        .checked_mul(Decimal::from(nights))
        .ok_or(QuoteError::AmountOutOfRange)?;
    let service_fee = subtotal
        .checked_mul(options.service_fee_rate)
        .map(|fee| round_money(fee, 0))
        .ok_or(QuoteError::AmountOutOfRange)?;
    let cleaning_fee = if nights > 0 {
        options.cleaning_fee
    } else {
        Decimal::ZERO
    };
    let total = subtotal
        .checked_add(service_fee)
        .and_then(|sum| sum.checked_add(cleaning_fee))
        .ok_or(QuoteError::AmountOutOfRange)?;

    Ok(PriceBreakdown {
        subtotal,
        service_fee,
        cleaning_fee,
        total,
    })
}

/// A priced stay
#[derive(Debug, Clone, PartialEq)]
pub struct BookingQuote {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: u32,
    pub nightly_rate: Decimal,
    pub subtotal: Decimal,
    pub service_fee: Decimal,
    pub cleaning_fee: Decimal,
    pub total: Decimal,
    pub advisories: Vec<Advisory>,
}

/// Check that `check_out` is after `check_in` and the stay is long enough.
///
/// Returns the number of nights on success.
pub fn validate_range(
    check_in: NaiveDate,
    check_out: NaiveDate,
    min_nights: u32,
) -> Result<u32, RangeReason> {
    let span = diff_days(check_in, check_out);
    if span <= 0 {
        return Err(RangeReason::CheckoutBeforeCheckin);
    }

    let nights = u32::try_from(span).unwrap_or(u32::MAX);
    if nights < min_nights {
        return Err(RangeReason::BelowMinimumStay { nights, min_nights });
    }

    Ok(nights)
}

/// Blocked-date notices for the two stay endpoints
pub fn blocked_advisories(
    check_in: NaiveDate,
    check_out: NaiveDate,
    blocked: &BlockedDates,
) -> Vec<Advisory> {
    [(DateField::CheckIn, check_in), (DateField::CheckOut, check_out)]
        .into_iter()
        .filter(|(_, date)| blocked.contains(*date))
        .map(|(field, date)| Advisory::BlockedDate {
            field,
            date: format_date(date),
        })
        .collect()
}

/// Compute a quote for a stay from `check_in` to `check_out` (`dd/mm/yyyy`).
///
/// Validation runs in order and stops at the first failure:
/// 1. check-in parses
/// 2. check-out parses
/// 3. check-out is strictly after check-in
/// 4. the stay is at least `min_nights` long
/// 5. the amounts fit in a `Decimal`
///
/// Blocked endpoints never fail the quote; they are reported as advisories.
pub fn compute_quote(
    nightly_rate: Decimal,
    check_in: &str,
    check_out: &str,
    options: &QuoteOptions,
) -> Result<BookingQuote, QuoteError> {
    let start = validate_date(check_in).map_err(|kind| QuoteError::InvalidDate {
        field: DateField::CheckIn,
        kind,
    })?;
    let end = validate_date(check_out).map_err(|kind| QuoteError::InvalidDate {
        field: DateField::CheckOut,
        kind,
    })?;

    let nights = validate_range(start, end, options.min_nights).map_err(QuoteError::Range)?;
    let price = price_breakdown(nightly_rate, nights, options)?;

    Ok(BookingQuote {
        check_in: start,
        check_out: end,
        nights,
        nightly_rate,
        subtotal: price.subtotal,
        service_fee: price.service_fee,
        cleaning_fee: price.cleaning_fee,
        total: price.total,
        advisories: blocked_advisories(start, end, &options.blocked_dates),
    })
}
