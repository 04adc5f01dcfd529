//! Response DTOs for booking API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::format_brl;

use super::calculators::{Advisory, BookingQuote, RangeReason};
use super::dates::{format_date, DateErrorKind};
use super::validation::{BookingValidation, FieldErrors};

pub const CURRENCY: &str = "BRL";

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    /// pt-BR display string, e.g. `R$ 752,00`
    pub display: String,
}

impl MoneyResponse {
    pub fn brl(amount: Decimal) -> Self {
        Self {
            amount,
            currency: CURRENCY.to_string(),
            display: format_brl(amount),
        }
    }
}

/// Advisory with its display message
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryResponse {
    #[serde(flatten)]
    pub advisory: Advisory,
    pub message: String,
}

impl From<&Advisory> for AdvisoryResponse {
    fn from(advisory: &Advisory) -> Self {
        Self {
            message: advisory.message_pt(),
            advisory: advisory.clone(),
        }
    }
}

/// Response for a quote calculation
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub check_in: String,
    pub check_out: String,
    pub nights: u32,
    pub guests: u32,
    pub nightly_rate: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub service_fee: MoneyResponse,
    pub cleaning_fee: MoneyResponse,
    pub total: MoneyResponse,
    pub advisories: Vec<AdvisoryResponse>,
}

impl QuoteResponse {
    pub fn new(quote: &BookingQuote, guests: u32) -> Self {
        Self {
            check_in: format_date(quote.check_in),
            check_out: format_date(quote.check_out),
            nights: quote.nights,
            guests,
            nightly_rate: MoneyResponse::brl(quote.nightly_rate),
            subtotal: MoneyResponse::brl(quote.subtotal),
            service_fee: MoneyResponse::brl(quote.service_fee),
            cleaning_fee: MoneyResponse::brl(quote.cleaning_fee),
            total: MoneyResponse::brl(quote.total),
            advisories: quote.advisories.iter().map(AdvisoryResponse::from).collect(),
        }
    }
}

/// One field-scoped message
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<DateErrorKind> for FieldErrorResponse {
    fn from(kind: DateErrorKind) -> Self {
        Self {
            code: kind.code().to_string(),
            message: kind.message_pt().to_string(),
        }
    }
}

impl From<RangeReason> for FieldErrorResponse {
    fn from(reason: RangeReason) -> Self {
        Self {
            code: reason.code().to_string(),
            message: reason.message_pt(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorsResponse {
    pub check_in: Option<FieldErrorResponse>,
    pub check_out: Option<FieldErrorResponse>,
    pub range: Option<FieldErrorResponse>,
}

impl From<&FieldErrors> for FieldErrorsResponse {
    fn from(errors: &FieldErrors) -> Self {
        Self {
            check_in: errors.check_in.map(Into::into),
            check_out: errors.check_out.map(Into::into),
            range: errors.range.map(Into::into),
        }
    }
}

/// Response for booking form validation
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    pub check_in: String,
    pub check_out: String,
    pub guests_label: String,
    pub errors: FieldErrorsResponse,
    pub advisories: Vec<AdvisoryResponse>,
    pub quote: Option<QuoteResponse>,
    pub can_submit: bool,
}

impl From<&BookingValidation> for ValidationResponse {
    fn from(validation: &BookingValidation) -> Self {
        let guests = validation.form.guests.submitted_guests();
        Self {
            check_in: validation.form.check_in.clone(),
            check_out: validation.form.check_out.clone(),
            guests_label: validation.form.guests.label_pt(),
            errors: FieldErrorsResponse::from(&validation.errors),
            advisories: validation.advisories.iter().map(AdvisoryResponse::from).collect(),
            quote: validation
                .quote
                .as_ref()
                .map(|quote| QuoteResponse::new(quote, guests)),
            can_submit: validation.can_submit,
        }
    }
}
