//! Field-scoped validation for the booking form.
//!
//! The form is driven by two triggers: `on_field_change` for every edit
//! (masks the input, clears stale errors) and `on_field_commit` when the user
//! leaves a field. Nothing here decides whether to submit; callers read
//! `can_submit`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculators::{
    blocked_advisories, compute_quote, validate_range, Advisory, BookingQuote, QuoteOptions,
    RangeReason,
};
use super::dates::{mask_date, validate_date, DateErrorKind, DateField};
use super::guests::GuestCounts;

/// Raw form input as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub guests: GuestCounts,
}

impl BookingForm {
    /// Copy of the form with both date inputs masked as if typed
    pub fn masked(&self) -> BookingForm {
        BookingForm {
            check_in: mask_date(&self.check_in),
            check_out: mask_date(&self.check_out),
            guests: self.guests,
        }
    }

    pub fn field(&self, field: DateField) -> &str {
        match field {
            DateField::CheckIn => &self.check_in,
            DateField::CheckOut => &self.check_out,
        }
    }

    fn field_mut(&mut self, field: DateField) -> &mut String {
        match field {
            DateField::CheckIn => &mut self.check_in,
            DateField::CheckOut => &mut self.check_out,
        }
    }
}

/// Current error per field; `None` means no message shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub check_in: Option<DateErrorKind>,
    pub check_out: Option<DateErrorKind>,
    pub range: Option<RangeReason>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.check_in.is_none() && self.check_out.is_none() && self.range.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, field: DateField, error: Option<DateErrorKind>) {
        match field {
            DateField::CheckIn => self.check_in = error,
            DateField::CheckOut => self.check_out = error,
        }
    }
}

/// Range error for two raw inputs; `None` unless both parse and the range fails
pub fn range_error(check_in: &str, check_out: &str, min_nights: u32) -> Option<RangeReason> {
    let start = validate_date(check_in).ok()?;
    let end = validate_date(check_out).ok()?;
    validate_range(start, end, min_nights).err()
}

/// Result of validating the whole form at once
#[derive(Debug, Clone, PartialEq)]
pub struct BookingValidation {
    pub form: BookingForm,
    pub errors: FieldErrors,
    pub advisories: Vec<Advisory>,
    pub quote: Option<BookingQuote>,
    pub can_submit: bool,
}

/// Validate every field of `form` and price it when valid
pub fn validate_booking_form(
    form: &BookingForm,
    nightly_rate: Decimal,
    options: &QuoteOptions,
) -> BookingValidation {
    let check_in = validate_date(&form.check_in);
    let check_out = validate_date(&form.check_out);

    let (range, advisories) = match (check_in, check_out) {
        (Ok(start), Ok(end)) => (
            validate_range(start, end, options.min_nights).err(),
            blocked_advisories(start, end, &options.blocked_dates),
        ),
        _ => (None, Vec::new()),
    };

    let errors = FieldErrors {
        check_in: check_in.err(),
        check_out: check_out.err(),
        range,
    };
    let quote = compute_quote(nightly_rate, &form.check_in, &form.check_out, options).ok();

    BookingValidation {
        form: form.clone(),
        can_submit: errors.is_empty() && quote.is_some(),
        errors,
        advisories,
        quote,
    }
}

/// Interactive form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFormState {
    pub form: BookingForm,
    pub errors: FieldErrors,
    pub min_nights: u32,
}

impl BookingFormState {
    pub fn new(min_nights: u32) -> Self {
        Self {
            min_nights,
            ..Self::default()
        }
    }

    /// Store a masked edit and clear date errors while the user is typing
    pub fn on_field_change(&mut self, field: DateField, raw: &str) {
        *self.form.field_mut(field) = mask_date(raw);
        self.errors.clear();
    }

    /// Validate the committed field and the range it now forms
    pub fn on_field_commit(&mut self, field: DateField) {
        let error = validate_date(self.form.field(field)).err();
        self.errors.set(field, error);
        self.errors.range = range_error(&self.form.check_in, &self.form.check_out, self.min_nights);
    }

    /// Validate both fields, as on submit. Returns whether submission may go ahead.
    pub fn commit_all(&mut self) -> bool {
        self.on_field_commit(DateField::CheckIn);
        self.on_field_commit(DateField::CheckOut);
        self.can_submit()
    }

    /// True only when both dates parse and the range is bookable
    pub fn can_submit(&self) -> bool {
        validate_date(&self.form.check_in)
            .ok()
            .zip(validate_date(&self.form.check_out).ok())
            .map(|(start, end)| validate_range(start, end, self.min_nights).is_ok())
            .unwrap_or(false)
    }
}
