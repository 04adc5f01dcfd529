//! Booking calculator.
//!
//! Turns a nightly rate, fee terms and a `dd/mm/yyyy` date range into a
//! validated price breakdown, and drives field-level validation of the
//! booking form.

pub mod calculators;
pub mod dates;
pub mod guests;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod validation;

// Re-export commonly used items
pub use calculators::{
    compute_quote, price_breakdown, round_money, Advisory, BookingQuote, PriceBreakdown,
    QuoteError, QuoteOptions, RangeReason,
};
pub use dates::{
    diff_days, format_date, mask_date, parse_date, validate_date, BlockedDates, DateErrorKind,
    DateField,
};
pub use guests::{GuestCounts, GuestLimits, GuestType, Stepper, MIN_ADULTS};
pub use routes::router;
pub use validation::{validate_booking_form, BookingForm, BookingFormState, BookingValidation, FieldErrors};
