//! Quoting against catalog listings.

use rust_decimal::Decimal;

use crate::catalog::Listing;

use super::calculators::{compute_quote, BookingQuote, QuoteError, QuoteOptions};
use super::dates::BlockedDates;
use super::validation::{validate_booking_form, BookingForm, BookingValidation};

/// Calculator options from a listing's booking terms.
///
/// `default_fee_rate` applies when the listing does not set its own rate.
pub fn listing_options(listing: &Listing, default_fee_rate: Decimal) -> QuoteOptions {
    let terms = &listing.booking_terms;
    QuoteOptions::new(
        terms.cleaning_fee,
        terms.service_fee_rate.unwrap_or(default_fee_rate),
    )
    .with_min_nights(terms.min_nights)
    .with_blocked_dates(terms.blocked_dates.iter().collect::<BlockedDates>())
}

/// Quote a stay at `listing` for `dd/mm/yyyy` dates
pub fn quote_listing(
    listing: &Listing,
    check_in: &str,
    check_out: &str,
    default_fee_rate: Decimal,
) -> Result<BookingQuote, QuoteError> {
    let options = listing_options(listing, default_fee_rate);
    compute_quote(listing.price_per_night, check_in, check_out, &options)
}

/// Validate a booking form against `listing`
pub fn validate_listing_form(
    listing: &Listing,
    form: &BookingForm,
    default_fee_rate: Decimal,
) -> BookingValidation {
    let options = listing_options(listing, default_fee_rate);
    validate_booking_form(form, listing.price_per_night, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{Advisory, RangeReason};
    use crate::catalog::Catalog;
    use rust_decimal_macros::dec;

    #[test]
    fn test_listing_options_uses_terms() {
        let catalog = Catalog::seed().unwrap();
        let lisboa = catalog.get("lisboa-apartamento-moderno").unwrap();
        let options = listing_options(lisboa, dec!(0.12));

        assert_eq!(options.cleaning_fee, dec!(80));
        assert_eq!(options.service_fee_rate, dec!(0.12));
        assert_eq!(options.min_nights, 2);
        assert_eq!(options.blocked_dates.len(), 4);
    }

    #[test]
    fn test_listing_fee_rate_override() {
        let catalog = Catalog::seed().unwrap();
        let penthouse = catalog.get("buenos-aires-penthouse-rooftop").unwrap();
        assert_eq!(listing_options(penthouse, dec!(0.12)).service_fee_rate, dec!(0.10));
    }

    #[test]
    fn test_quote_listing() {
        let catalog = Catalog::seed().unwrap();
        let lisboa = catalog.get("lisboa-apartamento-moderno").unwrap();

        // 540 * 3 = 1620, fee 194.4 -> 194, cleaning 80
        let quote = quote_listing(lisboa, "10/11/2025", "13/11/2025", dec!(0.12)).unwrap();
        assert_eq!(quote.subtotal, dec!(1620));
        assert_eq!(quote.service_fee, dec!(194));
        assert_eq!(quote.total, dec!(1894));

        let err = quote_listing(lisboa, "10/11/2025", "11/11/2025", dec!(0.12)).unwrap_err();
        assert_eq!(
            err,
            QuoteError::Range(RangeReason::BelowMinimumStay {
                nights: 1,
                min_nights: 2
            })
        );
    }

    #[test]
    fn test_quote_listing_on_blocked_dates() {
        let catalog = Catalog::seed().unwrap();
        let lisboa = catalog.get("lisboa-apartamento-moderno").unwrap();

        let quote = quote_listing(lisboa, "22/12/2025", "25/12/2025", dec!(0.12)).unwrap();
        assert!(matches!(
            quote.advisories.as_slice(),
            [Advisory::BlockedDate { date, .. }] if date == "25/12/2025"
        ));
    }

    #[test]
    fn test_validate_listing_form() {
        let catalog = Catalog::seed().unwrap();
        let porto = catalog.get("porto-villa-mediterranea").unwrap();
        let form = BookingForm {
            check_in: "01/03/2026".to_string(),
            check_out: "03/03/2026".to_string(),
            ..BookingForm::default()
        };

        let validation = validate_listing_form(porto, &form, dec!(0.12));
        assert!(!validation.can_submit);
        assert_eq!(
            validation.errors.range,
            Some(RangeReason::BelowMinimumStay {
                nights: 2,
                min_nights: 4
            })
        );
    }
}
