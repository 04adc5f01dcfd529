//! Request DTOs for booking API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppError;

use super::calculators::QuoteOptions;
use super::dates::BlockedDates;
use super::guests::GuestCounts;
use super::validation::BookingForm;

/// Pricing terms supplied by the caller
#[derive(Debug, Deserialize)]
pub struct QuoteTermsRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub nightly_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cleaning_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub service_fee_rate: Decimal,
    #[serde(default = "default_min_nights")]
    pub min_nights: u32,
    #[serde(default)]
    pub blocked_dates: Vec<String>,
}

fn default_min_nights() -> u32 {
    1
}

fn default_guests() -> u32 {
    1
}

impl QuoteTermsRequest {
    /// Check the terms and turn them into calculator options
    pub fn options(&self) -> Result<QuoteOptions, AppError> {
        if self.nightly_rate < Decimal::ZERO {
            return Err(AppError::BadRequest("nightly_rate must not be negative".to_string()));
        }
        if self.cleaning_fee < Decimal::ZERO {
            return Err(AppError::BadRequest("cleaning_fee must not be negative".to_string()));
        }
        if self.service_fee_rate < Decimal::ZERO || self.service_fee_rate > Decimal::ONE {
            return Err(AppError::BadRequest(
                "service_fee_rate must be between 0 and 1".to_string(),
            ));
        }

        Ok(QuoteOptions::new(self.cleaning_fee, self.service_fee_rate)
            .with_min_nights(self.min_nights)
            .with_blocked_dates(self.blocked_dates.iter().collect::<BlockedDates>()))
    }
}

/// Request to quote a stay with explicit terms
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(flatten)]
    pub terms: QuoteTermsRequest,
    pub check_in: String,
    pub check_out: String,
    #[serde(default = "default_guests")]
    pub guests: u32,
}

/// Request to quote a stay at a catalog listing
#[derive(Debug, Deserialize)]
pub struct ListingQuoteRequest {
    pub check_in: String,
    pub check_out: String,
    #[serde(default = "default_guests")]
    pub guests: u32,
}

/// Request to validate the booking form as typed
#[derive(Debug, Deserialize)]
pub struct ValidateBookingRequest {
    #[serde(flatten)]
    pub terms: QuoteTermsRequest,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub guests: GuestCounts,
}

impl ValidateBookingRequest {
    /// The form with both date inputs masked as if typed
    pub fn masked_form(&self) -> BookingForm {
        BookingForm {
            check_in: self.check_in.clone(),
            check_out: self.check_out.clone(),
            guests: self.guests,
        }
        .masked()
    }
}

pub fn check_guests(guests: u32) -> Result<(), AppError> {
    if guests == 0 {
        return Err(AppError::BadRequest("guests must be at least 1".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_request_deserialize() {
        let json = r#"{
            "nightly_rate": "200",
            "cleaning_fee": "80",
            "service_fee_rate": "0.12",
            "check_in": "10/11/2024",
            "check_out": "13/11/2024"
        }"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.terms.nightly_rate, dec!(200));
        assert_eq!(request.terms.min_nights, 1);
        assert_eq!(request.guests, 1);

        let options = request.terms.options().unwrap();
        assert_eq!(options.service_fee_rate, dec!(0.12));
        assert!(options.blocked_dates.is_empty());
    }

    #[test]
    fn test_terms_validation() {
        let mut terms = QuoteTermsRequest {
            nightly_rate: dec!(100),
            cleaning_fee: dec!(0),
            service_fee_rate: dec!(1.2),
            min_nights: 1,
            blocked_dates: vec![],
        };
        assert!(matches!(terms.options(), Err(AppError::BadRequest(_))));

        terms.service_fee_rate = dec!(0.1);
        terms.nightly_rate = dec!(-1);
        assert!(matches!(terms.options(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_masked_form() {
        let json = r#"{
            "nightly_rate": "200",
            "cleaning_fee": "80",
            "service_fee_rate": "0.12",
            "check_in": "10112024",
            "check_out": "13.11.2024",
            "guests": {"adults": 2, "pets": 1}
        }"#;
        let request: ValidateBookingRequest = serde_json::from_str(json).unwrap();
        let form = request.masked_form();
        assert_eq!(form.check_in, "10/11/2024");
        assert_eq!(form.check_out, "13/11/2024");
        assert_eq!(form.guests.pets, 1);
    }

    #[test]
    fn test_check_guests() {
        assert!(check_guests(0).is_err());
        assert!(check_guests(3).is_ok());
    }
}
