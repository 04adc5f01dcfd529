//! `dd/mm/yyyy` date handling for the booking form.
//!
//! Pure functions, no I/O. Dates are calendar dates without a time zone, so
//! night counts never drift across daylight-saving changes.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Which date input of the booking form a message refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    CheckIn,
    CheckOut,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::CheckIn => "checkin",
            DateField::CheckOut => "checkout",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a date string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateErrorKind {
    /// Nothing was typed
    Missing,
    /// Not shaped like `dd/mm/yyyy`
    Format,
    /// Shaped correctly but not a real calendar date
    Calendar,
}

impl DateErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            DateErrorKind::Missing => "missing",
            DateErrorKind::Format => "format",
            DateErrorKind::Calendar => "calendar",
        }
    }

    pub fn message_pt(&self) -> &'static str {
        match self {
            DateErrorKind::Missing => "Informe a data",
            DateErrorKind::Format => "Use o formato dia/mês/ano",
            DateErrorKind::Calendar => "Data inválida",
        }
    }
}

impl fmt::Display for DateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Reformat raw keystrokes into `dd/mm/yyyy`.
///
/// Non-digits are dropped, at most 8 digits are kept and `/` is inserted
/// after the day and month digits once the user has typed past them.
///
/// # Examples
/// ```
/// use temporada_web::booking::mask_date;
///
/// assert_eq!(mask_date("1"), "1");
/// assert_eq!(mask_date("1011"), "10/11");
/// assert_eq!(mask_date("10112024"), "10/11/2024");
/// assert_eq!(mask_date("10-11-2024 99"), "10/11/2024");
/// ```
pub fn mask_date(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(8).collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Validate a `dd/mm/yyyy` string, reporting why it failed.
///
/// Years below 100 are rejected: the form only accepts four-digit years that
/// name a real calendar year.
pub fn validate_date(value: &str) -> Result<NaiveDate, DateErrorKind> {
    if value.is_empty() {
        return Err(DateErrorKind::Missing);
    }

    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shaped {
        return Err(DateErrorKind::Format);
    }

    // All component bytes are ASCII digits, so these parses cannot fail.
    let day: u32 = value[0..2].parse().map_err(|_| DateErrorKind::Format)?;
    let month: u32 = value[3..5].parse().map_err(|_| DateErrorKind::Format)?;
    let year: i32 = value[6..10].parse().map_err(|_| DateErrorKind::Format)?;

    if year < 100 {
        return Err(DateErrorKind::Calendar);
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateErrorKind::Calendar)
}

/// Parse a `dd/mm/yyyy` string into a calendar date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    validate_date(value).ok()
}

/// Format a date as `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Whole days from `start` to `end`; negative when `end` is earlier
pub fn diff_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Dates the host has marked unavailable.
///
/// Entries that are not valid `dd/mm/yyyy` dates can never match a parsed
/// endpoint, so they are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDates(BTreeSet<NaiveDate>);

impl BlockedDates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for BlockedDates {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter_map(|value| parse_date(value.as_ref()))
                .collect(),
        )
    }
}
