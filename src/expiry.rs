//! Expiry date validation.
//!
//! The expiry date must be entered as `MM/YY` and must not lie before the
//! current month. The current month is passed in as a [`YearMonth`] so the
//! validator itself never reads the clock.
//!
//! The month is not range-checked: `13/25` is accepted. There is no upper
//! bound on the year either.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::{validate_expiry, YearMonth};
//!
//! let today = YearMonth::new(2025, 3).unwrap();
//!
//! assert!(validate_expiry("03/25", today).is_ok());
//! assert!(validate_expiry("02/25", today).is_err());
//! assert!(validate_expiry("3/25", today).is_err());
//! ```

use crate::error::FormatReason;
use crate::number::is_digits;
use crate::{Field, FieldError};
use chrono::Datelike;
use std::fmt;
use std::str::FromStr;

/// A calendar month, used as "today" when checking for expired cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    /// Four-digit year (e.g., 2025)
    year: u16,
    /// Month (1-12)
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair.
    ///
    /// Returns `None` if the month is not 1-12.
    pub fn new(year: u16, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Creates a year/month pair, forcing the month into 1-12.
    pub(crate) fn clamped(year: u16, month: u8) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// Returns the month containing `date`.
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self::clamped(
            date.year().clamp(0, i32::from(u16::MAX)) as u16,
            date.month() as u8,
        )
    }

    /// Returns the current month from the local wall clock.
    pub fn now() -> Self {
        Self::from_date(&chrono::Local::now())
    }

    /// Parses the `YYYY-MM` form, e.g. `2025-03`.
    ///
    /// # Example
    ///
    /// ```
    /// use card_form::expiry::YearMonth;
    ///
    /// let today = YearMonth::parse("2025-03").unwrap();
    /// assert_eq!(today.year(), 2025);
    /// assert_eq!(today.month(), 3);
    /// assert!(YearMonth::parse("2025-13").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ClockError> {
        let (year_str, month_str) = input
            .trim()
            .split_once('-')
            .ok_or(ClockError::InvalidFormat)?;

        if year_str.len() != 4
            || month_str.is_empty()
            || month_str.len() > 2
            || !is_digits(year_str)
            || !is_digits(month_str)
        {
            return Err(ClockError::InvalidFormat);
        }

        let year: u16 = year_str.parse().map_err(|_| ClockError::InvalidFormat)?;
        let month: u8 = month_str.parse().map_err(|_| ClockError::InvalidFormat)?;

        Self::new(year, month).ok_or(ClockError::InvalidMonth(month))
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the last two digits of the year.
    #[inline]
    pub const fn short_year(&self) -> u8 {
        (self.year % 100) as u8
    }

    /// Formats as `MM/YY`, the shape the expiry input expects.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month, self.short_year())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors from parsing a [`YearMonth`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// Not in `YYYY-MM` form.
    InvalidFormat,
    /// Month is out of range (must be 1-12).
    InvalidMonth(u8),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid month format (expected YYYY-MM)"),
            Self::InvalidMonth(m) => write!(f, "invalid month {}: must be 1-12", m),
        }
    }
}

impl std::error::Error for ClockError {}

/// An accepted `MM/YY` expiry date.
///
/// Holds the two-digit values exactly as entered; the month may be outside
/// 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryDate {
    month: u8,
    year: u8,
}

impl ExpiryDate {
    /// Returns the two-digit month as entered.
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the two-digit year as entered.
    #[inline]
    pub const fn year(&self) -> u8 {
        self.year
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

/// Splits `MM/YY` into its two numbers, or `None` if the shape is wrong.
fn parse_mm_yy(input: &str) -> Option<(u8, u8)> {
    match input.as_bytes() {
        [m1, m2, b'/', y1, y2]
            if [m1, m2, y1, y2].iter().all(|b| b.is_ascii_digit()) =>
        {
            Some(((m1 - b'0') * 10 + (m2 - b'0'), (y1 - b'0') * 10 + (y2 - b'0')))
        }
        _ => None,
    }
}

/// Validates an `MM/YY` expiry date against the current month.
///
/// Fails with [`FieldError::Blank`] for empty input, and with
/// [`FieldError::Format`] if the shape is wrong or the date is before `today`.
/// Years compare on their last two digits.
///
/// # Example
///
/// ```
/// use card_form::expiry::{validate_expiry, YearMonth};
///
/// let today = YearMonth::new(2025, 3).unwrap();
///
/// let exp = validate_expiry("01/26", today).unwrap();
/// assert_eq!(exp.month(), 1);
/// assert_eq!(exp.year(), 26);
///
/// // Month is not range-checked
/// assert!(validate_expiry("13/25", today).is_ok());
/// ```
pub fn validate_expiry(input: &str, today: YearMonth) -> Result<ExpiryDate, FieldError> {
    if input.is_empty() {
        return Err(FieldError::Blank(Field::Expiry));
    }

    let (month, year) = parse_mm_yy(input).ok_or(FieldError::Format {
        field: Field::Expiry,
        reason: FormatReason::Shape,
    })?;

    let current_year = today.short_year();
    if year < current_year || (year == current_year && month < today.month()) {
        return Err(FieldError::Format {
            field: Field::Expiry,
            reason: FormatReason::Expired { month, year },
        });
    }

    Ok(ExpiryDate { month, year })
}

/// Checks if a string is a valid, unexpired `MM/YY` date.
#[inline]
pub fn is_valid_expiry(input: &str, today: YearMonth) -> bool {
    validate_expiry(input, today).is_ok()
}
