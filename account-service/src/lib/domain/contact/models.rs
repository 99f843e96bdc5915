use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use super::errors::DateError;
use super::errors::EmailError;
use super::errors::TelephoneError;

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    const MIN_LENGTH: usize = 5;
    const MAX_LENGTH: usize = 100;

    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidLength` - Outside 5-100 characters
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_string();
        let length = email.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(EmailError::InvalidLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Telephone number: 1 to 10 decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Telephone(String);

impl Telephone {
    const MAX_DIGITS: usize = 10;

    /// Create a new validated telephone number.
    ///
    /// # Errors
    /// * `Empty` - Blank input
    /// * `NonNumeric` - Contains anything but ASCII digits
    /// * `TooLong` - More than 10 digits
    pub fn new(telephone: String) -> Result<Self, TelephoneError> {
        let telephone = telephone.trim().to_string();
        if telephone.is_empty() {
            return Err(TelephoneError::Empty);
        }
        if !telephone.chars().all(|c| c.is_ascii_digit()) {
            return Err(TelephoneError::NonNumeric);
        }
        if telephone.len() > Self::MAX_DIGITS {
            return Err(TelephoneError::TooLong {
                max: Self::MAX_DIGITS,
                actual: telephone.len(),
            });
        }
        Ok(Self(telephone))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a calendar date as sent by clients.
///
/// Accepts `dd.MM.yyyy` first and falls back to ISO `yyyy-MM-dd`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| DateError::InvalidFormat(raw.to_string()))
}
