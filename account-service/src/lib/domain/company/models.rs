use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::errors::CompanyIdError;
use crate::domain::company::errors::IcoError;
use crate::domain::contact::models::EmailAddress;
use crate::domain::contact::models::Telephone;

/// Company aggregate entity.
///
/// Logs in with its registration code (ico).
#[derive(Debug, Clone)]
pub struct Company {
    pub id: CompanyId,
    pub company_name: String,
    pub ico: Ico,
    pub email: EmailAddress,
    pub telephone: Telephone,
    pub address: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Company identifier assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompanyId(pub i64);

impl CompanyId {
    /// Parse a company ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a positive integer
    pub fn from_string(s: &str) -> Result<Self, CompanyIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(CompanyIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Company registration code.
///
/// Textual form is all ASCII digits; it doubles as the company's login subject.
/// Stored as an integer, so leading zeros are not kept: `"00123456"` and
/// `"123456"` name the same company and display as `123456`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ico(i64);

impl Ico {
    /// Parse an ico from its textual form.
    ///
    /// # Errors
    /// * `Empty` - Empty input
    /// * `NonNumeric` - Any character that is not an ASCII digit
    /// * `OutOfRange` - Does not fit a 64-bit integer
    pub fn parse(raw: &str) -> Result<Self, IcoError> {
        if raw.is_empty() {
            return Err(IcoError::Empty);
        }
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(IcoError::NonNumeric(raw.to_string()));
        }
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| IcoError::OutOfRange(raw.to_string()))
    }

    /// Wrap a stored value.
    ///
    /// # Errors
    /// * `OutOfRange` - Negative value
    pub fn from_i64(value: i64) -> Result<Self, IcoError> {
        if value < 0 {
            return Err(IcoError::OutOfRange(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Ico {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Company ready to be persisted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub company_name: String,
    pub ico: Ico,
    pub email: EmailAddress,
    pub telephone: Telephone,
    pub address: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Command to register a new company with domain types
#[derive(Debug)]
pub struct CreateCompanyCommand {
    pub company_name: String,
    pub ico: Ico,
    pub email: EmailAddress,
    pub telephone: Telephone,
    pub address: String,
    pub password: String,
}

/// Command to update an existing company.
///
/// All fields are optional to support partial updates.
#[derive(Debug, Default)]
pub struct UpdateCompanyCommand {
    pub company_name: Option<String>,
    pub ico: Option<Ico>,
    pub email: Option<EmailAddress>,
    pub telephone: Option<Telephone>,
    pub address: Option<String>,
    pub password: Option<String>,
}

/// Trim a required text field, rejecting blanks.
pub fn required_text(field: &str, value: String) -> Result<String, CompanyError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(CompanyError::MissingField(field.to_string()));
    }
    Ok(value)
}
