use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Duration;
use chrono::NaiveDate;
use chrono::Utc;

use crate::domain::contact::models::EmailAddress;
use crate::domain::contact::models::Telephone;
use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::errors::CustomerIdError;

/// Customer aggregate entity.
///
/// Logs in with its email address.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub surname: String,
    pub city: String,
    pub telephone: Telephone,
    pub birthdate: NaiveDate,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Customer identifier assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomerId(pub i64);

impl CustomerId {
    /// Parse a customer ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a positive integer
    pub fn from_string(s: &str) -> Result<Self, CustomerIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(CustomerIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role indicator stored with every customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role(pub i32);

impl Role {
    pub const BASIC_USER: Role = Role(1);
}

impl Default for Role {
    fn default() -> Self {
        Self::BASIC_USER
    }
}

/// Customer ready to be persisted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub surname: String,
    pub city: String,
    pub telephone: Telephone,
    pub birthdate: NaiveDate,
    pub email: EmailAddress,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Command to register a new customer with domain types
#[derive(Debug)]
pub struct CreateCustomerCommand {
    pub name: String,
    pub surname: String,
    pub city: String,
    pub telephone: Telephone,
    pub birthdate: NaiveDate,
    pub email: EmailAddress,
    pub password: String,
}

/// Command replacing a customer's profile.
///
/// Every field but the password is required; the password changes only when given.
#[derive(Debug)]
pub struct UpdateProfileCommand {
    pub name: String,
    pub surname: String,
    pub city: String,
    pub telephone: Telephone,
    pub birthdate: NaiveDate,
    pub email: EmailAddress,
    pub password: Option<String>,
}

/// Look-back window for registration statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationWindow {
    Last24Hours,
    Last7Days,
    Last30Days,
    Last365Days,
}

impl RegistrationWindow {
    pub fn duration(&self) -> Duration {
        match self {
            RegistrationWindow::Last24Hours => Duration::hours(24),
            RegistrationWindow::Last7Days => Duration::days(7),
            RegistrationWindow::Last30Days => Duration::days(30),
            RegistrationWindow::Last365Days => Duration::days(365),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationWindow::Last24Hours => "24h",
            RegistrationWindow::Last7Days => "7d",
            RegistrationWindow::Last30Days => "30d",
            RegistrationWindow::Last365Days => "365d",
        }
    }
}

impl FromStr for RegistrationWindow {
    type Err = CustomerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(RegistrationWindow::Last24Hours),
            "7d" => Ok(RegistrationWindow::Last7Days),
            "30d" => Ok(RegistrationWindow::Last30Days),
            "365d" => Ok(RegistrationWindow::Last365Days),
            other => Err(CustomerError::InvalidWindow(other.to_string())),
        }
    }
}

/// Trim a required text field, rejecting blanks.
pub fn required_text(field: &str, value: String) -> Result<String, CustomerError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(CustomerError::MissingField(field.to_string()));
    }
    Ok(value)
}
