use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::company::models::CompanyId;
use crate::domain::product::errors::PriceError;
use crate::domain::product::errors::ProductError;
use crate::domain::product::errors::ProductIdError;

/// Service or product offered by a company.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub company_id: CompanyId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// Product identifier assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Parse a product ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a positive integer
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(ProductIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Price as entered, e.g. `49.90`.
///
/// Whole units with an optional decimal part of one or two digits; a decimal
/// comma is accepted and stored as a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price(String);

impl Price {
    const MAX_LENGTH: usize = 10;

    /// # Errors
    /// * `Empty` - Blank input
    /// * `TooLong` - More than 10 characters
    /// * `InvalidFormat` - Not a non-negative amount with at most two decimals
    pub fn new(price: String) -> Result<Self, PriceError> {
        let price = price.trim().replace(',', ".");
        if price.is_empty() {
            return Err(PriceError::Empty);
        }
        if price.len() > Self::MAX_LENGTH {
            return Err(PriceError::TooLong {
                max: Self::MAX_LENGTH,
                actual: price.len(),
            });
        }

        let (units, cents) = match price.split_once('.') {
            Some((units, cents)) => (units, Some(cents)),
            None => (price.as_str(), None),
        };
        let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        let valid = digits(units) && cents.map_or(true, |c| digits(c) && c.len() <= 2);
        if !valid {
            return Err(PriceError::InvalidFormat(price));
        }

        Ok(Self(price))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product ready to be persisted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub company_id: CompanyId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub created_at: DateTime<Utc>,
}

/// Command to add a product to a company's offer
#[derive(Debug)]
pub struct AddProductCommand {
    pub name: String,
    pub description: String,
    pub price: Price,
}

/// Trim a required text field, rejecting blanks.
pub fn required_text(field: &str, value: String) -> Result<String, ProductError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(ProductError::MissingField(field.to_string()));
    }
    Ok(value)
}
