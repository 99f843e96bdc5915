use thiserror::Error;

use crate::domain::contact::errors::DateError;
use crate::domain::contact::errors::EmailError;
use crate::domain::contact::errors::TelephoneError;

/// Error for CustomerId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomerIdError {
    #[error("Invalid customer id: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all customer-related operations
#[derive(Debug, Clone, Error)]
pub enum CustomerError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid customer ID: {0}")]
    InvalidCustomerId(#[from] CustomerIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid telephone: {0}")]
    InvalidTelephone(#[from] TelephoneError),

    #[error("Invalid birthdate: {0}")]
    InvalidBirthdate(#[from] DateError),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown registration window: {0}")]
    InvalidWindow(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Domain-level errors
    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Customer not found with email: {0}")]
    NotFoundByEmail(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CustomerError {
    fn from(err: anyhow::Error) -> Self {
        CustomerError::Unknown(err.to_string())
    }
}
