use thiserror::Error;

use crate::domain::contact::errors::EmailError;
use crate::domain::contact::errors::TelephoneError;

/// Error for CompanyId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompanyIdError {
    #[error("Invalid company id: {0}")]
    InvalidFormat(String),
}

/// Error for company registration code (ico) validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IcoError {
    #[error("Ico is required")]
    Empty,

    #[error("Ico must contain only digits: {0}")]
    NonNumeric(String),

    #[error("Ico out of range: {0}")]
    OutOfRange(String),
}

/// Top-level error for all company-related operations
#[derive(Debug, Clone, Error)]
pub enum CompanyError {
    #[error("Invalid company ID: {0}")]
    InvalidCompanyId(#[from] CompanyIdError),

    #[error("Invalid ico: {0}")]
    InvalidIco(#[from] IcoError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid telephone: {0}")]
    InvalidTelephone(#[from] TelephoneError),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Company not found: {0}")]
    NotFound(String),

    #[error("Company not found with ico: {0}")]
    NotFoundByIco(String),

    #[error("Ico already exists: {0}")]
    IcoAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for CompanyError {
    fn from(err: anyhow::Error) -> Self {
        CompanyError::Unknown(err.to_string())
    }
}
