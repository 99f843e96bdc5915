use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    #[error("Email must be between {min} and {max} characters, got {actual}")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Error for Telephone validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TelephoneError {
    #[error("Telephone number is required")]
    Empty,

    #[error("Telephone number must contain only digits")]
    NonNumeric,

    #[error("Telephone number too long: maximum {max} digits, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for calendar date parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date '{0}'. Expected 'dd.MM.yyyy' or 'yyyy-MM-dd'")]
    InvalidFormat(String),
}
