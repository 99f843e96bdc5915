use thiserror::Error;

use crate::domain::contact::errors::DateError;

/// Error for VehicleId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VehicleIdError {
    #[error("Invalid vehicle id: {0}")]
    InvalidFormat(String),
}

/// Error for vehicle identification number validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VinError {
    #[error("VIN is required")]
    Empty,

    #[error("VIN too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("VIN must contain only letters and digits: {0}")]
    InvalidCharacters(String),
}

/// Error for registration plate validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlateNumberError {
    #[error("Plate number is required")]
    Empty,

    #[error("Plate number too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all vehicle-related operations
#[derive(Debug, Clone, Error)]
pub enum VehicleError {
    #[error("Invalid vehicle ID: {0}")]
    InvalidVehicleId(#[from] VehicleIdError),

    #[error("Invalid VIN: {0}")]
    InvalidVin(#[from] VinError),

    #[error("Invalid plate number: {0}")]
    InvalidPlateNumber(#[from] PlateNumberError),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateError),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Field must not be blank when given: {0}")]
    BlankField(String),

    #[error("Field too long: {field} allows at most {max} characters")]
    FieldTooLong { field: String, max: usize },

    #[error("Mileage must not be negative: {0}")]
    NegativeMileage(i32),

    #[error("Vehicle owner not found: {0}")]
    OwnerNotFound(String),

    #[error("Vehicle not found: {0}")]
    NotFound(String),

    #[error("Vehicle not found with VIN: {0}")]
    NotFoundByVin(String),

    #[error("Plate number already registered: {0}")]
    PlateAlreadyExists(String),

    #[error("VIN already registered: {0}")]
    VinAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for VehicleError {
    fn from(err: anyhow::Error) -> Self {
        VehicleError::Unknown(err.to_string())
    }
}
