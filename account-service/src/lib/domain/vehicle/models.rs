use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

use crate::domain::customer::models::CustomerId;
use crate::domain::vehicle::errors::PlateNumberError;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::errors::VehicleIdError;
use crate::domain::vehicle::errors::VinError;

/// Vehicle owned by a customer.
///
/// Deletion is soft: `deleted` vehicles stay readable by id and VIN but drop
/// out of the owner's listing and free their plate number.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub customer_id: CustomerId,
    pub brand: String,
    pub model: String,
    pub registered_at: NaiveDate,
    pub vin: Vin,
    pub plate_no: PlateNumber,
    pub fuel: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub transmission_type: Option<String>,
    pub tire_size: Option<String>,
    pub last_serviced: Option<NaiveDate>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// Vehicle identifier assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub i64);

impl VehicleId {
    /// Parse a vehicle ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a positive integer
    pub fn from_string(s: &str) -> Result<Self, VehicleIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(VehicleIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Vehicle identification number: up to 17 ASCII letters and digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vin(String);

impl Vin {
    const MAX_LENGTH: usize = 17;

    /// # Errors
    /// * `Empty` - Blank input
    /// * `TooLong` - More than 17 characters
    /// * `InvalidCharacters` - Anything but ASCII letters and digits
    pub fn new(vin: String) -> Result<Self, VinError> {
        let vin = vin.trim().to_string();
        if vin.is_empty() {
            return Err(VinError::Empty);
        }
        if vin.len() > Self::MAX_LENGTH {
            return Err(VinError::TooLong {
                max: Self::MAX_LENGTH,
                actual: vin.len(),
            });
        }
        if !vin.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(VinError::InvalidCharacters(vin));
        }
        Ok(Self(vin))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Registration plate, unique among vehicles that are not deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateNumber(String);

impl PlateNumber {
    const MAX_LENGTH: usize = 10;

    pub fn new(plate: String) -> Result<Self, PlateNumberError> {
        let plate = plate.trim().to_string();
        if plate.is_empty() {
            return Err(PlateNumberError::Empty);
        }
        let length = plate.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(PlateNumberError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(plate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Vehicle ready to be persisted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub customer_id: CustomerId,
    pub brand: String,
    pub model: String,
    pub registered_at: NaiveDate,
    pub vin: Vin,
    pub plate_no: PlateNumber,
    pub fuel: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub transmission_type: Option<String>,
    pub tire_size: Option<String>,
    pub last_serviced: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Command to register a vehicle for its owner
#[derive(Debug)]
pub struct AddVehicleCommand {
    pub brand: String,
    pub model: String,
    pub registered_at: NaiveDate,
    pub vin: Vin,
    pub plate_no: PlateNumber,
    pub fuel: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub transmission_type: Option<String>,
    pub tire_size: Option<String>,
    pub last_serviced: Option<NaiveDate>,
}

/// Partial vehicle edit; `None` leaves a field unchanged.
#[derive(Debug, Default)]
pub struct UpdateVehicleCommand {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub registered_at: Option<NaiveDate>,
    pub vin: Option<Vin>,
    pub plate_no: Option<PlateNumber>,
    pub fuel: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub transmission_type: Option<String>,
    pub tire_size: Option<String>,
    pub last_serviced: Option<NaiveDate>,
}

pub const NAME_MAX_LENGTH: usize = 100;
pub const DETAIL_MAX_LENGTH: usize = 50;
pub const TIRE_SIZE_MAX_LENGTH: usize = 15;

/// Reject negative odometer readings.
pub fn checked_mileage(mileage: Option<i32>) -> Result<Option<i32>, VehicleError> {
    match mileage {
        Some(value) if value < 0 => Err(VehicleError::NegativeMileage(value)),
        other => Ok(other),
    }
}

/// Trim a required text field, rejecting blanks and overlong values.
pub fn required_text(field: &str, value: String, max: usize) -> Result<String, VehicleError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(VehicleError::MissingField(field.to_string()));
    }
    check_length(field, value, max)
}

/// Trim an optional text field. Present but blank is an error, not absence.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, VehicleError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(VehicleError::BlankField(field.to_string()));
    }
    check_length(field, value, max).map(Some)
}

fn check_length(field: &str, value: String, max: usize) -> Result<String, VehicleError> {
    if value.chars().count() > max {
        return Err(VehicleError::FieldTooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(value)
}
