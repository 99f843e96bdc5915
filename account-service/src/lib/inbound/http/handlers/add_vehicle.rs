use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_vehicle::VehicleData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::contact::models::parse_date;
use crate::domain::customer::models::CustomerId;
use crate::domain::principal::models::PrincipalKind;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::checked_mileage;
use crate::domain::vehicle::models::optional_text;
use crate::domain::vehicle::models::required_text;
use crate::domain::vehicle::models::AddVehicleCommand;
use crate::domain::vehicle::models::PlateNumber;
use crate::domain::vehicle::models::Vin;
use crate::domain::vehicle::models::DETAIL_MAX_LENGTH;
use crate::domain::vehicle::models::NAME_MAX_LENGTH;
use crate::domain::vehicle::models::TIRE_SIZE_MAX_LENGTH;
use crate::domain::vehicle::ports::VehicleServicePort;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// Register a vehicle owned by the calling customer.
pub async fn add_vehicle(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Json(body): Json<AddVehicleRequestBody>,
) -> Result<ApiSuccess<VehicleData>, ApiError> {
    let owner = CustomerId(principal.require_kind(PrincipalKind::Customer)?);
    let command = body.try_into_command()?;

    state
        .vehicle_service
        .add_vehicle(&owner, command)
        .await
        .map_err(ApiError::from)
        .map(|ref vehicle| ApiSuccess::new(StatusCode::CREATED, vehicle.into()))
}

/// HTTP request body for vehicle registration (raw JSON)
///
/// Optional fields may be omitted but not sent blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddVehicleRequestBody {
    brand: String,
    model: String,
    registered_at: String,
    vin: String,
    plate_no: String,
    fuel: Option<String>,
    color: Option<String>,
    mileage: Option<i32>,
    transmission_type: Option<String>,
    tire_size: Option<String>,
    last_serviced: Option<String>,
}

impl AddVehicleRequestBody {
    fn try_into_command(self) -> Result<AddVehicleCommand, VehicleError> {
        let last_serviced = optional_text("last_serviced", self.last_serviced, DETAIL_MAX_LENGTH)?
            .map(|date| parse_date(&date))
            .transpose()?;

        Ok(AddVehicleCommand {
            brand: required_text("brand", self.brand, NAME_MAX_LENGTH)?,
            model: required_text("model", self.model, NAME_MAX_LENGTH)?,
            registered_at: parse_date(&required_text(
                "registered_at",
                self.registered_at,
                DETAIL_MAX_LENGTH,
            )?)?,
            vin: Vin::new(self.vin)?,
            plate_no: PlateNumber::new(self.plate_no)?,
            fuel: optional_text("fuel", self.fuel, DETAIL_MAX_LENGTH)?,
            color: optional_text("color", self.color, DETAIL_MAX_LENGTH)?,
            mileage: checked_mileage(self.mileage)?,
            transmission_type: optional_text(
                "transmission_type",
                self.transmission_type,
                DETAIL_MAX_LENGTH,
            )?,
            tire_size: optional_text("tire_size", self.tire_size, TIRE_SIZE_MAX_LENGTH)?,
            last_serviced,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::vehicle::errors::VinError;

    fn body() -> AddVehicleRequestBody {
        AddVehicleRequestBody {
            brand: "Skoda".to_string(),
            model: "Octavia".to_string(),
            registered_at: "14.05.2019".to_string(),
            vin: "TMBJJ7NE8K0123456".to_string(),
            plate_no: "ZA123AB".to_string(),
            fuel: Some("diesel".to_string()),
            color: None,
            mileage: Some(84_000),
            transmission_type: None,
            tire_size: Some("205/55 R16".to_string()),
            last_serviced: Some("2024-03-01".to_string()),
        }
    }

    #[test]
    fn test_valid_body_converts() {
        let command = body().try_into_command().unwrap();

        assert_eq!(command.registered_at, NaiveDate::from_ymd_opt(2019, 5, 14).unwrap());
        assert_eq!(command.last_serviced, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(command.plate_no.as_str(), "ZA123AB");
        assert_eq!(command.color, None);
    }

    #[test]
    fn test_blank_optional_rejected() {
        let mut body = body();
        body.color = Some("".to_string());

        assert!(matches!(
            body.try_into_command(),
            Err(VehicleError::BlankField(field)) if field == "color"
        ));
    }

    #[test]
    fn test_negative_mileage_rejected() {
        let mut body = body();
        body.mileage = Some(-10);

        assert!(matches!(
            body.try_into_command(),
            Err(VehicleError::NegativeMileage(-10))
        ));
    }

    #[test]
    fn test_bad_registration_date_rejected() {
        let mut body = body();
        body.registered_at = "2019/05/14".to_string();

        assert!(matches!(
            body.try_into_command(),
            Err(VehicleError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_missing_vin_rejected() {
        let mut body = body();
        body.vin = " ".to_string();

        assert!(matches!(
            body.try_into_command(),
            Err(VehicleError::InvalidVin(VinError::Empty))
        ));
    }
}
