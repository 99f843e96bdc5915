use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_vehicle::VehicleData;
use crate::domain::contact::models::parse_date;
use crate::domain::principal::models::PrincipalKind;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::checked_mileage;
use crate::domain::vehicle::models::PlateNumber;
use crate::domain::vehicle::models::UpdateVehicleCommand;
use crate::domain::vehicle::models::VehicleId;
use crate::domain::vehicle::models::Vin;
use crate::domain::vehicle::models::DETAIL_MAX_LENGTH;
use crate::domain::vehicle::models::NAME_MAX_LENGTH;
use crate::domain::vehicle::models::TIRE_SIZE_MAX_LENGTH;
use crate::domain::vehicle::ports::VehicleServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// HTTP request body for editing a vehicle (raw JSON)
///
/// Absent and blank fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVehicleRequest {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub registered_at: Option<String>,
    pub vin: Option<String>,
    pub plate_no: Option<String>,
    pub fuel: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub transmission_type: Option<String>,
    pub tire_size: Option<String>,
    pub last_serviced: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn bounded(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, VehicleError> {
    match non_blank(value) {
        Some(v) if v.chars().count() > max => Err(VehicleError::FieldTooLong {
            field: field.to_string(),
            max,
        }),
        other => Ok(other),
    }
}

impl UpdateVehicleRequest {
    fn try_into_command(self) -> Result<UpdateVehicleCommand, VehicleError> {
        let registered_at = non_blank(self.registered_at)
            .map(|v| parse_date(&v))
            .transpose()?;
        let last_serviced = non_blank(self.last_serviced)
            .map(|v| parse_date(&v))
            .transpose()?;

        Ok(UpdateVehicleCommand {
            brand: bounded("brand", self.brand, NAME_MAX_LENGTH)?,
            model: bounded("model", self.model, NAME_MAX_LENGTH)?,
            registered_at,
            vin: non_blank(self.vin).map(Vin::new).transpose()?,
            plate_no: non_blank(self.plate_no).map(PlateNumber::new).transpose()?,
            fuel: bounded("fuel", self.fuel, DETAIL_MAX_LENGTH)?,
            color: bounded("color", self.color, DETAIL_MAX_LENGTH)?,
            mileage: checked_mileage(self.mileage)?,
            transmission_type: bounded(
                "transmission_type",
                self.transmission_type,
                DETAIL_MAX_LENGTH,
            )?,
            tire_size: bounded("tire_size", self.tire_size, TIRE_SIZE_MAX_LENGTH)?,
            last_serviced,
        })
    }
}

/// Edit a vehicle owned by the calling customer.
pub async fn update_vehicle(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Path(id): Path<String>,
    Json(req): Json<UpdateVehicleRequest>,
) -> Result<ApiSuccess<VehicleData>, ApiError> {
    let vehicle_id = VehicleId::from_string(&id).map_err(VehicleError::from)?;
    let vehicle = state.vehicle_service.get_vehicle(&vehicle_id).await?;
    principal.require_account(PrincipalKind::Customer, vehicle.customer_id.0)?;
    let command = req.try_into_command()?;

    state
        .vehicle_service
        .update_vehicle(&vehicle_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref vehicle| ApiSuccess::new(StatusCode::OK, vehicle.into()))
}
