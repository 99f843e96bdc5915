use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::CustomerId;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::Vehicle;
use crate::domain::vehicle::models::VehicleId;
use crate::domain::vehicle::models::Vin;
use crate::domain::vehicle::ports::VehicleServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<ApiSuccess<VehicleData>, ApiError> {
    let vehicle_id = VehicleId::from_string(&vehicle_id).map_err(VehicleError::from)?;

    state
        .vehicle_service
        .get_vehicle(&vehicle_id)
        .await
        .map_err(ApiError::from)
        .map(|ref vehicle| ApiSuccess::new(StatusCode::OK, vehicle.into()))
}

pub async fn get_vehicle_by_vin(
    State(state): State<AppState>,
    Path(vin): Path<String>,
) -> Result<ApiSuccess<VehicleData>, ApiError> {
    let vin = Vin::new(vin).map_err(VehicleError::from)?;

    state
        .vehicle_service
        .get_vehicle_by_vin(&vin)
        .await
        .map_err(ApiError::from)
        .map(|ref vehicle| ApiSuccess::new(StatusCode::OK, vehicle.into()))
}

pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<VehicleData>>, ApiError> {
    let vehicles = state.vehicle_service.list_vehicles().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        vehicles.iter().map(VehicleData::from).collect(),
    ))
}

/// Vehicles of one customer that are not deleted.
pub async fn list_customer_vehicles(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<ApiSuccess<Vec<VehicleData>>, ApiError> {
    let customer_id = CustomerId::from_string(&customer_id).map_err(CustomerError::from)?;
    let vehicles = state
        .vehicle_service
        .list_customer_vehicles(&customer_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        vehicles.iter().map(VehicleData::from).collect(),
    ))
}

pub async fn count_vehicles(
    State(state): State<AppState>,
) -> Result<ApiSuccess<VehicleCountData>, ApiError> {
    let count = state.vehicle_service.count_vehicles().await?;

    Ok(ApiSuccess::new(StatusCode::OK, VehicleCountData { count }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleCountData {
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleData {
    pub id: i64,
    pub customer_id: i64,
    pub brand: String,
    pub model: String,
    pub registered_at: NaiveDate,
    pub vin: String,
    pub plate_no: String,
    pub fuel: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub transmission_type: Option<String>,
    pub tire_size: Option<String>,
    pub last_serviced: Option<NaiveDate>,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Vehicle> for VehicleData {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.0,
            customer_id: vehicle.customer_id.0,
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            registered_at: vehicle.registered_at,
            vin: vehicle.vin.as_str().to_string(),
            plate_no: vehicle.plate_no.as_str().to_string(),
            fuel: vehicle.fuel.clone(),
            color: vehicle.color.clone(),
            mileage: vehicle.mileage,
            transmission_type: vehicle.transmission_type.clone(),
            tire_size: vehicle.tire_size.clone(),
            last_serviced: vehicle.last_serviced,
            deleted: vehicle.deleted,
            created_at: vehicle.created_at,
        }
    }
}
