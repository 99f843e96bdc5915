use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::get_vehicle::VehicleData;
use crate::domain::principal::models::PrincipalKind;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::VehicleId;
use crate::domain::vehicle::ports::VehicleServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// Soft-delete a vehicle owned by the calling customer.
///
/// The record stays readable; its plate becomes free for another vehicle.
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<VehicleData>, ApiError> {
    let vehicle_id = VehicleId::from_string(&id).map_err(VehicleError::from)?;
    let vehicle = state.vehicle_service.get_vehicle(&vehicle_id).await?;
    principal.require_account(PrincipalKind::Customer, vehicle.customer_id.0)?;

    state
        .vehicle_service
        .mark_deleted(&vehicle_id)
        .await
        .map_err(ApiError::from)
        .map(|ref vehicle| ApiSuccess::new(StatusCode::OK, vehicle.into()))
}
