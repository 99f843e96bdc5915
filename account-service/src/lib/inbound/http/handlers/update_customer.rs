use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_customer::CustomerData;
use crate::domain::contact::models::parse_date;
use crate::domain::contact::models::EmailAddress;
use crate::domain::contact::models::Telephone;
use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::required_text;
use crate::domain::customer::models::CustomerId;
use crate::domain::customer::models::UpdateProfileCommand;
use crate::domain::customer::ports::CustomerServicePort;
use crate::domain::principal::models::PrincipalKind;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// HTTP request body for a full profile edit (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: String,
    pub surname: String,
    pub city: String,
    pub telephone: String,
    pub birthdate: String,
    pub email: String,
    pub password: Option<String>,
}

impl UpdateCustomerRequest {
    fn try_into_command(self) -> Result<UpdateProfileCommand, CustomerError> {
        Ok(UpdateProfileCommand {
            name: required_text("name", self.name)?,
            surname: required_text("surname", self.surname)?,
            city: required_text("city", self.city)?,
            telephone: Telephone::new(self.telephone.trim().to_string())?,
            birthdate: parse_date(self.birthdate.trim())?,
            email: EmailAddress::new(self.email)?,
            password: self.password,
        })
    }
}

pub async fn update_customer(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCustomerRequest>,
) -> Result<ApiSuccess<CustomerData>, ApiError> {
    let customer_id = CustomerId::from_string(&id).map_err(CustomerError::from)?;
    principal.require_account(PrincipalKind::Customer, customer_id.0)?;
    let command = req.try_into_command()?;

    state
        .customer_service
        .update_profile(&customer_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref customer| ApiSuccess::new(StatusCode::OK, customer.into()))
}
