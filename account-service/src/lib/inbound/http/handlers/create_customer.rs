use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::get_customer::CustomerData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::contact::models::parse_date;
use crate::domain::contact::models::EmailAddress;
use crate::domain::contact::models::Telephone;
use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::required_text;
use crate::domain::customer::models::CreateCustomerCommand;
use crate::domain::customer::ports::CustomerServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_customer(
    State(state): State<AppState>,
    Json(body): Json<CreateCustomerRequestBody>,
) -> Result<ApiSuccess<CustomerData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .customer_service
        .create_customer(command)
        .await
        .map_err(ApiError::from)
        .map(|ref customer| ApiSuccess::new(StatusCode::CREATED, customer.into()))
}

/// HTTP request body for customer registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCustomerRequestBody {
    name: String,
    surname: String,
    city: String,
    telephone: String,
    /// `dd.MM.yyyy` or ISO `yyyy-MM-dd`
    birthdate: String,
    email: String,
    password: String,
}

impl CreateCustomerRequestBody {
    fn try_into_command(self) -> Result<CreateCustomerCommand, CustomerError> {
        if self.password.is_empty() {
            return Err(CustomerError::MissingField("password".to_string()));
        }

        Ok(CreateCustomerCommand {
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
