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
use crate::domain::customer::models::Customer;
use crate::domain::customer::models::CustomerId;
use crate::domain::customer::ports::CustomerServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<ApiSuccess<CustomerData>, ApiError> {
    let customer_id = CustomerId::from_string(&customer_id).map_err(CustomerError::from)?;

    state
        .customer_service
        .get_customer(&customer_id)
        .await
        .map_err(ApiError::from)
        .map(|ref customer| ApiSuccess::new(StatusCode::OK, customer.into()))
}

pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CustomerData>>, ApiError> {
    state
        .customer_service
        .list_customers()
        .await
        .map_err(ApiError::from)
        .map(|customers| {
            ApiSuccess::new(
                StatusCode::OK,
                customers.iter().map(CustomerData::from).collect(),
            )
        })
}

/// Customer as exposed over HTTP; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerData {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub city: String,
    pub telephone: String,
    pub birthdate: NaiveDate,
    pub email: String,
    pub role: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&Customer> for CustomerData {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.0,
            name: customer.name.clone(),
            surname: customer.surname.clone(),
            city: customer.city.clone(),
            telephone: customer.telephone.as_str().to_string(),
            birthdate: customer.birthdate,
            email: customer.email.as_str().to_string(),
            role: customer.role.0,
            created_at: customer.created_at,
        }
    }
}
