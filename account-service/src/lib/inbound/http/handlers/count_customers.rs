use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::customer::models::RegistrationWindow;
use crate::domain::customer::ports::CustomerServicePort;
use crate::inbound::http::router::AppState;

/// Number of basic-user customers.
pub async fn count_customers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<CustomerCountData>, ApiError> {
    let count = state.customer_service.count_basic_users().await?;

    Ok(ApiSuccess::new(StatusCode::OK, CustomerCountData { count }))
}

/// Number of customers registered within `24h`, `7d`, `30d` or `365d`.
pub async fn count_registered_customers(
    State(state): State<AppState>,
    Path(window): Path<String>,
) -> Result<ApiSuccess<RegisteredCountData>, ApiError> {
    let window: RegistrationWindow = window.parse()?;
    let count = state.customer_service.count_registered_within(window).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RegisteredCountData {
            window: window.as_str().to_string(),
            count,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerCountData {
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredCountData {
    pub window: String,
    pub count: i64,
}
