use auth::PrincipalClaim;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Ico;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::contact::models::EmailAddress;
use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::ports::CustomerServicePort;
use crate::domain::principal::models::PrincipalKind;
use crate::inbound::http::router::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login for both principal kinds: a username containing `@` is a customer
/// email, anything else is read as a company ico.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let username = body.username.trim();
    if username.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }

    let data = if username.contains('@') {
        login_customer(&state, username, &body.password).await?
    } else {
        login_company(&state, username, &body.password).await?
    };

    Ok(ApiSuccess::new(StatusCode::OK, data))
}

pub async fn company_login(
    State(state): State<AppState>,
    Json(body): Json<CompanyLoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let ico = body.ico.trim();
    if ico.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Ico and password are required".to_string(),
        ));
    }

    let data = login_company(&state, ico, &body.password).await?;

    Ok(ApiSuccess::new(StatusCode::OK, data))
}

async fn login_customer(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<LoginResponseData, ApiError> {
    let email = EmailAddress::new(username.to_string())
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let customer = state
        .customer_service
        .get_customer_by_email(&email)
        .await
        .map_err(|e| match e {
            CustomerError::NotFoundByEmail(_) => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            _ => ApiError::from(e),
        })?;

    let result = state.authenticator.authenticate(
        password,
        &customer.password_hash,
        customer.email.as_str(),
        customer.id.0,
        PrincipalClaim::Customer(customer.email.as_str().to_string()),
    )?;

    tracing::info!(customer_id = %customer.id, "Customer logged in");

    Ok(LoginResponseData {
        token: result.access_token,
        principal_id: customer.id.0,
        kind: PrincipalKind::Customer,
        expires_in: expires_in(state),
    })
}

async fn login_company(
    state: &AppState,
    username: &str,
    password: &str,
) -> Result<LoginResponseData, ApiError> {
    let ico = Ico::parse(username)
        .map_err(|_| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    let company = state
        .company_service
        .get_company_by_ico(&ico)
        .await
        .map_err(|e| match e {
            CompanyError::NotFoundByIco(_) => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            _ => ApiError::from(e),
        })?;

    let result = state.authenticator.authenticate(
        password,
        &company.password_hash,
        company.ico,
        company.id.0,
        PrincipalClaim::Company(company.ico.to_string()),
    )?;

    tracing::info!(company_id = %company.id, "Company logged in");

    Ok(LoginResponseData {
        token: result.access_token,
        principal_id: company.id.0,
        kind: PrincipalKind::Company,
        expires_in: expires_in(state),
    })
}

/// Seconds until a freshly issued token expires.
fn expires_in(state: &AppState) -> i64 {
    state.authenticator.token_service().lifetime().num_seconds()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyLoginRequestBody {
    ico: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub principal_id: i64,
    pub kind: PrincipalKind,
    pub expires_in: i64,
}
