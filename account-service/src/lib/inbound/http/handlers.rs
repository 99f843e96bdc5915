use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::company::errors::CompanyError;
use crate::domain::customer::errors::CustomerError;
use crate::domain::product::errors::ProductError;
use crate::domain::vehicle::errors::VehicleError;

pub mod add_product;
pub mod add_vehicle;
pub mod count_customers;
pub mod create_company;
pub mod create_customer;
pub mod current_principal;
pub mod delete_product;
pub mod delete_vehicle;
pub mod get_company;
pub mod get_customer;
pub mod get_product;
pub mod get_vehicle;
pub mod login;
pub mod update_company;
pub mod update_customer;
pub mod update_vehicle;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        Self::InternalServerError(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(_) | CustomerError::NotFoundByEmail(_) => {
                ApiError::NotFound(err.to_string())
            }
            CustomerError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            CustomerError::InvalidCustomerId(_) | CustomerError::InvalidWindow(_) => {
                ApiError::BadRequest(err.to_string())
            }
            CustomerError::InvalidEmail(_)
            | CustomerError::InvalidTelephone(_)
            | CustomerError::InvalidBirthdate(_)
            | CustomerError::MissingField(_) => ApiError::UnprocessableEntity(err.to_string()),
            CustomerError::Password(_)
            | CustomerError::DatabaseError(_)
            | CustomerError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CompanyError> for ApiError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::NotFound(_) | CompanyError::NotFoundByIco(_) => {
                ApiError::NotFound(err.to_string())
            }
            CompanyError::IcoAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            CompanyError::InvalidCompanyId(_) => ApiError::BadRequest(err.to_string()),
            CompanyError::InvalidIco(_)
            | CompanyError::InvalidEmail(_)
            | CompanyError::InvalidTelephone(_)
            | CompanyError::MissingField(_) => ApiError::UnprocessableEntity(err.to_string()),
            CompanyError::Password(_) | CompanyError::DatabaseError(_) | CompanyError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<VehicleError> for ApiError {
    fn from(err: VehicleError) -> Self {
        match err {
            VehicleError::NotFound(_)
            | VehicleError::NotFoundByVin(_)
            | VehicleError::OwnerNotFound(_) => ApiError::NotFound(err.to_string()),
            VehicleError::PlateAlreadyExists(_) | VehicleError::VinAlreadyExists(_) => {
                ApiError::Conflict(err.to_string())
            }
            VehicleError::InvalidVehicleId(_) => ApiError::BadRequest(err.to_string()),
            VehicleError::InvalidVin(_)
            | VehicleError::InvalidPlateNumber(_)
            | VehicleError::InvalidDate(_)
            | VehicleError::MissingField(_)
            | VehicleError::BlankField(_)
            | VehicleError::FieldTooLong { .. }
            | VehicleError::NegativeMileage(_) => ApiError::UnprocessableEntity(err.to_string()),
            VehicleError::DatabaseError(_) | VehicleError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) | ProductError::CompanyNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            ProductError::InvalidProductId(_) => ApiError::BadRequest(err.to_string()),
            ProductError::InvalidPrice(_) | ProductError::MissingField(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            ProductError::DatabaseError(_) | ProductError::Unknown(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<auth::AuthenticationError> for ApiError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            auth::AuthenticationError::PasswordError(e) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", e))
            }
            auth::AuthenticationError::TokenError(e) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", e))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}
