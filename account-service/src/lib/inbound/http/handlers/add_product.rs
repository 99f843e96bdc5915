use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_product::ProductData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::company::models::CompanyId;
use crate::domain::principal::models::PrincipalKind;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::required_text;
use crate::domain::product::models::AddProductCommand;
use crate::domain::product::models::Price;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// Add a product to the calling company's offer.
pub async fn add_product(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Json(body): Json<AddProductRequestBody>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let company_id = CompanyId(principal.require_kind(PrincipalKind::Company)?);
    let command = body.try_into_command()?;

    state
        .product_service
        .add_product(&company_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::CREATED, product.into()))
}

/// HTTP request body for a new product (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddProductRequestBody {
    name: String,
    description: String,
    price: String,
}

impl AddProductRequestBody {
    fn try_into_command(self) -> Result<AddProductCommand, ProductError> {
        Ok(AddProductCommand {
            name: required_text("name", self.name)?,
            description: required_text("description", self.description)?,
            price: Price::new(self.price)?,
        })
    }
}
