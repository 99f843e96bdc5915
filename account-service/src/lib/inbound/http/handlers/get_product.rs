use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::CompanyId;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id = ProductId::from_string(&product_id).map_err(ProductError::from)?;

    state
        .product_service
        .get_product(&product_id)
        .await
        .map_err(ApiError::from)
        .map(|ref product| ApiSuccess::new(StatusCode::OK, product.into()))
}

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ProductData>>, ApiError> {
    let products = state.product_service.list_products().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        products.iter().map(ProductData::from).collect(),
    ))
}

/// Current offer of one company.
pub async fn list_company_products(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<ApiSuccess<Vec<ProductData>>, ApiError> {
    let company_id = CompanyId::from_string(&company_id).map_err(CompanyError::from)?;
    let products = state
        .product_service
        .list_company_products(&company_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        products.iter().map(ProductData::from).collect(),
    ))
}

pub async fn count_products(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ProductCountData>, ApiError> {
    let count = state.product_service.count_products().await?;

    Ok(ApiSuccess::new(StatusCode::OK, ProductCountData { count }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCountData {
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductData {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
    pub description: String,
    pub price: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.0,
            company_id: product.company_id.0,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.as_str().to_string(),
            deleted: product.deleted,
            created_at: product.created_at,
        }
    }
}
