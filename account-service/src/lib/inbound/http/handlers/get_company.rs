use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::ports::CompanyServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<String>,
) -> Result<ApiSuccess<CompanyData>, ApiError> {
    let company_id = CompanyId::from_string(&company_id).map_err(CompanyError::from)?;

    state
        .company_service
        .get_company(&company_id)
        .await
        .map_err(ApiError::from)
        .map(|ref company| ApiSuccess::new(StatusCode::OK, company.into()))
}

pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CompanyData>>, ApiError> {
    let companies = state.company_service.list_companies().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        companies.iter().map(CompanyData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyData {
    pub id: i64,
    pub company_name: String,
    pub ico: String,
    pub email: String,
    pub telephone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Company> for CompanyData {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.0,
            company_name: company.company_name.clone(),
            ico: company.ico.to_string(),
            email: company.email.as_str().to_string(),
            telephone: company.telephone.as_str().to_string(),
            address: company.address.clone(),
            created_at: company.created_at,
        }
    }
}
