use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_company::CompanyData;
use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::CompanyId;
use crate::domain::company::models::Ico;
use crate::domain::company::models::UpdateCompanyCommand;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::contact::models::EmailAddress;
use crate::domain::contact::models::Telephone;
use crate::domain::principal::models::PrincipalKind;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedPrincipal;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating a company (raw JSON)
///
/// Absent and blank fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCompanyRequest {
    pub company_name: Option<String>,
    pub ico: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl UpdateCompanyRequest {
    fn try_into_command(self) -> Result<UpdateCompanyCommand, CompanyError> {
        let ico = non_blank(self.ico).map(|v| Ico::parse(&v)).transpose()?;
        let email = non_blank(self.email).map(EmailAddress::new).transpose()?;
        let telephone = non_blank(self.telephone).map(Telephone::new).transpose()?;

        Ok(UpdateCompanyCommand {
            company_name: non_blank(self.company_name),
            ico,
            email,
            telephone,
            address: non_blank(self.address),
            password: self.password.filter(|p| !p.trim().is_empty()),
        })
    }
}

pub async fn update_company(
    State(state): State<AppState>,
    Extension(principal): Extension<AuthenticatedPrincipal>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<ApiSuccess<CompanyData>, ApiError> {
    let company_id = CompanyId::from_string(&id).map_err(CompanyError::from)?;
    principal.require_account(PrincipalKind::Company, company_id.0)?;
    let command = req.try_into_command()?;

    state
        .company_service
        .update_company(&company_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref company| ApiSuccess::new(StatusCode::OK, company.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_ignored() {
        let request = UpdateCompanyRequest {
            company_name: Some("  ".to_string()),
            address: Some("Nova 5, Martin".to_string()),
            password: Some(String::new()),
            ..Default::default()
        };

        let command = request.try_into_command().unwrap();
        assert_eq!(command.company_name, None);
        assert_eq!(command.address.as_deref(), Some("Nova 5, Martin"));
        assert_eq!(command.password, None);
        assert!(command.ico.is_none());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let request = UpdateCompanyRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            request.try_into_command(),
            Err(CompanyError::InvalidEmail(_))
        ));
    }
}
