use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::get_company::CompanyData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::required_text;
use crate::domain::company::models::CreateCompanyCommand;
use crate::domain::company::models::Ico;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::contact::models::EmailAddress;
use crate::domain::contact::models::Telephone;
use crate::inbound::http::router::AppState;

pub async fn create_company(
    State(state): State<AppState>,
    Json(body): Json<CreateCompanyRequestBody>,
) -> Result<ApiSuccess<CompanyData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .company_service
        .register_company(command)
        .await
        .map_err(ApiError::from)
        .map(|ref company| ApiSuccess::new(StatusCode::CREATED, company.into()))
}

/// HTTP request body for company registration (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCompanyRequestBody {
    company_name: String,
    ico: String,
    email: String,
    telephone: String,
    address: String,
    password: String,
}

impl CreateCompanyRequestBody {
    fn try_into_command(self) -> Result<CreateCompanyCommand, CompanyError> {
        if self.password.is_empty() {
            return Err(CompanyError::MissingField("password".to_string()));
        }

        Ok(CreateCompanyCommand {
            company_name: required_text("company_name", self.company_name)?,
            ico: Ico::parse(self.ico.trim())?,
            email: EmailAddress::new(self.email)?,
            telephone: Telephone::new(self.telephone.trim().to_string())?,
            address: required_text("address", self.address)?,
            password: self.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::errors::IcoError;

    fn body() -> CreateCompanyRequestBody {
        CreateCompanyRequestBody {
            company_name: "Autoservis s.r.o.".to_string(),
            ico: "12345678".to_string(),
            email: "info@autoservis.sk".to_string(),
            telephone: "0412345678".to_string(),
            address: "Hlavna 1, Zilina".to_string(),
            password: "tajne-heslo".to_string(),
        }
    }

    #[test]
    fn test_valid_body_converts() {
        let command = body().try_into_command().unwrap();

        assert_eq!(command.ico.value(), 12345678);
        assert_eq!(command.company_name, "Autoservis s.r.o.");
    }

    #[test]
    fn test_non_numeric_ico_rejected() {
        let mut body = body();
        body.ico = "12a45".to_string();

        assert!(matches!(
            body.try_into_command(),
            Err(CompanyError::InvalidIco(IcoError::NonNumeric(_)))
        ));
    }

    #[test]
    fn test_blank_address_rejected() {
        let mut body = body();
        body.address = " ".to_string();

        assert!(matches!(
            body.try_into_command(),
            Err(CompanyError::MissingField(_))
        ));
    }
}
