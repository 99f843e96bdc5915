use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::models::CreateCompanyCommand;
use crate::domain::company::models::Ico;
use crate::domain::company::models::NewCompany;
use crate::domain::company::models::UpdateCompanyCommand;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::company::ports::CompanyServicePort;

/// Domain service implementation for company operations.
pub struct CompanyService<CR>
where
    CR: CompanyRepository,
{
    repository: Arc<CR>,
    password_hasher: auth::PasswordHasher,
}

impl<CR> CompanyService<CR>
where
    CR: CompanyRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CR> CompanyServicePort for CompanyService<CR>
where
    CR: CompanyRepository,
{
    async fn register_company(
        &self,
        command: CreateCompanyCommand,
    ) -> Result<Company, CompanyError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let company = NewCompany {
            company_name: command.company_name,
            ico: command.ico,
            email: command.email,
            telephone: command.telephone,
            address: command.address,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(company).await?;
        tracing::info!(company_id = %created.id, ico = %created.ico, "Company registered");

        Ok(created)
    }

    async fn get_company(&self, id: &CompanyId) -> Result<Company, CompanyError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CompanyError::NotFound(id.to_string()))
    }

    async fn get_company_by_ico(&self, ico: &Ico) -> Result<Company, CompanyError> {
        self.repository
            .find_by_ico(ico)
            .await?
            .ok_or(CompanyError::NotFoundByIco(ico.to_string()))
    }

    async fn list_companies(&self) -> Result<Vec<Company>, CompanyError> {
        self.repository.list_all().await
    }

    async fn update_company(
        &self,
        id: &CompanyId,
        command: UpdateCompanyCommand,
    ) -> Result<Company, CompanyError> {
        let mut company = self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(company_id = %id, "Update for unknown company");
            CompanyError::NotFound(id.to_string())
        })?;

        if let Some(company_name) = command.company_name {
            company.company_name = company_name;
        }
        if let Some(ico) = command.ico {
            company.ico = ico;
        }
        if let Some(email) = command.email {
            company.email = email;
        }
        if let Some(telephone) = command.telephone {
            company.telephone = telephone;
        }
        if let Some(address) = command.address {
            company.address = address;
        }
        if let Some(password) = command.password {
            company.password_hash = self.password_hasher.hash(&password)?;
        }

        let updated = self.repository.update(company).await?;
        tracing::info!(company_id = %updated.id, "Company updated");

        Ok(updated)
    }
}
