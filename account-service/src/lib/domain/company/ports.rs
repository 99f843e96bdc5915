use async_trait::async_trait;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::models::CreateCompanyCommand;
use crate::domain::company::models::Ico;
use crate::domain::company::models::NewCompany;
use crate::domain::company::models::UpdateCompanyCommand;

/// Port for company domain service operations.
#[async_trait]
pub trait CompanyServicePort: Send + Sync + 'static {
    /// Register a new company, hashing the password.
    ///
    /// # Errors
    /// * `IcoAlreadyExists` - Ico is already registered
    /// * `DatabaseError` - Database operation failed
    async fn register_company(&self, command: CreateCompanyCommand)
        -> Result<Company, CompanyError>;

    /// Retrieve company by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    async fn get_company(&self, id: &CompanyId) -> Result<Company, CompanyError>;

    /// Retrieve company by registration code.
    ///
    /// # Errors
    /// * `NotFoundByIco` - No company with this ico
    async fn get_company_by_ico(&self, ico: &Ico) -> Result<Company, CompanyError>;

    /// Retrieve all companies.
    async fn list_companies(&self) -> Result<Vec<Company>, CompanyError>;

    /// Apply a partial update.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `IcoAlreadyExists` - New ico is already registered
    async fn update_company(
        &self,
        id: &CompanyId,
        command: UpdateCompanyCommand,
    ) -> Result<Company, CompanyError>;
}

/// Persistence operations for company aggregate.
#[async_trait]
pub trait CompanyRepository: Send + Sync + 'static {
    /// Persist a new company and return it with its assigned id.
    ///
    /// # Errors
    /// * `IcoAlreadyExists` - Ico is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, company: NewCompany) -> Result<Company, CompanyError>;

    /// Optional company by id.
    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError>;

    /// Optional company by registration code.
    async fn find_by_ico(&self, ico: &Ico) -> Result<Option<Company>, CompanyError>;

    /// All companies, newest first.
    async fn list_all(&self) -> Result<Vec<Company>, CompanyError>;

    /// Overwrite a stored company.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `IcoAlreadyExists` - New ico is already registered
    async fn update(&self, company: Company) -> Result<Company, CompanyError>;
}
