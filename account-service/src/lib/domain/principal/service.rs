use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::company::models::Ico;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::customer::ports::CustomerRepository;
use crate::domain::principal::errors::LookupError;
use crate::domain::principal::models::PrincipalDetails;
use crate::domain::principal::models::PrincipalKind;
use crate::domain::principal::ports::PrincipalLookup;

/// Resolves customer email subjects.
pub struct CustomerPrincipalLookup<CR>
where
    CR: CustomerRepository,
{
    repository: Arc<CR>,
}

impl<CR> CustomerPrincipalLookup<CR>
where
    CR: CustomerRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> PrincipalLookup for CustomerPrincipalLookup<CR>
where
    CR: CustomerRepository,
{
    async fn load_by_subject(&self, subject: &str) -> Result<PrincipalDetails, LookupError> {
        if subject.trim().is_empty() {
            return Err(LookupError::InvalidSubject(
                "customer email is empty".to_string(),
            ));
        }

        tracing::debug!(email = %subject, "Loading customer principal");

        let customer = self
            .repository
            .find_by_email(subject)
            .await
            .map_err(|e| LookupError::Store(e.to_string()))?
            .ok_or_else(|| LookupError::PrincipalNotFound(subject.to_string()))?;

        Ok(PrincipalDetails::new(
            PrincipalKind::Customer,
            customer.id.0,
            customer.email.as_str(),
            customer.password_hash,
        ))
    }
}

/// Resolves company ico subjects.
pub struct CompanyPrincipalLookup<CR>
where
    CR: CompanyRepository,
{
    repository: Arc<CR>,
}

impl<CR> CompanyPrincipalLookup<CR>
where
    CR: CompanyRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> PrincipalLookup for CompanyPrincipalLookup<CR>
where
    CR: CompanyRepository,
{
    async fn load_by_subject(&self, subject: &str) -> Result<PrincipalDetails, LookupError> {
        let ico = Ico::parse(subject).map_err(|e| LookupError::InvalidSubject(e.to_string()))?;

        tracing::debug!(ico = %ico, "Loading company principal");

        let company = self
            .repository
            .find_by_ico(&ico)
            .await
            .map_err(|e| LookupError::Store(e.to_string()))?
            .ok_or_else(|| LookupError::PrincipalNotFound(subject.to_string()))?;

        Ok(PrincipalDetails::new(
            PrincipalKind::Company,
            company.id.0,
            company.ico.to_string(),
            company.password_hash,
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use chrono::NaiveDate;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::company::errors::CompanyError;
    use crate::domain::company::models::Company;
    use crate::domain::company::models::CompanyId;
    use crate::domain::company::models::NewCompany;
    use crate::domain::contact::models::EmailAddress;
    use crate::domain::contact::models::Telephone;
    use crate::domain::customer::errors::CustomerError;
    use crate::domain::customer::models::Customer;
    use crate::domain::customer::models::CustomerId;
    use crate::domain::customer::models::NewCustomer;
    use crate::domain::customer::models::Role;

    mock! {
        pub TestCustomerRepository {}

        #[async_trait]
        impl CustomerRepository for TestCustomerRepository {
            async fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError>;
            async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError>;
            async fn list_all(&self) -> Result<Vec<Customer>, CustomerError>;
            async fn update(&self, customer: Customer) -> Result<Customer, CustomerError>;
            async fn count_by_role(&self, role: Role) -> Result<i64, CustomerError>;
            async fn count_created_since(&self, since: DateTime<Utc>) -> Result<i64, CustomerError>;
        }
    }

    mock! {
        pub TestCompanyRepository {}

        #[async_trait]
        impl CompanyRepository for TestCompanyRepository {
            async fn create(&self, company: NewCompany) -> Result<Company, CompanyError>;
            async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError>;
            async fn find_by_ico(&self, ico: &Ico) -> Result<Option<Company>, CompanyError>;
            async fn list_all(&self) -> Result<Vec<Company>, CompanyError>;
            async fn update(&self, company: Company) -> Result<Company, CompanyError>;
        }
    }

    fn customer() -> Customer {
        Customer {
            id: CustomerId(3),
            name: "Jana".to_string(),
            surname: "Novakova".to_string(),
            city: "Zilina".to_string(),
            telephone: Telephone::new("0901234567".to_string()).unwrap(),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 2).unwrap(),
            email: EmailAddress::new("jana@example.sk".to_string()).unwrap(),
            password_hash: "H".to_string(),
            role: Role::BASIC_USER,
            created_at: Utc::now(),
        }
    }

    fn company() -> Company {
        Company {
            id: CompanyId(7),
            company_name: "Autoservis s.r.o.".to_string(),
            ico: Ico::parse("12345678").unwrap(),
            email: EmailAddress::new("info@autoservis.sk".to_string()).unwrap(),
            telephone: Telephone::new("0412345678".to_string()).unwrap(),
            address: "Hlavna 1, Zilina".to_string(),
            password_hash: "H".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_customer_lookup_success() {
        let mut repository = MockTestCustomerRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email == "jana@example.sk")
            .times(1)
            .returning(|_| Ok(Some(customer())));

        let lookup = CustomerPrincipalLookup::new(Arc::new(repository));

        let details = lookup.load_by_subject("jana@example.sk").await.unwrap();
        assert_eq!(details.kind, PrincipalKind::Customer);
        assert_eq!(details.principal_id, 3);
        assert_eq!(details.login_name, "jana@example.sk");
        assert_eq!(details.password_hash, "H");
        assert!(details.authorities.is_empty());
    }

    #[tokio::test]
    async fn test_customer_lookup_empty_subject_skips_store() {
        let mut repository = MockTestCustomerRepository::new();
        repository.expect_find_by_email().times(0);

        let lookup = CustomerPrincipalLookup::new(Arc::new(repository));

        let result = lookup.load_by_subject("").await;
        assert!(matches!(result, Err(LookupError::InvalidSubject(_))));
    }

    #[tokio::test]
    async fn test_customer_lookup_not_found() {
        let mut repository = MockTestCustomerRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let lookup = CustomerPrincipalLookup::new(Arc::new(repository));

        let result = lookup.load_by_subject("nobody@example.sk").await;
        assert_eq!(
            result,
            Err(LookupError::PrincipalNotFound("nobody@example.sk".to_string()))
        );
    }

    #[tokio::test]
    async fn test_customer_lookup_store_failure() {
        let mut repository = MockTestCustomerRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Err(CustomerError::DatabaseError("connection reset".to_string())));

        let lookup = CustomerPrincipalLookup::new(Arc::new(repository));

        let result = lookup.load_by_subject("jana@example.sk").await;
        assert!(matches!(result, Err(LookupError::Store(_))));
    }

    #[tokio::test]
    async fn test_company_lookup_success() {
        let mut repository = MockTestCompanyRepository::new();
        repository
            .expect_find_by_ico()
            .withf(|ico| ico.value() == 12345678)
            .times(1)
            .returning(|_| Ok(Some(company())));

        let lookup = CompanyPrincipalLookup::new(Arc::new(repository));

        let details = lookup.load_by_subject("12345678").await.unwrap();
        assert_eq!(details.kind, PrincipalKind::Company);
        assert_eq!(details.principal_id, 7);
        assert_eq!(details.login_name, "12345678");
        assert!(details.authorities.is_empty());
    }

    #[tokio::test]
    async fn test_company_lookup_non_numeric_ico_skips_store() {
        let mut repository = MockTestCompanyRepository::new();
        repository.expect_find_by_ico().times(0);

        let lookup = CompanyPrincipalLookup::new(Arc::new(repository));

        let result = lookup.load_by_subject("12a45").await;
        assert!(matches!(result, Err(LookupError::InvalidSubject(_))));
    }

    #[tokio::test]
    async fn test_company_lookup_empty_subject_skips_store() {
        let mut repository = MockTestCompanyRepository::new();
        repository.expect_find_by_ico().times(0);

        let lookup = CompanyPrincipalLookup::new(Arc::new(repository));

        let result = lookup.load_by_subject("").await;
        assert!(matches!(result, Err(LookupError::InvalidSubject(_))));
    }

    #[tokio::test]
    async fn test_company_lookup_not_found() {
        let mut repository = MockTestCompanyRepository::new();
        repository
            .expect_find_by_ico()
            .times(1)
            .returning(|_| Ok(None));

        let lookup = CompanyPrincipalLookup::new(Arc::new(repository));

        let result = lookup.load_by_subject("87654321").await;
        assert_eq!(
            result,
            Err(LookupError::PrincipalNotFound("87654321".to_string()))
        );
    }
}
