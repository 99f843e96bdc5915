use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::contact::models::EmailAddress;
use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::CreateCustomerCommand;
use crate::domain::customer::models::Customer;
use crate::domain::customer::models::CustomerId;
use crate::domain::customer::models::NewCustomer;
use crate::domain::customer::models::RegistrationWindow;
use crate::domain::customer::models::Role;
use crate::domain::customer::models::UpdateProfileCommand;
use crate::domain::customer::ports::CustomerRepository;
use crate::domain::customer::ports::CustomerServicePort;

/// Domain service implementation for customer operations.
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    repository: Arc<CR>,
    password_hasher: auth::PasswordHasher,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    /// Create a new customer service over a repository.
    pub fn new(repository: Arc<CR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<CR> CustomerServicePort for CustomerService<CR>
where
    CR: CustomerRepository,
{
    async fn create_customer(
        &self,
        command: CreateCustomerCommand,
    ) -> Result<Customer, CustomerError> {
        let password_hash = self.password_hasher.hash(&command.password)?;

        let customer = NewCustomer {
            name: command.name,
            surname: command.surname,
            city: command.city,
            telephone: command.telephone,
            birthdate: command.birthdate,
            email: command.email,
            password_hash,
            role: Role::BASIC_USER,
            created_at: Utc::now(),
        };

        let created = self.repository.create(customer).await?;
        tracing::info!(customer_id = %created.id, "Customer registered");

        Ok(created)
    }

    async fn get_customer(&self, id: &CustomerId) -> Result<Customer, CustomerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id.to_string()))
    }

    async fn get_customer_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Customer, CustomerError> {
        self.repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(CustomerError::NotFoundByEmail(email.to_string()))
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        let customers = self.repository.list_all().await?;
        if customers.is_empty() {
            tracing::debug!("No customers registered");
        }
        Ok(customers)
    }

    async fn update_profile(
        &self,
        id: &CustomerId,
        command: UpdateProfileCommand,
    ) -> Result<Customer, CustomerError> {
        let mut customer = self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(customer_id = %id, "Profile update for unknown customer");
            CustomerError::NotFound(id.to_string())
        })?;

        customer.name = command.name;
        customer.surname = command.surname;
        customer.city = command.city;
        customer.telephone = command.telephone;
        customer.birthdate = command.birthdate;
        customer.email = command.email;

        if let Some(password) = command.password.filter(|p| !p.is_empty()) {
            customer.password_hash = self.password_hasher.hash(&password)?;
        }

        let updated = self.repository.update(customer).await?;
        tracing::info!(customer_id = %updated.id, "Customer profile updated");

        Ok(updated)
    }

    async fn count_basic_users(&self) -> Result<i64, CustomerError> {
        self.repository.count_by_role(Role::BASIC_USER).await
    }

    async fn count_registered_within(
        &self,
        window: RegistrationWindow,
    ) -> Result<i64, CustomerError> {
        let since = Utc::now() - window.duration();
        self.repository.count_created_since(since).await
    }
}
