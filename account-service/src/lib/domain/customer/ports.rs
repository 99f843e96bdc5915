use async_trait::async_trait;
use chrono::DateTime;
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

/// Port for customer domain service operations.
#[async_trait]
pub trait CustomerServicePort: Send + Sync + 'static {
    /// Register a new customer, hashing the password.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_customer(&self, command: CreateCustomerCommand)
        -> Result<Customer, CustomerError>;

    /// Retrieve customer by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_customer(&self, id: &CustomerId) -> Result<Customer, CustomerError>;

    /// Retrieve customer by login email.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No customer with this email
    /// * `DatabaseError` - Database operation failed
    async fn get_customer_by_email(&self, email: &EmailAddress)
        -> Result<Customer, CustomerError>;

    /// Retrieve all customers (possibly none).
    async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError>;

    /// Replace a customer's profile.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(
        &self,
        id: &CustomerId,
        command: UpdateProfileCommand,
    ) -> Result<Customer, CustomerError>;

    /// Number of customers holding the basic user role.
    async fn count_basic_users(&self) -> Result<i64, CustomerError>;

    /// Number of customers registered within the window ending now.
    async fn count_registered_within(
        &self,
        window: RegistrationWindow,
    ) -> Result<i64, CustomerError>;
}

/// Persistence operations for customer aggregate.
#[async_trait]
pub trait CustomerRepository: Send + Sync + 'static {
    /// Persist a new customer and return it with its assigned id.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError>;

    /// Optional customer by id.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;

    /// Optional customer by email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError>;

    /// All customers, newest first.
    async fn list_all(&self) -> Result<Vec<Customer>, CustomerError>;

    /// Overwrite a stored customer.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, customer: Customer) -> Result<Customer, CustomerError>;

    /// Count customers with the given role.
    async fn count_by_role(&self, role: Role) -> Result<i64, CustomerError>;

    /// Count customers created at or after `since`.
    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<i64, CustomerError>;
}
