use async_trait::async_trait;

use crate::domain::company::models::CompanyId;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::AddProductCommand;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Add a product to an existing company's offer.
    ///
    /// # Errors
    /// * `CompanyNotFound` - Company does not exist
    /// * `DatabaseError` - Database operation failed
    async fn add_product(
        &self,
        company_id: &CompanyId,
        command: AddProductCommand,
    ) -> Result<Product, ProductError>;

    /// Retrieve product by identifier, deleted or not.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError>;

    /// All products including deleted ones.
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Products of one company that are not deleted.
    async fn list_company_products(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<Product>, ProductError>;

    /// Soft-delete a product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn mark_deleted(&self, id: &ProductId) -> Result<Product, ProductError>;

    /// Number of products that are not deleted.
    async fn count_products(&self) -> Result<i64, ProductError>;
}

/// Persistence operations for product aggregate.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist a new product and return it with its assigned id.
    async fn create(&self, product: NewProduct) -> Result<Product, ProductError>;

    /// Optional product by id.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    /// All products, newest first.
    async fn list_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Products of one company that are not deleted, newest first.
    async fn list_active_by_company(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<Product>, ProductError>;

    /// Flag a product as deleted.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    async fn mark_deleted(&self, id: &ProductId) -> Result<(), ProductError>;

    /// Count products that are not deleted.
    async fn count_active(&self) -> Result<i64, ProductError>;
}
