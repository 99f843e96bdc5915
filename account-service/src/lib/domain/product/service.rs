use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::company::models::CompanyId;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::AddProductCommand;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;
use crate::domain::product::ports::ProductServicePort;

/// Domain service implementation for product operations.
pub struct ProductService<PR, CR>
where
    PR: ProductRepository,
    CR: CompanyRepository,
{
    repository: Arc<PR>,
    companies: Arc<CR>,
}

impl<PR, CR> ProductService<PR, CR>
where
    PR: ProductRepository,
    CR: CompanyRepository,
{
    pub fn new(repository: Arc<PR>, companies: Arc<CR>) -> Self {
        Self {
            repository,
            companies,
        }
    }
}

#[async_trait]
impl<PR, CR> ProductServicePort for ProductService<PR, CR>
where
    PR: ProductRepository,
    CR: CompanyRepository,
{
    async fn add_product(
        &self,
        company_id: &CompanyId,
        command: AddProductCommand,
    ) -> Result<Product, ProductError> {
        let company = self
            .companies
            .find_by_id(company_id)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;
        if company.is_none() {
            tracing::warn!(company_id = %company_id, "Product added for unknown company");
            return Err(ProductError::CompanyNotFound(company_id.to_string()));
        }

        let product = NewProduct {
            company_id: *company_id,
            name: command.name,
            description: command.description,
            price: command.price,
            created_at: Utc::now(),
        };

        let created = self.repository.create(product).await?;
        tracing::info!(
            product_id = %created.id,
            company_id = %created.company_id,
            price = %created.price,
            "Product added"
        );

        Ok(created)
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id.to_string()))
    }

    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.repository.list_all().await
    }

    async fn list_company_products(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<Product>, ProductError> {
        self.repository.list_active_by_company(company_id).await
    }

    async fn mark_deleted(&self, id: &ProductId) -> Result<Product, ProductError> {
        self.repository.mark_deleted(id).await?;
        tracing::info!(product_id = %id, "Product marked as deleted");

        self.get_product(id).await
    }

    async fn count_products(&self) -> Result<i64, ProductError> {
        self.repository.count_active().await
    }
}
