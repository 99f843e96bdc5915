use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::company::models::CompanyId;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Price;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;

/// PostgreSQL implementation of ProductRepository.
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &PgRow) -> Result<Product, ProductError> {
        let db = |e: sqlx::Error| ProductError::DatabaseError(e.to_string());

        Ok(Product {
            id: ProductId(row.try_get("id").map_err(db)?),
            company_id: CompanyId(row.try_get("company_id").map_err(db)?),
            name: row.try_get("name").map_err(db)?,
            description: row.try_get("description").map_err(db)?,
            price: Price::new(row.try_get("price").map_err(db)?)?,
            deleted: row.try_get("deleted").map_err(db)?,
            created_at: row.try_get("created_at").map_err(db)?,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, ProductError> {
        let row = sqlx::query(
            r#"
            INSERT INTO products (company_id, name, description, price, deleted, created_at)
            VALUES ($1, $2, $3, $4, FALSE, $5)
            RETURNING id
            "#,
        )
        .bind(product.company_id.0)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price.as_str())
        .bind(product.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(Product {
            id: ProductId(id),
            company_id: product.company_id,
            name: product.name,
            description: product.description,
            price: product.price,
            deleted: false,
            created_at: product.created_at,
        })
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query(
            r#"
            SELECT id, company_id, name, description, price, deleted, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_product).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let rows = sqlx::query(
            r#"
            SELECT id, company_id, name, description, price, deleted, created_at
            FROM products
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn list_active_by_company(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<Product>, ProductError> {
        let rows = sqlx::query(
            r#"
            SELECT id, company_id, name, description, price, deleted, created_at
            FROM products
            WHERE company_id = $1 AND NOT deleted
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(company_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn mark_deleted(&self, id: &ProductId) -> Result<(), ProductError> {
        let result = sqlx::query("UPDATE products SET deleted = TRUE WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn count_active(&self) -> Result<i64, ProductError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products WHERE NOT deleted")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))
    }
}
