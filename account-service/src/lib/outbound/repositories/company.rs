use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::models::Ico;
use crate::domain::company::models::NewCompany;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::contact::models::EmailAddress;
use crate::domain::contact::models::Telephone;

const ICO_UNIQUE_CONSTRAINT: &str = "companies_ico_key";

/// PostgreSQL implementation of CompanyRepository.
pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_company(row: &PgRow) -> Result<Company, CompanyError> {
        let db = |e: sqlx::Error| CompanyError::DatabaseError(e.to_string());

        Ok(Company {
            id: CompanyId(row.try_get("id").map_err(db)?),
            company_name: row.try_get("company_name").map_err(db)?,
            ico: Ico::from_i64(row.try_get("ico").map_err(db)?)?,
            email: EmailAddress::new(row.try_get("email").map_err(db)?)?,
            telephone: Telephone::new(row.try_get("telephone").map_err(db)?)?,
            address: row.try_get("address").map_err(db)?,
            password_hash: row.try_get("password_hash").map_err(db)?,
            created_at: row.try_get("created_at").map_err(db)?,
        })
    }

    fn map_write_error(e: sqlx::Error, ico: &Ico) -> CompanyError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() && db_err.constraint() == Some(ICO_UNIQUE_CONSTRAINT) {
                return CompanyError::IcoAlreadyExists(ico.to_string());
            }
        }
        CompanyError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn create(&self, company: NewCompany) -> Result<Company, CompanyError> {
        let row = sqlx::query(
            r#"
            INSERT INTO companies
                (company_name, ico, email, telephone, address, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&company.company_name)
        .bind(company.ico.value())
        .bind(company.email.as_str())
        .bind(company.telephone.as_str())
        .bind(&company.address)
        .bind(&company.password_hash)
        .bind(company.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &company.ico))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        Ok(Company {
            id: CompanyId(id),
            company_name: company.company_name,
            ico: company.ico,
            email: company.email,
            telephone: company.telephone,
            address: company.address,
            password_hash: company.password_hash,
            created_at: company.created_at,
        })
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError> {
        let row = sqlx::query(
            r#"
            SELECT id, company_name, ico, email, telephone, address, password_hash, created_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_company).transpose()
    }

    async fn find_by_ico(&self, ico: &Ico) -> Result<Option<Company>, CompanyError> {
        let row = sqlx::query(
            r#"
            SELECT id, company_name, ico, email, telephone, address, password_hash, created_at
            FROM companies
            WHERE ico = $1
            "#,
        )
        .bind(ico.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_company).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Company>, CompanyError> {
        let rows = sqlx::query(
            r#"
            SELECT id, company_name, ico, email, telephone, address, password_hash, created_at
            FROM companies
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_company).collect()
    }

    async fn update(&self, company: Company) -> Result<Company, CompanyError> {
        let result = sqlx::query(
            r#"
            UPDATE companies
            SET company_name = $2, ico = $3, email = $4, telephone = $5, address = $6,
                password_hash = $7
            WHERE id = $1
            "#,
        )
        .bind(company.id.0)
        .bind(&company.company_name)
        .bind(company.ico.value())
        .bind(company.email.as_str())
        .bind(company.telephone.as_str())
        .bind(&company.address)
        .bind(&company.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &company.ico))?;

        if result.rows_affected() == 0 {
            return Err(CompanyError::NotFound(company.id.to_string()));
        }

        Ok(company)
    }
}
