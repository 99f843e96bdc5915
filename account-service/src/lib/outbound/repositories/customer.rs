use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::contact::models::EmailAddress;
use crate::domain::contact::models::Telephone;
use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::Customer;
use crate::domain::customer::models::CustomerId;
use crate::domain::customer::models::NewCustomer;
use crate::domain::customer::models::Role;
use crate::domain::customer::ports::CustomerRepository;

const EMAIL_UNIQUE_CONSTRAINT: &str = "customers_email_key";

/// PostgreSQL implementation of CustomerRepository.
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_customer(row: &PgRow) -> Result<Customer, CustomerError> {
        let db = |e: sqlx::Error| CustomerError::DatabaseError(e.to_string());

        Ok(Customer {
            id: CustomerId(row.try_get("id").map_err(db)?),
            name: row.try_get("name").map_err(db)?,
            surname: row.try_get("surname").map_err(db)?,
            city: row.try_get("city").map_err(db)?,
            telephone: Telephone::new(row.try_get("telephone").map_err(db)?)?,
            birthdate: row.try_get("birthdate").map_err(db)?,
            email: EmailAddress::new(row.try_get("email").map_err(db)?)?,
            password_hash: row.try_get("password_hash").map_err(db)?,
            role: Role(row.try_get("role_id").map_err(db)?),
            created_at: row.try_get("created_at").map_err(db)?,
        })
    }

    fn map_write_error(e: sqlx::Error, email: &EmailAddress) -> CustomerError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation()
                && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT)
            {
                return CustomerError::EmailAlreadyExists(email.to_string());
            }
        }
        CustomerError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError> {
        let row = sqlx::query(
            r#"
            INSERT INTO customers
                (name, surname, city, telephone, birthdate, email, password_hash, role_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.surname)
        .bind(&customer.city)
        .bind(customer.telephone.as_str())
        .bind(customer.birthdate)
        .bind(customer.email.as_str())
        .bind(&customer.password_hash)
        .bind(customer.role.0)
        .bind(customer.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &customer.email))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        Ok(Customer {
            id: CustomerId(id),
            name: customer.name,
            surname: customer.surname,
            city: customer.city,
            telephone: customer.telephone,
            birthdate: customer.birthdate,
            email: customer.email,
            password_hash: customer.password_hash,
            role: customer.role,
            created_at: customer.created_at,
        })
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, surname, city, telephone, birthdate, email, password_hash, role_id, created_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_customer).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, CustomerError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, surname, city, telephone, birthdate, email, password_hash, role_id, created_at
            FROM customers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_customer).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Customer>, CustomerError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, surname, city, telephone, birthdate, email, password_hash, role_id, created_at
            FROM customers
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_customer).collect()
    }

    async fn update(&self, customer: Customer) -> Result<Customer, CustomerError> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = $2, surname = $3, city = $4, telephone = $5, birthdate = $6,
                email = $7, password_hash = $8, role_id = $9
            WHERE id = $1
            "#,
        )
        .bind(customer.id.0)
        .bind(&customer.name)
        .bind(&customer.surname)
        .bind(&customer.city)
        .bind(customer.telephone.as_str())
        .bind(customer.birthdate)
        .bind(customer.email.as_str())
        .bind(&customer.password_hash)
        .bind(customer.role.0)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &customer.email))?;

        if result.rows_affected() == 0 {
            return Err(CustomerError::NotFound(customer.id.to_string()));
        }

        Ok(customer)
    }

    async fn count_by_role(&self, role: Role) -> Result<i64, CustomerError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers WHERE role_id = $1")
            .bind(role.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<i64, CustomerError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers WHERE created_at >= $1")
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CustomerError::DatabaseError(e.to_string()))
    }
}
