use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::customer::models::CustomerId;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::NewVehicle;
use crate::domain::vehicle::models::PlateNumber;
use crate::domain::vehicle::models::Vehicle;
use crate::domain::vehicle::models::VehicleId;
use crate::domain::vehicle::models::Vin;
use crate::domain::vehicle::ports::VehicleRepository;

const VIN_UNIQUE_CONSTRAINT: &str = "vehicles_vin_key";
const ACTIVE_PLATE_UNIQUE_INDEX: &str = "vehicles_active_plate_key";

const VEHICLE_COLUMNS: &str = "id, customer_id, brand, model, registered_at, vin, plate_no, fuel, \
     color, mileage, transmission_type, tire_size, last_serviced, deleted, created_at";

/// PostgreSQL implementation of VehicleRepository.
pub struct PostgresVehicleRepository {
    pool: PgPool,
}

impl PostgresVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_vehicle(row: &PgRow) -> Result<Vehicle, VehicleError> {
        let db = |e: sqlx::Error| VehicleError::DatabaseError(e.to_string());

        Ok(Vehicle {
            id: VehicleId(row.try_get("id").map_err(db)?),
            customer_id: CustomerId(row.try_get("customer_id").map_err(db)?),
            brand: row.try_get("brand").map_err(db)?,
            model: row.try_get("model").map_err(db)?,
            registered_at: row.try_get("registered_at").map_err(db)?,
            vin: Vin::new(row.try_get("vin").map_err(db)?)?,
            plate_no: PlateNumber::new(row.try_get("plate_no").map_err(db)?)?,
            fuel: row.try_get("fuel").map_err(db)?,
            color: row.try_get("color").map_err(db)?,
            mileage: row.try_get("mileage").map_err(db)?,
            transmission_type: row.try_get("transmission_type").map_err(db)?,
            tire_size: row.try_get("tire_size").map_err(db)?,
            last_serviced: row.try_get("last_serviced").map_err(db)?,
            deleted: row.try_get("deleted").map_err(db)?,
            created_at: row.try_get("created_at").map_err(db)?,
        })
    }

    fn map_write_error(e: sqlx::Error, vin: &Vin, plate_no: &PlateNumber) -> VehicleError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() {
                match db_err.constraint() {
                    Some(VIN_UNIQUE_CONSTRAINT) => {
                        return VehicleError::VinAlreadyExists(vin.to_string())
                    }
                    Some(ACTIVE_PLATE_UNIQUE_INDEX) => {
                        return VehicleError::PlateAlreadyExists(plate_no.to_string())
                    }
                    _ => {}
                }
            }
        }
        VehicleError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl VehicleRepository for PostgresVehicleRepository {
    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, VehicleError> {
        let row = sqlx::query(
            r#"
            INSERT INTO vehicles
                (customer_id, brand, model, registered_at, vin, plate_no, fuel, color,
                 mileage, transmission_type, tire_size, last_serviced, deleted, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, FALSE, $13)
            RETURNING id
            "#,
        )
        .bind(vehicle.customer_id.0)
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.registered_at)
        .bind(vehicle.vin.as_str())
        .bind(vehicle.plate_no.as_str())
        .bind(&vehicle.fuel)
        .bind(&vehicle.color)
        .bind(vehicle.mileage)
        .bind(&vehicle.transmission_type)
        .bind(&vehicle.tire_size)
        .bind(vehicle.last_serviced)
        .bind(vehicle.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &vehicle.vin, &vehicle.plate_no))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        Ok(Vehicle {
            id: VehicleId(id),
            customer_id: vehicle.customer_id,
            brand: vehicle.brand,
            model: vehicle.model,
            registered_at: vehicle.registered_at,
            vin: vehicle.vin,
            plate_no: vehicle.plate_no,
            fuel: vehicle.fuel,
            color: vehicle.color,
            mileage: vehicle.mileage,
            transmission_type: vehicle.transmission_type,
            tire_size: vehicle.tire_size,
            last_serviced: vehicle.last_serviced,
            deleted: false,
            created_at: vehicle.created_at,
        })
    }

    async fn find_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, VehicleError> {
        let row = sqlx::query(&format!("SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_vehicle).transpose()
    }

    async fn find_by_vin(&self, vin: &Vin) -> Result<Option<Vehicle>, VehicleError> {
        let row = sqlx::query(&format!("SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE vin = $1"))
            .bind(vin.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_vehicle).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Vehicle>, VehicleError> {
        let rows = sqlx::query(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_vehicle).collect()
    }

    async fn list_active_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<Vehicle>, VehicleError> {
        let rows = sqlx::query(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles \
             WHERE customer_id = $1 AND NOT deleted \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(customer_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| VehicleError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_vehicle).collect()
    }

    async fn update(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleError> {
        let result = sqlx::query(
            r#"
            UPDATE vehicles
            SET brand = $2, model = $3, registered_at = $4, vin = $5, plate_no = $6,
                fuel = $7, color = $8, mileage = $9, transmission_type = $10,
                tire_size = $11, last_serviced = $12, deleted = $13
            WHERE id = $1
            "#,
        )
        .bind(vehicle.id.0)
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.registered_at)
        .bind(vehicle.vin.as_str())
        .bind(vehicle.plate_no.as_str())
        .bind(&vehicle.fuel)
        .bind(&vehicle.color)
        .bind(vehicle.mileage)
        .bind(&vehicle.transmission_type)
        .bind(&vehicle.tire_size)
        .bind(vehicle.last_serviced)
        .bind(vehicle.deleted)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &vehicle.vin, &vehicle.plate_no))?;

        if result.rows_affected() == 0 {
            return Err(VehicleError::NotFound(vehicle.id.to_string()));
        }

        Ok(vehicle)
    }

    async fn exists_active_plate(&self, plate_no: &PlateNumber) -> Result<bool, VehicleError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate_no = $1 AND NOT deleted)",
        )
        .bind(plate_no.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| VehicleError::DatabaseError(e.to_string()))
    }

    async fn exists_vin(&self, vin: &Vin) -> Result<bool, VehicleError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM vehicles WHERE vin = $1)")
            .bind(vin.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))
    }

    async fn count_all(&self) -> Result<i64, VehicleError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| VehicleError::DatabaseError(e.to_string()))
    }
}
