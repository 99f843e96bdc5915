use async_trait::async_trait;

use crate::domain::customer::models::CustomerId;
use crate::domain::vehicle::errors::VehicleError;
use crate::domain::vehicle::models::AddVehicleCommand;
use crate::domain::vehicle::models::NewVehicle;
use crate::domain::vehicle::models::PlateNumber;
use crate::domain::vehicle::models::UpdateVehicleCommand;
use crate::domain::vehicle::models::Vehicle;
use crate::domain::vehicle::models::VehicleId;
use crate::domain::vehicle::models::Vin;

/// Port for vehicle domain service operations.
#[async_trait]
pub trait VehicleServicePort: Send + Sync + 'static {
    /// Register a vehicle for an existing customer.
    ///
    /// # Errors
    /// * `OwnerNotFound` - Customer does not exist
    /// * `PlateAlreadyExists` - Plate is held by a vehicle that is not deleted
    /// * `VinAlreadyExists` - VIN is already registered
    /// * `DatabaseError` - Database operation failed
    async fn add_vehicle(
        &self,
        owner: &CustomerId,
        command: AddVehicleCommand,
    ) -> Result<Vehicle, VehicleError>;

    /// Retrieve vehicle by identifier, deleted or not.
    ///
    /// # Errors
    /// * `NotFound` - Vehicle does not exist
    async fn get_vehicle(&self, id: &VehicleId) -> Result<Vehicle, VehicleError>;

    /// Retrieve vehicle by VIN.
    ///
    /// # Errors
    /// * `NotFoundByVin` - No vehicle with this VIN
    async fn get_vehicle_by_vin(&self, vin: &Vin) -> Result<Vehicle, VehicleError>;

    /// All vehicles including deleted ones.
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, VehicleError>;

    /// Vehicles of one customer that are not deleted.
    async fn list_customer_vehicles(
        &self,
        owner: &CustomerId,
    ) -> Result<Vec<Vehicle>, VehicleError>;

    /// Apply a partial edit.
    ///
    /// # Errors
    /// * `NotFound` - Vehicle does not exist
    /// * `PlateAlreadyExists` - New plate is held by another active vehicle
    /// * `VinAlreadyExists` - New VIN belongs to another vehicle
    async fn update_vehicle(
        &self,
        id: &VehicleId,
        command: UpdateVehicleCommand,
    ) -> Result<Vehicle, VehicleError>;

    /// Soft-delete a vehicle.
    ///
    /// # Errors
    /// * `NotFound` - Vehicle does not exist
    async fn mark_deleted(&self, id: &VehicleId) -> Result<Vehicle, VehicleError>;

    /// Number of vehicles ever registered.
    async fn count_vehicles(&self) -> Result<i64, VehicleError>;
}

/// Persistence operations for vehicle aggregate.
#[async_trait]
pub trait VehicleRepository: Send + Sync + 'static {
    /// Persist a new vehicle and return it with its assigned id.
    ///
    /// # Errors
    /// * `PlateAlreadyExists` - Plate is held by an active vehicle
    /// * `VinAlreadyExists` - VIN is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, vehicle: NewVehicle) -> Result<Vehicle, VehicleError>;

    /// Optional vehicle by id.
    async fn find_by_id(&self, id: &VehicleId) -> Result<Option<Vehicle>, VehicleError>;

    /// Optional vehicle by VIN.
    async fn find_by_vin(&self, vin: &Vin) -> Result<Option<Vehicle>, VehicleError>;

    /// All vehicles, newest first.
    async fn list_all(&self) -> Result<Vec<Vehicle>, VehicleError>;

    /// Vehicles of one customer that are not deleted, newest first.
    async fn list_active_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<Vehicle>, VehicleError>;

    /// Overwrite a stored vehicle.
    ///
    /// # Errors
    /// * `NotFound` - Vehicle does not exist
    /// * `PlateAlreadyExists` / `VinAlreadyExists` - Uniqueness violated
    async fn update(&self, vehicle: Vehicle) -> Result<Vehicle, VehicleError>;

    /// Whether an active vehicle holds this plate.
    async fn exists_active_plate(&self, plate_no: &PlateNumber) -> Result<bool, VehicleError>;

    /// Whether any vehicle carries this VIN.
    async fn exists_vin(&self, vin: &Vin) -> Result<bool, VehicleError>;

    /// Count every stored vehicle.
    async fn count_all(&self) -> Result<i64, VehicleError>;
}
